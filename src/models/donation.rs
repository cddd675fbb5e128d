//! Donation model and request/response bodies.

use serde::{Deserialize, Serialize};

/// A single donation record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Donation {
    pub id: i64,
    pub donor_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub amount: f64,
    pub cause: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub is_anonymous: bool,
    pub created_at: String,
    pub updated_at: String,
}

/// Request body for creating a new donation.
///
/// Every field is optional at the parse layer; required fields are
/// enforced by validation so that a missing field yields a 400 naming
/// the field instead of a deserialization failure.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateDonationRequest {
    #[serde(default)]
    pub donor_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub cause: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub is_anonymous: Option<bool>,
}

/// Request body for partially updating an existing donation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateDonationRequest {
    #[serde(default)]
    pub donor_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub cause: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub is_anonymous: Option<bool>,
}

impl UpdateDonationRequest {
    /// Merge this partial update onto an existing record.
    ///
    /// Unset fields keep the existing value. `id` and `created_at` are
    /// immutable; `updated_at` is carried over unchanged and refreshed
    /// by the caller on a successful write.
    pub fn merge_into(&self, existing: &Donation) -> Donation {
        Donation {
            id: existing.id,
            donor_name: self
                .donor_name
                .clone()
                .unwrap_or_else(|| existing.donor_name.clone()),
            email: self.email.clone().or(existing.email.clone()),
            amount: self.amount.unwrap_or(existing.amount),
            cause: self.cause.clone().unwrap_or_else(|| existing.cause.clone()),
            message: self.message.clone().or(existing.message.clone()),
            is_anonymous: self.is_anonymous.unwrap_or(existing.is_anonymous),
            created_at: existing.created_at.clone(),
            updated_at: existing.updated_at.clone(),
        }
    }
}

/// Aggregate statistics over all donations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DonationStats {
    pub total_raised: f64,
    pub total_donations: i64,
    pub unique_donors: i64,
}

/// Response body for a successful delete.
#[derive(Debug, Clone, Serialize)]
pub struct DeleteDonationResponse {
    pub message: String,
    pub donation: Donation,
}
