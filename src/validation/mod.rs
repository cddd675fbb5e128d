//! Field-level validation for incoming donation payloads.
//!
//! Applied on the create path only. Every failing field is collected so
//! the caller sees the full list in one response.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::FieldError;
use crate::models::CreateDonationRequest;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

/// Validate a create request, collecting every failing field.
pub fn validate_create(request: &CreateDonationRequest) -> Vec<FieldError> {
    let mut errors = Vec::new();

    let donor_name = request.donor_name.as_deref().map(str::trim).unwrap_or("");
    if donor_name.is_empty() {
        errors.push(FieldError::new("donor_name", "Donor name is required"));
    }

    // Covers missing, non-finite and below-minimum amounts alike.
    if !request.amount.map(|a| a >= 1.0).unwrap_or(false) {
        errors.push(FieldError::new("amount", "Amount must be at least 1"));
    }

    let cause = request.cause.as_deref().map(str::trim).unwrap_or("");
    if cause.is_empty() {
        errors.push(FieldError::new("cause", "Cause is required"));
    }

    if let Some(email) = request.email.as_deref() {
        if !EMAIL_RE.is_match(email) {
            errors.push(FieldError::new("email", "Invalid email format"));
        }
    }

    errors
}
