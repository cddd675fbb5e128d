//! Database repository for donation CRUD operations.
//!
//! All values go through parameter binding; the only interpolated SQL
//! fragments are sort identifiers drawn from a fixed allow-list.

use chrono::Utc;
use sqlx::{Row, SqlitePool};

use crate::errors::AppError;
use crate::models::{CreateDonationRequest, Donation, DonationStats, UpdateDonationRequest};

const DONATION_COLUMNS: &str =
    "id, donor_name, email, amount, cause, message, is_anonymous, created_at, updated_at";

/// Columns a listing may be sorted by. Anything else falls back to `created_at`.
const SORTABLE_COLUMNS: &[&str] = &["created_at", "amount", "donor_name", "id"];

fn sort_column(requested: Option<&str>) -> &'static str {
    requested
        .and_then(|col| SORTABLE_COLUMNS.iter().find(|c| **c == col))
        .copied()
        .unwrap_or("created_at")
}

fn sort_direction(requested: Option<&str>) -> &'static str {
    match requested {
        Some(dir) if dir.eq_ignore_ascii_case("asc") => "ASC",
        _ => "DESC",
    }
}

/// Database repository for all donation data operations.
#[derive(Clone)]
pub struct Repository {
    pool: SqlitePool,
}

impl Repository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List donations, optionally filtered by exact cause, in the requested order.
    pub async fn list_donations(
        &self,
        cause: Option<&str>,
        sort: Option<&str>,
        order: Option<&str>,
    ) -> Result<Vec<Donation>, AppError> {
        let column = sort_column(sort);
        let direction = sort_direction(order);

        let rows = match cause {
            Some(cause) => {
                let query = format!(
                    "SELECT {DONATION_COLUMNS} FROM donations WHERE cause = ? ORDER BY {column} {direction}"
                );
                sqlx::query(&query).bind(cause).fetch_all(&self.pool).await?
            }
            None => {
                let query = format!(
                    "SELECT {DONATION_COLUMNS} FROM donations ORDER BY {column} {direction}"
                );
                sqlx::query(&query).fetch_all(&self.pool).await?
            }
        };

        Ok(rows.iter().map(donation_from_row).collect())
    }

    /// Get a donation by ID.
    pub async fn get_donation(&self, id: i64) -> Result<Option<Donation>, AppError> {
        let row = sqlx::query(&format!(
            "SELECT {DONATION_COLUMNS} FROM donations WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(donation_from_row))
    }

    /// Insert a new donation and read the stored row back.
    ///
    /// The request must already have passed validation; required fields
    /// are present at this point.
    pub async fn create_donation(
        &self,
        request: &CreateDonationRequest,
    ) -> Result<Donation, AppError> {
        let now = Utc::now().to_rfc3339();
        let donor_name = request
            .donor_name
            .as_deref()
            .unwrap_or_default()
            .trim()
            .to_string();
        let cause = request.cause.as_deref().unwrap_or_default().trim().to_string();
        let amount = request.amount.unwrap_or_default();
        let is_anonymous = request.is_anonymous.unwrap_or(false);

        let result = sqlx::query(
            "INSERT INTO donations (donor_name, email, amount, cause, message, is_anonymous, created_at, updated_at) VALUES (?, ?, ?, ?, ?, ?, ?, ?)"
        )
        .bind(&donor_name)
        .bind(&request.email)
        .bind(amount)
        .bind(&cause)
        .bind(&request.message)
        .bind(is_anonymous as i32)
        .bind(&now)
        .bind(&now)
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_rowid();

        self.get_donation(id)
            .await?
            .ok_or_else(|| AppError::Database(format!("Donation {} missing after insert", id)))
    }

    /// Partially update a donation, keeping prior values for unset fields.
    ///
    /// Returns `None` when no donation with that ID exists.
    pub async fn update_donation(
        &self,
        id: i64,
        request: &UpdateDonationRequest,
    ) -> Result<Option<Donation>, AppError> {
        let existing = match self.get_donation(id).await? {
            Some(existing) => existing,
            None => return Ok(None),
        };

        let mut merged = request.merge_into(&existing);
        merged.updated_at = Utc::now().to_rfc3339();

        sqlx::query(
            "UPDATE donations SET donor_name = ?, email = ?, amount = ?, cause = ?, message = ?, is_anonymous = ?, updated_at = ? WHERE id = ?"
        )
        .bind(&merged.donor_name)
        .bind(&merged.email)
        .bind(merged.amount)
        .bind(&merged.cause)
        .bind(&merged.message)
        .bind(merged.is_anonymous as i32)
        .bind(&merged.updated_at)
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(Some(merged))
    }

    /// Delete a donation, returning its prior state for confirmation.
    ///
    /// A single DELETE .. RETURNING statement, so a concurrent delete of
    /// the same row cannot race between read and removal.
    pub async fn delete_donation(&self, id: i64) -> Result<Option<Donation>, AppError> {
        let row = sqlx::query(&format!(
            "DELETE FROM donations WHERE id = ? RETURNING {DONATION_COLUMNS}"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(donation_from_row))
    }

    /// Compute the aggregate statistics in a single query pass.
    ///
    /// Anonymous donations are excluded from the distinct-donor count.
    pub async fn aggregate_stats(&self) -> Result<DonationStats, AppError> {
        let row = sqlx::query(
            r#"SELECT
                COALESCE(SUM(amount), 0.0) AS total_raised,
                COUNT(*) AS total_donations,
                COUNT(DISTINCT CASE WHEN is_anonymous = 0 THEN donor_name END) AS unique_donors
               FROM donations"#,
        )
        .fetch_one(&self.pool)
        .await?;

        Ok(DonationStats {
            total_raised: row.get("total_raised"),
            total_donations: row.get("total_donations"),
            unique_donors: row.get("unique_donors"),
        })
    }
}

// Helper for row conversion

fn donation_from_row(row: &sqlx::sqlite::SqliteRow) -> Donation {
    let is_anonymous: i32 = row.get("is_anonymous");
    Donation {
        id: row.get("id"),
        donor_name: row.get("donor_name"),
        email: row.get("email"),
        amount: row.get("amount"),
        cause: row.get("cause"),
        message: row.get("message"),
        is_anonymous: is_anonymous != 0,
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}
