//! Aggregate statistics endpoint.

use axum::{extract::State, Json};

use crate::errors::AppError;
use crate::models::DonationStats;
use crate::AppState;

/// GET /api/stats - Totals over the full donations table.
///
/// Stateless read, recomputed on every call.
pub async fn get_stats(State(state): State<AppState>) -> Result<Json<DonationStats>, AppError> {
    let stats = state.repo.aggregate_stats().await?;
    Ok(Json(stats))
}
