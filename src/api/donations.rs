//! Donation API endpoints.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::{
    CreateDonationRequest, DeleteDonationResponse, Donation, UpdateDonationRequest,
};
use crate::validation;
use crate::AppState;

/// Query parameters for the donation listing.
#[derive(Debug, Deserialize)]
pub struct ListDonationsQuery {
    pub cause: Option<String>,
    pub sort: Option<String>,
    pub order: Option<String>,
}

/// GET /api/donations - List donations, newest first by default.
pub async fn list_donations(
    State(state): State<AppState>,
    Query(query): Query<ListDonationsQuery>,
) -> Result<Json<Vec<Donation>>, AppError> {
    let donations = state
        .repo
        .list_donations(
            query.cause.as_deref(),
            query.sort.as_deref(),
            query.order.as_deref(),
        )
        .await?;

    Ok(Json(donations))
}

/// GET /api/donations/:id - Get a single donation.
pub async fn get_donation(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Donation>, AppError> {
    match state.repo.get_donation(id).await? {
        Some(donation) => Ok(Json(donation)),
        None => Err(AppError::NotFound("Donation not found".to_string())),
    }
}

/// POST /api/donations - Create a new donation.
pub async fn create_donation(
    State(state): State<AppState>,
    Json(request): Json<CreateDonationRequest>,
) -> Result<(StatusCode, Json<Donation>), AppError> {
    let errors = validation::validate_create(&request);
    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }

    let donation = state.repo.create_donation(&request).await?;
    Ok((StatusCode::CREATED, Json(donation)))
}

/// PUT /api/donations/:id - Partially update a donation.
///
/// Unset fields keep their stored values. No field validation is applied
/// here, so a partial body may carry values the create path would reject;
/// see DESIGN.md before changing this contract.
pub async fn update_donation(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<UpdateDonationRequest>,
) -> Result<Json<Donation>, AppError> {
    match state.repo.update_donation(id, &request).await? {
        Some(donation) => Ok(Json(donation)),
        None => Err(AppError::NotFound("Donation not found".to_string())),
    }
}

/// DELETE /api/donations/:id - Delete a donation permanently.
pub async fn delete_donation(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<DeleteDonationResponse>, AppError> {
    match state.repo.delete_donation(id).await? {
        Some(donation) => Ok(Json(DeleteDonationResponse {
            message: "Donation deleted successfully".to_string(),
            donation,
        })),
        None => Err(AppError::NotFound("Donation not found".to_string())),
    }
}
