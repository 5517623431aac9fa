//! Donation endpoints.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use hemolink_core::model::{Donation, NewDonation};

use crate::error::{Error, Result};
use crate::state::AppState;

/// `POST /api/donations` — record a completed donation.
pub async fn create(
    State(state): State<AppState>,
    Json(donation): Json<NewDonation>,
) -> Result<Json<Donation>> {
    let (donor_ref, request_ref) = match (donation.donor_profile, donation.fulfilled_request) {
        (Some(d), Some(r)) => (d, r),
        _ => {
            return Err(Error::BadRequest(
                "missing donorProfile or fulfilledRequest ids".to_string(),
            ));
        }
    };

    let donor_exists = state.profiles.find_by_id(donor_ref.donor_id).await?.is_some();
    let request_exists = state
        .requests
        .find_by_id(request_ref.request_id)
        .await?
        .is_some();
    if !donor_exists || !request_exists {
        return Err(Error::BadRequest(
            "invalid donorId or requestId".to_string(),
        ));
    }

    let stored = state
        .donations
        .insert(&donation, donor_ref.donor_id, request_ref.request_id)
        .await?;
    Ok(Json(stored))
}

/// `GET /api/donations` — all donations with details.
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Donation>>> {
    Ok(Json(state.donations.find_all().await?))
}

/// `DELETE /api/donations/{id}` — 404 when absent, otherwise 204.
pub async fn remove(State(state): State<AppState>, Path(id): Path<i64>) -> Result<StatusCode> {
    if !state.donations.exists(id).await? {
        return Err(Error::NotFound("donation not found".to_string()));
    }
    state.donations.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
