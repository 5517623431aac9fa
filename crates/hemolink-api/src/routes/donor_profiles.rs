//! Donor profile endpoints.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use hemolink_core::model::{DonorProfile, NewDonorProfile};

use crate::error::{Error, Result};
use crate::state::AppState;

/// `GET /api/donor_profiles` — all profiles with users embedded.
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<DonorProfile>>> {
    Ok(Json(state.profiles.find_all().await?))
}

/// `POST /api/donor_profiles` — create a profile for an existing user.
pub async fn create(
    State(state): State<AppState>,
    Json(profile): Json<NewDonorProfile>,
) -> Result<(StatusCode, Json<DonorProfile>)> {
    let user_ref = profile.user.ok_or_else(|| {
        Error::BadRequest("user id is required when creating a donor profile".to_string())
    })?;

    let user = state
        .users
        .find_by_id(user_ref.user_id)
        .await?
        .ok_or_else(|| {
            Error::BadRequest(format!("user not found with id {}", user_ref.user_id))
        })?;

    let stored = state.profiles.insert(&profile, user.user_id).await?;
    Ok((StatusCode::CREATED, Json(stored)))
}

/// `GET /api/donor_profiles/{id}`.
pub async fn get_one(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<DonorProfile>> {
    let profile = state
        .profiles
        .find_by_id(id)
        .await?
        .ok_or_else(|| Error::NotFound(format!("donor profile not found with id {id}")))?;
    Ok(Json(profile))
}

/// `DELETE /api/donor_profiles/{id}` — 204 whether or not the row existed.
pub async fn remove(State(state): State<AppState>, Path(id): Path<i64>) -> Result<StatusCode> {
    state.profiles.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
