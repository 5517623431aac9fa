//! Blood request endpoints.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use hemolink_core::model::{BloodRequest, NewBloodRequest};

use crate::error::{Error, Result};
use crate::state::AppState;

/// `GET /api/blood_requests` — all requests with requesters embedded.
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<BloodRequest>>> {
    Ok(Json(state.requests.find_all().await?))
}

/// `POST /api/blood_requests` — create a request for an existing user.
pub async fn create(
    State(state): State<AppState>,
    Json(request): Json<NewBloodRequest>,
) -> Result<(StatusCode, Json<BloodRequest>)> {
    let user_ref = request.user.ok_or_else(|| {
        Error::BadRequest("user id is required when creating a blood request".to_string())
    })?;

    let user = state
        .users
        .find_by_id(user_ref.user_id)
        .await?
        .ok_or_else(|| {
            Error::BadRequest(format!("user not found with id {}", user_ref.user_id))
        })?;

    let stored = state.requests.insert(&request, user.user_id).await?;
    Ok((StatusCode::CREATED, Json(stored)))
}

/// `DELETE /api/blood_requests/{id}` — 204 whether or not the row existed.
pub async fn remove(State(state): State<AppState>, Path(id): Path<i64>) -> Result<StatusCode> {
    state.requests.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
