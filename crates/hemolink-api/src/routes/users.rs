//! User endpoints.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use hemolink_core::model::{NewUser, User};

use crate::error::Result;
use crate::state::AppState;

/// `GET /api/users` — all users.
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<User>>> {
    Ok(Json(state.users.find_all().await?))
}

/// `POST /api/users` — administrative pass-through create.
///
/// Stores the payload as supplied; registration is the hashing path.
pub async fn create(
    State(state): State<AppState>,
    Json(user): Json<NewUser>,
) -> Result<(StatusCode, Json<User>)> {
    let stored = state.users.insert(&user).await?;
    Ok((StatusCode::CREATED, Json(stored)))
}

/// `DELETE /api/users/{user_id}` — 204 whether or not the row existed.
pub async fn remove(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<StatusCode> {
    state.users.delete(user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
