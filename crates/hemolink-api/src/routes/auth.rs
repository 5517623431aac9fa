//! Registration and login.

use axum::extract::State;
use axum::Json;

use hemolink_auth::{password, token};
use hemolink_core::model::{AuthResponse, LoginRequest, NewUser, RegisterRequest, User};

use crate::error::{Error, Result};
use crate::state::AppState;

/// `POST /api/auth/register` — create an account and return a token.
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<Json<AuthResponse>> {
    if state.users.find_by_email(&request.email).await?.is_some() {
        return Err(Error::BadRequest(format!(
            "email already registered: {}",
            request.email
        )));
    }

    let password_hash = password::hash(&request.password)?;
    let user = state
        .users
        .insert(&NewUser {
            full_name: request.full_name,
            email: request.email,
            phone: request.phone,
            password_hash,
            role: request.role,
            home_address: request.home_address,
            blood_type: request.blood_type,
            rhesus: request.rhesus,
        })
        .await?;

    tracing::info!(user_id = user.user_id, email = %user.email, "registered user");

    let token = token::issue(&user.email, &state.auth)?;
    Ok(Json(auth_response(user, token)))
}

/// `POST /api/auth/login` — verify credentials and return a fresh token.
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<AuthResponse>> {
    let user = state
        .users
        .find_by_email(&request.email)
        .await?
        .ok_or_else(|| Error::Unauthorized("user not found".to_string()))?;

    if !password::verify(&request.password, &user.password_hash)? {
        return Err(Error::Unauthorized("invalid password".to_string()));
    }

    tracing::debug!(user_id = user.user_id, "login verified");

    let token = token::issue(&user.email, &state.auth)?;
    Ok(Json(auth_response(user, token)))
}

fn auth_response(user: User, token: String) -> AuthResponse {
    AuthResponse {
        token,
        user_id: user.user_id,
        full_name: user.full_name,
        email: user.email,
        role: user.role,
        blood_type: user.blood_type,
        rhesus: user.rhesus,
        home_address: user.home_address,
    }
}
