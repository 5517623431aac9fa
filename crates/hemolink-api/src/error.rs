//! Error types for hemolink-api

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

/// Result type alias for hemolink-api operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in hemolink-api.
///
/// Every variant renders as `{"error": "<message>"}` with the matching
/// status code, so handlers can bubble errors with `?`.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Request payload is structurally valid JSON but semantically wrong
    #[error("{0}")]
    BadRequest(String),

    /// Entity lookup came back empty
    #[error("{0}")]
    NotFound(String),

    /// Credential or token failure
    #[error("{0}")]
    Unauthorized(String),

    /// Error from hemolink-auth
    #[error(transparent)]
    Auth(#[from] hemolink_auth::AuthError),

    /// Error from hemolink-storage
    #[error(transparent)]
    Storage(#[from] hemolink_storage::Error),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Error::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            Error::NotFound(message) => (StatusCode::NOT_FOUND, message),
            Error::Unauthorized(message) => (StatusCode::UNAUTHORIZED, message),
            Error::Auth(e) if e.is_client_error() => (StatusCode::UNAUTHORIZED, e.to_string()),
            Error::Auth(e) => {
                tracing::error!(error = %e, "auth backend failure");
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
            }
            Error::Storage(hemolink_storage::Error::EmailTaken(email)) => (
                StatusCode::BAD_REQUEST,
                format!("email already registered: {email}"),
            ),
            Error::Storage(e @ hemolink_storage::Error::NotFound { .. }) => {
                (StatusCode::NOT_FOUND, e.to_string())
            }
            Error::Storage(e) => {
                tracing::error!(error = %e, "storage failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bad_request_maps_to_400() {
        let resp = Error::BadRequest("nope".to_string()).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_email_taken_maps_to_400() {
        let err = Error::Storage(hemolink_storage::Error::EmailTaken("a@b.com".to_string()));
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_storage_not_found_maps_to_404() {
        let err = Error::Storage(hemolink_storage::Error::NotFound {
            entity: "donation",
            id: 3,
        });
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_client_auth_error_maps_to_401() {
        let err = Error::Auth(hemolink_auth::AuthError::Expired);
        assert_eq!(err.into_response().status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_server_auth_error_maps_to_500() {
        let err = Error::Auth(hemolink_auth::AuthError::Hashing("boom".to_string()));
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
