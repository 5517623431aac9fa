//! Error types for hemolink-client

use thiserror::Error;

/// Result type alias for hemolink-client operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in hemolink-client
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from hemolink-core (form validation, bad symbols)
    #[error(transparent)]
    Core(#[from] hemolink_core::Error),

    /// HTTP transport error
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("api error ({status}): {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// The server's `{"error": ...}` message, or a fallback
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let err = Error::Api {
            status: 400,
            message: "email already registered: a@b.com".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "api error (400): email already registered: a@b.com"
        );
    }

    #[test]
    fn test_validation_error_converts_from_core() {
        let err: Error = hemolink_core::Error::validation("email is required").into();
        assert!(matches!(err, Error::Core(_)));
    }
}
