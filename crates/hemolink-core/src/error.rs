//! Error types for hemolink-core

/// Result type alias for hemolink-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in hemolink-core
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Field-level validation error
    #[error("validation error: {message}")]
    Validation {
        /// Field that failed validation, when known
        field: Option<String>,
        /// What went wrong
        message: String,
    },

    /// Unrecognized blood type symbol
    #[error("unknown blood type '{0}' (expected A, B, AB, or O)")]
    UnknownBloodType(String),

    /// Unrecognized rhesus factor symbol
    #[error("unknown rhesus factor '{0}' (expected '+' or '-')")]
    UnknownRhesus(String),

    /// JSON serialization/deserialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Creates a new validation error.
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Error::Validation {
            field: None,
            message: message.into(),
        }
    }

    /// Creates a new validation error for a named field.
    pub fn validation_field<F, M>(field: F, message: M) -> Self
    where
        F: Into<String>,
        M: Into<String>,
    {
        Error::Validation {
            field: Some(field.into()),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        let err = Error::validation("email is required");
        assert_eq!(err.to_string(), "validation error: email is required");
    }

    #[test]
    fn test_validation_error_with_field() {
        let err = Error::validation_field("phone", "must be 7-15 digits");
        let Error::Validation { field, message } = err else {
            unreachable!("expected Validation variant");
        };
        assert_eq!(field, Some("phone".to_string()));
        assert_eq!(message, "must be 7-15 digits");
    }

    #[test]
    fn test_unknown_blood_type_display() {
        let err = Error::UnknownBloodType("Z".to_string());
        assert_eq!(
            err.to_string(),
            "unknown blood type 'Z' (expected A, B, AB, or O)"
        );
    }

    #[test]
    fn test_error_implements_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Error>();
    }
}
