//! Error types for hemolink-storage

use thiserror::Error;

/// Result type alias for hemolink-storage operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in hemolink-storage
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Database error
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Unique-email constraint violation on user insert
    #[error("email already registered: {0}")]
    EmailTaken(String),

    /// Row lookup by id came back empty
    #[error("{entity} not found with id {id}")]
    NotFound {
        /// Entity kind, e.g. `"user"` or `"donor profile"`
        entity: &'static str,
        /// The id that was looked up
        id: i64,
    },

    /// A stored column holds a value the domain model rejects
    #[error("invalid stored value in column {column}: {message}")]
    Decode {
        /// Offending column name
        column: &'static str,
        /// Parse failure detail
        message: String,
    },

    /// The database was written by a newer binary
    #[error("database schema version {db_version} is newer than supported version {latest_supported}")]
    UnsupportedSchemaVersion {
        /// `PRAGMA user_version` found in the database
        db_version: u32,
        /// Latest migration known to this binary
        latest_supported: u32,
    },
}
