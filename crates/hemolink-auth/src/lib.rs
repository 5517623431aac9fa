//! Authentication primitives for Hemolink.
//!
//! Provides:
//! - [`password`] — bcrypt hashing and verification for stored credentials
//! - [`token`] — HS256 JWT issuance and validation
//! - [`AuthenticatedUser`] — identity extracted from a validated token
//! - [`BearerAuthLayer`] / [`BearerAuthService`] — Tower middleware guarding
//!   routes behind bearer-token validation
//! - [`AuthConfig`] — configuration for the token signer and middleware
//! - [`AuthError`] — auth-specific error types

mod error;
mod middleware;
pub mod password;
pub mod token;

pub use error::AuthError;
pub use middleware::{BearerAuthLayer, BearerAuthService};
pub use token::Claims;

/// Configuration for token issuance and the auth middleware.
#[derive(Clone, Debug)]
pub struct AuthConfig {
    /// Whether the middleware enforces tokens. When false, all requests
    /// pass through (the register/login endpoints still issue tokens).
    pub enabled: bool,
    /// HMAC secret for signing and verifying tokens.
    pub secret: String,
    /// Token lifetime in seconds.
    pub token_ttl_secs: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            secret: String::new(),
            token_ttl_secs: 24 * 60 * 60,
        }
    }
}

/// An authenticated user identity, extracted from a validated token.
///
/// Stored in HTTP request extensions by the auth middleware where it is
/// available to downstream handlers.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    /// The user's email address (the token's `sub` claim).
    pub email: String,
}
