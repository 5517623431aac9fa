//! HS256 token issuance and validation.
//!
//! Tokens carry the user's email as `sub` plus `iat`/`exp`; the signing
//! secret and lifetime come from [`AuthConfig`].

use std::time::{SystemTime, UNIX_EPOCH};

use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::{AuthConfig, AuthError};

/// Registered claims carried by a Hemolink token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the user's email address.
    pub sub: String,
    /// Issued-at, seconds since the epoch.
    pub iat: u64,
    /// Expiry, seconds since the epoch.
    pub exp: u64,
}

/// Issue a token for the given email, expiring after the configured TTL.
pub fn issue(email: &str, config: &AuthConfig) -> Result<String, AuthError> {
    issue_at(email, now_epoch(), config)
}

/// Issue a token with an explicit issue time.
pub fn issue_at(email: &str, issued_at: u64, config: &AuthConfig) -> Result<String, AuthError> {
    let claims = Claims {
        sub: email.to_string(),
        iat: issued_at,
        exp: issued_at + config.token_ttl_secs,
    };
    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
    .map_err(|e| AuthError::Signing(e.to_string()))
}

/// Validate a token's signature and expiry, returning its claims.
pub fn verify(token: &str, config: &AuthConfig) -> Result<Claims, AuthError> {
    let validation = Validation::new(Algorithm::HS256);
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::Expired,
        jsonwebtoken::errors::ErrorKind::InvalidToken
        | jsonwebtoken::errors::ErrorKind::Base64(_)
        | jsonwebtoken::errors::ErrorKind::Json(_)
        | jsonwebtoken::errors::ErrorKind::Utf8(_) => AuthError::InvalidFormat(e.to_string()),
        _ => AuthError::InvalidSignature(e.to_string()),
    })
}

fn now_epoch() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> AuthConfig {
        AuthConfig {
            enabled: true,
            secret: "test-secret".to_string(),
            token_ttl_secs: 3600,
        }
    }

    #[test]
    fn test_issue_and_verify_round_trip() {
        let config = test_config();
        let token = issue("alice@example.com", &config).unwrap();
        let claims = verify(&token, &config).unwrap();
        assert_eq!(claims.sub, "alice@example.com");
        assert_eq!(claims.exp, claims.iat + 3600);
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let config = test_config();
        // Issued two hours before it could still be valid; well past the
        // validator's default leeway.
        let issued_at = now_epoch() - 2 * 3600 - 120;
        let token = issue_at("alice@example.com", issued_at, &config).unwrap();
        let result = verify(&token, &config);
        assert!(matches!(result, Err(AuthError::Expired)));
    }

    #[test]
    fn test_wrong_secret_is_rejected() {
        let config = test_config();
        let token = issue("alice@example.com", &config).unwrap();

        let other = AuthConfig {
            secret: "different-secret".to_string(),
            ..test_config()
        };
        let result = verify(&token, &other);
        assert!(matches!(result, Err(AuthError::InvalidSignature(_))));
    }

    #[test]
    fn test_garbage_token_is_invalid_format() {
        let config = test_config();
        let result = verify("not-a-jwt", &config);
        assert!(matches!(result, Err(AuthError::InvalidFormat(_))));
    }
}
