//! Password hashing and verification.
//!
//! Bcrypt with the library default cost; each hash carries its own salt,
//! so verification needs only the stored hash string.

use crate::AuthError;

/// Hash a plaintext password for storage.
pub fn hash(plain: &str) -> Result<String, AuthError> {
    bcrypt::hash(plain, bcrypt::DEFAULT_COST).map_err(|e| AuthError::Hashing(e.to_string()))
}

/// Verify a plaintext password against a stored bcrypt hash.
///
/// Returns `Ok(false)` for a well-formed hash that does not match;
/// a malformed stored hash is a server-side fault.
pub fn verify(plain: &str, hashed: &str) -> Result<bool, AuthError> {
    bcrypt::verify(plain, hashed).map_err(|e| AuthError::Hashing(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_then_verify() {
        let hashed = hash("Password123!").unwrap();
        assert!(hashed.starts_with("$2"));
        assert!(verify("Password123!", &hashed).unwrap());
    }

    #[test]
    fn test_wrong_password_does_not_verify() {
        let hashed = hash("correct horse").unwrap();
        assert!(!verify("battery staple", &hashed).unwrap());
    }

    #[test]
    fn test_hashes_are_salted() {
        let a = hash("same input").unwrap();
        let b = hash("same input").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_malformed_stored_hash_is_error() {
        assert!(verify("anything", "not-a-bcrypt-hash").is_err());
    }
}
