//! User account entity and DTOs.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::blood::{BloodType, Rhesus};

/// A registered account: donor, recipient, or administrator.
///
/// `password_hash` travels on the wire because the administrative user
/// listing exposes the stored record as-is; only the registration endpoint
/// ever hashes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Database identifier.
    pub user_id: i64,
    /// Display name, first and last.
    pub full_name: String,
    /// Login identifier; unique.
    pub email: String,
    /// Contact phone number.
    pub phone: Option<String>,
    /// Bcrypt hash (or, for pass-through created users, whatever was supplied).
    pub password_hash: String,
    /// Free-form role: `Donor`, `Recipient`, `Admin`, or `UNASSIGNED`.
    pub role: String,
    /// Residential address.
    pub home_address: Option<String>,
    /// ABO group, when declared.
    pub blood_type: Option<BloodType>,
    /// Rhesus factor, when declared.
    pub rhesus: Option<Rhesus>,
    /// Set by storage at insert time (UTC, naive).
    pub created_at: NaiveDateTime,
}

/// Payload for the administrative `POST /api/users` pass-through.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    /// Display name.
    pub full_name: String,
    /// Login identifier; must be unused.
    pub email: String,
    /// Contact phone number.
    pub phone: Option<String>,
    /// Stored verbatim; this endpoint does not hash.
    pub password_hash: String,
    /// Role string; defaults to `UNASSIGNED` when omitted.
    #[serde(default = "default_role")]
    pub role: String,
    /// Residential address.
    pub home_address: Option<String>,
    /// ABO group.
    pub blood_type: Option<BloodType>,
    /// Rhesus factor.
    pub rhesus: Option<Rhesus>,
}

/// Id-only reference to a user, as embedded in creation payloads
/// (`{"user": {"userId": 7}}`).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRef {
    /// Referenced `users.user_id`.
    pub user_id: i64,
}

fn default_role() -> String {
    "UNASSIGNED".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_serializes_camel_case() {
        let user = User {
            user_id: 1,
            full_name: "Sarah Ahmed".to_string(),
            email: "sarah@example.com".to_string(),
            phone: Some("+971501234567".to_string()),
            password_hash: "$2b$12$abc".to_string(),
            role: "Donor".to_string(),
            home_address: Some("123 Main St".to_string()),
            blood_type: Some(BloodType::O),
            rhesus: Some(Rhesus::Positive),
            created_at: NaiveDateTime::parse_from_str("2025-01-02 03:04:05", "%Y-%m-%d %H:%M:%S")
                .unwrap(),
        };
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["userId"], 1);
        assert_eq!(json["fullName"], "Sarah Ahmed");
        assert_eq!(json["bloodType"], "O");
        assert_eq!(json["rhesus"], "+");
    }

    #[test]
    fn test_new_user_role_defaults_to_unassigned() {
        let payload = r#"{
            "fullName": "John Doe",
            "email": "john@example.com",
            "passwordHash": "secret"
        }"#;
        let user: NewUser = serde_json::from_str(payload).unwrap();
        assert_eq!(user.role, "UNASSIGNED");
        assert!(user.blood_type.is_none());
    }

    #[test]
    fn test_user_ref_shape() {
        let r: UserRef = serde_json::from_str(r#"{"userId": 42}"#).unwrap();
        assert_eq!(r.user_id, 42);
    }
}
