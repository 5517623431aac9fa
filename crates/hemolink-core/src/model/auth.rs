//! Authentication wire DTOs.

use serde::{Deserialize, Serialize};

use super::blood::{BloodType, Rhesus};

/// Body of `POST /api/auth/register`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    /// Display name, first and last.
    pub full_name: String,
    /// Login identifier; must be unused.
    pub email: String,
    /// Contact phone number.
    pub phone: Option<String>,
    /// Plaintext password; hashed server-side before storage.
    pub password: String,
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

/// Body of `POST /api/auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    /// Registered email address.
    pub email: String,
    /// Plaintext password to verify.
    pub password: String,
}

/// Successful register/login response: the issued JWT plus the user fields
/// the dashboards need without a follow-up fetch.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    /// Issued bearer token.
    pub token: String,
    /// Account identifier.
    pub user_id: i64,
    /// Display name.
    pub full_name: String,
    /// Login identifier.
    pub email: String,
    /// Role string.
    pub role: String,
    /// ABO group, when declared.
    pub blood_type: Option<BloodType>,
    /// Rhesus factor, when declared.
    pub rhesus: Option<Rhesus>,
    /// Residential address.
    pub home_address: Option<String>,
}

fn default_role() -> String {
    "UNASSIGNED".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_request_parses_signup_payload() {
        let payload = r#"{
            "fullName": "John Doe",
            "email": "john@example.com",
            "phone": "0501234567",
            "password": "Password123!",
            "role": "Donor",
            "homeAddress": "123 Main St",
            "bloodType": "A",
            "rhesus": "+"
        }"#;
        let request: RegisterRequest = serde_json::from_str(payload).unwrap();
        assert_eq!(request.email, "john@example.com");
        assert_eq!(request.blood_type, Some(BloodType::A));
        assert_eq!(request.rhesus, Some(Rhesus::Positive));
    }

    #[test]
    fn test_auth_response_round_trip() {
        let response = AuthResponse {
            token: "abc.def.ghi".to_string(),
            user_id: 5,
            full_name: "Jane".to_string(),
            email: "jane@example.com".to_string(),
            role: "Recipient".to_string(),
            blood_type: None,
            rhesus: None,
            home_address: None,
        };
        let json = serde_json::to_string(&response).unwrap();
        let parsed: AuthResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.user_id, 5);
        assert_eq!(parsed.token, "abc.def.ghi");
    }
}
