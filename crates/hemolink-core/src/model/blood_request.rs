//! Blood request entity and DTOs.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::blood::{BloodType, Rhesus};
use super::user::{User, UserRef};

/// A hospital/recipient's need for blood units, with urgency and deadline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BloodRequest {
    /// Database identifier.
    pub request_id: i64,
    /// ABO group needed.
    pub needed_blood_type: BloodType,
    /// Rhesus factor needed.
    pub needed_rhesus: Rhesus,
    /// Units requested.
    pub units_needed: i64,
    /// Receiving hospital.
    pub hospital_name: Option<String>,
    /// Hospital address.
    pub hospital_address: Option<String>,
    /// Free-form urgency label (`Low`, `Medium`, `High`, `Critical`).
    pub urgency: Option<String>,
    /// Free-form lifecycle label (`Open`, `Fulfilled`, ...).
    pub status: Option<String>,
    /// Deadline after which the request lapses.
    pub needed_before: Option<NaiveDateTime>,
    /// Additional context for donors.
    pub notes: Option<String>,
    /// Set by storage at insert time.
    pub created_at: NaiveDateTime,
    /// Requesting account.
    pub user: User,
}

/// Payload for `POST /api/blood_requests`. The requesting user travels as
/// an id-only reference and must already exist.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBloodRequest {
    /// ABO group needed.
    pub needed_blood_type: BloodType,
    /// Rhesus factor needed.
    pub needed_rhesus: Rhesus,
    /// Units requested.
    pub units_needed: i64,
    /// Receiving hospital.
    pub hospital_name: Option<String>,
    /// Hospital address.
    pub hospital_address: Option<String>,
    /// Free-form urgency label.
    pub urgency: Option<String>,
    /// Free-form lifecycle label.
    pub status: Option<String>,
    /// Deadline after which the request lapses.
    pub needed_before: Option<NaiveDateTime>,
    /// Additional context for donors.
    pub notes: Option<String>,
    /// Reference to the requesting account.
    pub user: Option<UserRef>,
}

/// Id-only reference to a blood request, as embedded in pledge and
/// donation payloads.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BloodRequestRef {
    /// Referenced `blood_requests.request_id`.
    pub request_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_request_parses_form_payload() {
        let payload = r#"{
            "neededBloodType": "O",
            "neededRhesus": "-",
            "unitsNeeded": 3,
            "hospitalName": "City General",
            "hospitalAddress": "1 Hospital Rd",
            "urgency": "Critical",
            "status": "Open",
            "neededBefore": "2025-06-01T12:00:00",
            "notes": "Surgery scheduled",
            "user": {"userId": 9}
        }"#;
        let request: NewBloodRequest = serde_json::from_str(payload).unwrap();
        assert_eq!(request.needed_blood_type, BloodType::O);
        assert_eq!(request.units_needed, 3);
        assert_eq!(request.user.unwrap().user_id, 9);
    }
}
