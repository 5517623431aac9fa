//! Donor pledge entity and DTOs.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::blood_request::{BloodRequest, BloodRequestRef};
use super::donor_profile::{DonorProfile, DonorProfileRef};

/// A donor's stated intent to fulfill a specific blood request.
///
/// Reads always embed the full donor profile and matched request; there is
/// no id-only read shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DonorPledge {
    /// Database identifier.
    pub pledge_id: i64,
    /// Free-form lifecycle label (`Pending`, `Confirmed`, `Withdrawn`).
    pub pledge_status: Option<String>,
    /// Units the donor commits to.
    pub pledged_units: i64,
    /// Message from the donor to the requester.
    pub message: Option<String>,
    /// Set by storage at insert time.
    pub created_at: NaiveDateTime,
    /// Last status change, when any.
    pub updated_at: Option<NaiveDateTime>,
    /// Pledging donor.
    pub donor_profile: DonorProfile,
    /// Request being pledged against.
    pub matched_request: BloodRequest,
}

/// Payload for `POST /api/donor_pledges`. Both sides travel as id-only
/// references and must already exist.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDonorPledge {
    /// Free-form lifecycle label.
    pub pledge_status: Option<String>,
    /// Units the donor commits to.
    pub pledged_units: i64,
    /// Message from the donor to the requester.
    pub message: Option<String>,
    /// Reference to the pledging donor profile.
    pub donor_profile: Option<DonorProfileRef>,
    /// Reference to the matched blood request.
    pub matched_request: Option<BloodRequestRef>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_pledge_parses_form_payload() {
        let payload = r#"{
            "pledgeStatus": "Pending",
            "pledgedUnits": 2,
            "message": "Can come Saturday",
            "donorProfile": {"donorId": 4},
            "matchedRequest": {"requestId": 11}
        }"#;
        let pledge: NewDonorPledge = serde_json::from_str(payload).unwrap();
        assert_eq!(pledge.pledged_units, 2);
        assert_eq!(pledge.donor_profile.unwrap().donor_id, 4);
        assert_eq!(pledge.matched_request.unwrap().request_id, 11);
    }

    #[test]
    fn test_new_pledge_missing_references_are_none() {
        let pledge: NewDonorPledge = serde_json::from_str(r#"{"pledgedUnits": 1}"#).unwrap();
        assert!(pledge.donor_profile.is_none());
        assert!(pledge.matched_request.is_none());
    }
}
