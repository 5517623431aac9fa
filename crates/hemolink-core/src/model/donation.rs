//! Donation entity and DTOs.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::blood_request::{BloodRequest, BloodRequestRef};
use super::donor_profile::{DonorProfile, DonorProfileRef};

/// A completed transfer of blood units, linking a donor profile to a
/// fulfilled blood request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Donation {
    /// Database identifier.
    pub donation_id: i64,
    /// Units actually transferred.
    pub units_donated: i64,
    /// Free-form outcome label (`Completed`, `Deferred`, ...).
    pub outcome: Option<String>,
    /// When the donation took place.
    pub donation_time: Option<NaiveDateTime>,
    /// Whether the requester acknowledged receipt.
    pub confirmed_by_requester: Option<bool>,
    /// Set by storage at insert time.
    pub created_at: NaiveDateTime,
    /// Donating profile.
    pub donor_profile: DonorProfile,
    /// Request this donation fulfilled.
    pub fulfilled_request: BloodRequest,
}

/// Payload for `POST /api/donations`. Both sides travel as id-only
/// references and must already exist.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDonation {
    /// Units actually transferred.
    pub units_donated: i64,
    /// Free-form outcome label.
    pub outcome: Option<String>,
    /// When the donation took place.
    pub donation_time: Option<NaiveDateTime>,
    /// Whether the requester acknowledged receipt.
    pub confirmed_by_requester: Option<bool>,
    /// Reference to the donating profile.
    pub donor_profile: Option<DonorProfileRef>,
    /// Reference to the fulfilled request.
    pub fulfilled_request: Option<BloodRequestRef>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_donation_parses_form_payload() {
        let payload = r#"{
            "unitsDonated": 1,
            "outcome": "Completed",
            "donationTime": "2025-04-05T10:30:00",
            "confirmedByRequester": true,
            "donorProfile": {"donorId": 2},
            "fulfilledRequest": {"requestId": 7}
        }"#;
        let donation: NewDonation = serde_json::from_str(payload).unwrap();
        assert_eq!(donation.units_donated, 1);
        assert_eq!(donation.confirmed_by_requester, Some(true));
        assert_eq!(donation.donor_profile.unwrap().donor_id, 2);
        assert_eq!(donation.fulfilled_request.unwrap().request_id, 7);
    }
}
