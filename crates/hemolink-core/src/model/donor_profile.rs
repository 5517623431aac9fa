//! Donor profile entity and DTOs.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::blood::{BloodType, Rhesus};
use super::user::{User, UserRef};

/// Extended attributes of a user who can donate blood: blood group,
/// availability window, cooldown, and donation tally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DonorProfile {
    /// Database identifier.
    pub donor_id: i64,
    /// ABO group.
    pub blood_type: BloodType,
    /// Rhesus factor.
    pub rhesus: Rhesus,
    /// Date of birth.
    pub date_of_birth: Option<NaiveDate>,
    /// When this donor last gave blood.
    pub last_donation_date: Option<NaiveDateTime>,
    /// End of the post-donation cooldown; eligible to donate again after.
    pub available_by: Option<NaiveDateTime>,
    /// Donor-requested quiet period.
    pub do_not_disturb_until: Option<NaiveDateTime>,
    /// Free-form availability label (`Available`, `Unavailable`, ...).
    pub availability_status: Option<String>,
    /// Maximum travel distance the donor accepts.
    pub preferred_radius_km: Option<i64>,
    /// Completed donations on record.
    pub donations_count: i64,
    /// Current locality.
    pub location: Option<String>,
    /// Residential address.
    pub home_address: Option<String>,
    /// Owning account.
    pub user: User,
}

/// Payload for `POST /api/donor_profiles`. The owning user travels as an
/// id-only reference and must already exist.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDonorProfile {
    /// ABO group.
    pub blood_type: BloodType,
    /// Rhesus factor.
    pub rhesus: Rhesus,
    /// Date of birth.
    pub date_of_birth: Option<NaiveDate>,
    /// When this donor last gave blood.
    pub last_donation_date: Option<NaiveDateTime>,
    /// End of the post-donation cooldown.
    pub available_by: Option<NaiveDateTime>,
    /// Donor-requested quiet period.
    pub do_not_disturb_until: Option<NaiveDateTime>,
    /// Free-form availability label.
    pub availability_status: Option<String>,
    /// Maximum travel distance the donor accepts.
    pub preferred_radius_km: Option<i64>,
    /// Completed donations on record; forms submit 0.
    #[serde(default)]
    pub donations_count: i64,
    /// Current locality.
    pub location: Option<String>,
    /// Residential address.
    pub home_address: Option<String>,
    /// Reference to the owning account.
    pub user: Option<UserRef>,
}

/// Id-only reference to a donor profile, as embedded in pledge and
/// donation payloads.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DonorProfileRef {
    /// Referenced `donor_profiles.donor_id`.
    pub donor_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_profile_parses_form_payload() {
        // The shape the profile form submits.
        let payload = r#"{
            "bloodType": "AB",
            "rhesus": "-",
            "availabilityStatus": "Available",
            "homeAddress": "12 Oak Ave",
            "location": "12 Oak Ave",
            "dateOfBirth": "1990-05-20",
            "availableBy": "2025-03-01T09:00:00",
            "preferredRadiusKm": 25,
            "donationsCount": 0,
            "user": {"userId": 3}
        }"#;
        let profile: NewDonorProfile = serde_json::from_str(payload).unwrap();
        assert_eq!(profile.blood_type, BloodType::Ab);
        assert_eq!(profile.rhesus, Rhesus::Negative);
        assert_eq!(profile.user.unwrap().user_id, 3);
        assert_eq!(profile.preferred_radius_km, Some(25));
        assert_eq!(
            profile.date_of_birth,
            Some(NaiveDate::from_ymd_opt(1990, 5, 20).unwrap())
        );
    }

    #[test]
    fn test_new_profile_missing_user_is_none() {
        let payload = r#"{"bloodType": "A", "rhesus": "+"}"#;
        let profile: NewDonorProfile = serde_json::from_str(payload).unwrap();
        assert!(profile.user.is_none());
        assert_eq!(profile.donations_count, 0);
    }
}
