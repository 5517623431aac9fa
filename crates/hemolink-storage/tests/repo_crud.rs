//! Repository round trips against a real SQLite file.

use sqlx::SqlitePool;
use tempfile::TempDir;

use hemolink_core::model::{
    BloodType, NewBloodRequest, NewDonation, NewDonorPledge, NewDonorProfile, NewUser, Rhesus,
};
use hemolink_storage::{
    apply_migrations, connect, BloodRequestRepo, DonationRepo, DonorPledgeRepo, DonorProfileRepo,
    Error, UserRepo,
};

async fn setup() -> (TempDir, SqlitePool) {
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite://{}", dir.path().join("test.db").display());
    let pool = connect(&url).await.unwrap();
    apply_migrations(&pool).await.unwrap();
    (dir, pool)
}

fn new_user(email: &str) -> NewUser {
    NewUser {
        full_name: "Test User".to_string(),
        email: email.to_string(),
        phone: Some("+971501234567".to_string()),
        password_hash: "$2b$12$fixture".to_string(),
        role: "Donor".to_string(),
        home_address: Some("123 Main St".to_string()),
        blood_type: Some(BloodType::O),
        rhesus: Some(Rhesus::Positive),
    }
}

fn new_profile() -> NewDonorProfile {
    NewDonorProfile {
        blood_type: BloodType::A,
        rhesus: Rhesus::Negative,
        date_of_birth: None,
        last_donation_date: None,
        available_by: None,
        do_not_disturb_until: None,
        availability_status: Some("Available".to_string()),
        preferred_radius_km: Some(25),
        donations_count: 0,
        location: Some("Downtown".to_string()),
        home_address: Some("12 Oak Ave".to_string()),
        user: None,
    }
}

fn new_request() -> NewBloodRequest {
    NewBloodRequest {
        needed_blood_type: BloodType::A,
        needed_rhesus: Rhesus::Negative,
        units_needed: 3,
        hospital_name: Some("City General".to_string()),
        hospital_address: Some("1 Hospital Rd".to_string()),
        urgency: Some("High".to_string()),
        status: Some("Open".to_string()),
        needed_before: None,
        notes: None,
        user: None,
    }
}

#[tokio::test]
async fn test_user_insert_and_find_round_trip() {
    let (_dir, pool) = setup().await;
    let users = UserRepo::new(pool);

    let stored = users.insert(&new_user("alice@example.com")).await.unwrap();
    assert!(stored.user_id > 0);
    assert_eq!(stored.email, "alice@example.com");
    assert_eq!(stored.blood_type, Some(BloodType::O));
    assert_eq!(stored.rhesus, Some(Rhesus::Positive));

    let by_id = users.find_by_id(stored.user_id).await.unwrap().unwrap();
    assert_eq!(by_id, stored);

    let by_email = users.find_by_email("alice@example.com").await.unwrap();
    assert_eq!(by_email.unwrap().user_id, stored.user_id);
}

#[tokio::test]
async fn test_duplicate_email_is_email_taken() {
    let (_dir, pool) = setup().await;
    let users = UserRepo::new(pool);

    users.insert(&new_user("dup@example.com")).await.unwrap();
    let result = users.insert(&new_user("dup@example.com")).await;
    assert!(matches!(result, Err(Error::EmailTaken(email)) if email == "dup@example.com"));
}

#[tokio::test]
async fn test_user_delete_reports_removal() {
    let (_dir, pool) = setup().await;
    let users = UserRepo::new(pool);

    let stored = users.insert(&new_user("gone@example.com")).await.unwrap();
    assert!(users.delete(stored.user_id).await.unwrap());
    assert!(!users.delete(stored.user_id).await.unwrap());
    assert!(users.find_by_id(stored.user_id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_profile_embeds_owning_user() {
    let (_dir, pool) = setup().await;
    let users = UserRepo::new(pool.clone());
    let profiles = DonorProfileRepo::new(pool);

    let owner = users.insert(&new_user("donor@example.com")).await.unwrap();
    let profile = profiles.insert(&new_profile(), owner.user_id).await.unwrap();

    assert_eq!(profile.blood_type, BloodType::A);
    assert_eq!(profile.user.email, "donor@example.com");
    assert_eq!(profile.preferred_radius_km, Some(25));

    let all = profiles.find_all().await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].user.user_id, owner.user_id);
}

#[tokio::test]
async fn test_deleting_user_cascades_to_profile() {
    let (_dir, pool) = setup().await;
    let users = UserRepo::new(pool.clone());
    let profiles = DonorProfileRepo::new(pool);

    let owner = users.insert(&new_user("cascade@example.com")).await.unwrap();
    let profile = profiles.insert(&new_profile(), owner.user_id).await.unwrap();

    users.delete(owner.user_id).await.unwrap();
    assert!(profiles.find_by_id(profile.donor_id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_pledge_reads_with_full_details() {
    let (_dir, pool) = setup().await;
    let users = UserRepo::new(pool.clone());
    let profiles = DonorProfileRepo::new(pool.clone());
    let requests = BloodRequestRepo::new(pool.clone());
    let pledges = DonorPledgeRepo::new(pool);

    let donor = users.insert(&new_user("donor@example.com")).await.unwrap();
    let requester = users.insert(&new_user("patient@example.com")).await.unwrap();
    let profile = profiles.insert(&new_profile(), donor.user_id).await.unwrap();
    let request = requests
        .insert(&new_request(), requester.user_id)
        .await
        .unwrap();

    let pledge = NewDonorPledge {
        pledge_status: Some("Pending".to_string()),
        pledged_units: 2,
        message: Some("Saturday works".to_string()),
        donor_profile: None,
        matched_request: None,
    };
    let stored = pledges
        .insert(&pledge, profile.donor_id, request.request_id)
        .await
        .unwrap();

    assert_eq!(stored.pledged_units, 2);
    assert!(stored.updated_at.is_none());
    assert_eq!(stored.donor_profile.user.email, "donor@example.com");
    assert_eq!(stored.matched_request.user.email, "patient@example.com");
    assert_eq!(stored.matched_request.hospital_name.as_deref(), Some("City General"));

    let by_request = pledges.find_by_request(request.request_id).await.unwrap();
    assert_eq!(by_request.len(), 1);
    assert_eq!(by_request[0].pledge_id, stored.pledge_id);

    assert!(pledges.find_by_request(request.request_id + 1).await.unwrap().is_empty());
    assert!(pledges.find_by_id(stored.pledge_id + 1).await.unwrap().is_none());
}

#[tokio::test]
async fn test_donation_exists_and_delete() {
    let (_dir, pool) = setup().await;
    let users = UserRepo::new(pool.clone());
    let profiles = DonorProfileRepo::new(pool.clone());
    let requests = BloodRequestRepo::new(pool.clone());
    let donations = DonationRepo::new(pool);

    let donor = users.insert(&new_user("donor@example.com")).await.unwrap();
    let requester = users.insert(&new_user("patient@example.com")).await.unwrap();
    let profile = profiles.insert(&new_profile(), donor.user_id).await.unwrap();
    let request = requests
        .insert(&new_request(), requester.user_id)
        .await
        .unwrap();

    let donation = NewDonation {
        units_donated: 1,
        outcome: Some("Completed".to_string()),
        donation_time: None,
        confirmed_by_requester: Some(true),
        donor_profile: None,
        fulfilled_request: None,
    };
    let stored = donations
        .insert(&donation, profile.donor_id, request.request_id)
        .await
        .unwrap();

    assert_eq!(stored.confirmed_by_requester, Some(true));
    assert_eq!(stored.donor_profile.donor_id, profile.donor_id);
    assert_eq!(stored.fulfilled_request.request_id, request.request_id);

    assert!(donations.exists(stored.donation_id).await.unwrap());
    assert!(donations.delete(stored.donation_id).await.unwrap());
    assert!(!donations.exists(stored.donation_id).await.unwrap());
    assert!(!donations.delete(stored.donation_id).await.unwrap());
}

#[tokio::test]
async fn test_find_all_orders_by_id() {
    let (_dir, pool) = setup().await;
    let users = UserRepo::new(pool);

    users.insert(&new_user("first@example.com")).await.unwrap();
    users.insert(&new_user("second@example.com")).await.unwrap();

    let all = users.find_all().await.unwrap();
    assert_eq!(all.len(), 2);
    assert!(all[0].user_id < all[1].user_id);
    assert_eq!(all[0].email, "first@example.com");
}
