//! Donor profile repository.
//!
//! Every read joins the owning user, so callers always get the embedded
//! account the API promises.

use sqlx::sqlite::{SqlitePool, SqliteRow};
use sqlx::Row;

use hemolink_core::model::{DonorProfile, NewDonorProfile};

use crate::error::{Error, Result};

use super::select_list;
use super::users::{parse_blood_type, parse_rhesus, user_from_row, USER_FIELDS};

pub(crate) const PROFILE_FIELDS: &[&str] = &[
    "donor_id",
    "blood_type",
    "rhesus",
    "date_of_birth",
    "last_donation_date",
    "available_by",
    "do_not_disturb_until",
    "availability_status",
    "preferred_radius_km",
    "donations_count",
    "location",
    "home_address",
];

fn profile_select() -> String {
    format!(
        "SELECT {}, {}
         FROM donor_profiles p
         JOIN users u ON u.user_id = p.user_id",
        select_list("p", "p_", PROFILE_FIELDS),
        select_list("u", "u_", USER_FIELDS)
    )
}

/// CRUD over the `donor_profiles` table.
#[derive(Clone)]
pub struct DonorProfileRepo {
    pool: SqlitePool,
}

impl DonorProfileRepo {
    /// Create a repository over the given pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a profile for an existing user and return it with the user
    /// embedded. The caller resolves and validates `user_id` first.
    pub async fn insert(&self, profile: &NewDonorProfile, user_id: i64) -> Result<DonorProfile> {
        let result = sqlx::query(
            "INSERT INTO donor_profiles
                (blood_type, rhesus, date_of_birth, last_donation_date,
                 available_by, do_not_disturb_until, availability_status,
                 preferred_radius_km, donations_count, location,
                 home_address, user_id)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)",
        )
        .bind(profile.blood_type.as_str())
        .bind(profile.rhesus.as_str())
        .bind(profile.date_of_birth)
        .bind(profile.last_donation_date)
        .bind(profile.available_by)
        .bind(profile.do_not_disturb_until)
        .bind(&profile.availability_status)
        .bind(profile.preferred_radius_km)
        .bind(profile.donations_count)
        .bind(&profile.location)
        .bind(&profile.home_address)
        .bind(user_id)
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_rowid();
        self.find_by_id(id).await?.ok_or(Error::NotFound {
            entity: "donor profile",
            id,
        })
    }

    /// All profiles, oldest first, with users embedded.
    pub async fn find_all(&self) -> Result<Vec<DonorProfile>> {
        let sql = format!("{} ORDER BY p.donor_id", profile_select());
        let rows = sqlx::query(&sql).fetch_all(&self.pool).await?;
        rows.iter()
            .map(|row| profile_from_row(row, "p_", "u_"))
            .collect()
    }

    /// Look up one profile by id.
    pub async fn find_by_id(&self, id: i64) -> Result<Option<DonorProfile>> {
        let sql = format!("{} WHERE p.donor_id = ?1", profile_select());
        let row = sqlx::query(&sql).bind(id).fetch_optional(&self.pool).await?;
        row.as_ref()
            .map(|r| profile_from_row(r, "p_", "u_"))
            .transpose()
    }

    /// Delete a profile, reporting whether a row was removed.
    pub async fn delete(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM donor_profiles WHERE donor_id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

/// Unpack a profile (and its embedded user) from prefixed columns.
pub(crate) fn profile_from_row(
    row: &SqliteRow,
    prefix: &str,
    user_prefix: &str,
) -> Result<DonorProfile> {
    let col = |name: &str| format!("{prefix}{name}");
    Ok(DonorProfile {
        donor_id: row.try_get(col("donor_id").as_str())?,
        blood_type: parse_blood_type(row.try_get(col("blood_type").as_str())?)?,
        rhesus: parse_rhesus(row.try_get(col("rhesus").as_str())?)?,
        date_of_birth: row.try_get(col("date_of_birth").as_str())?,
        last_donation_date: row.try_get(col("last_donation_date").as_str())?,
        available_by: row.try_get(col("available_by").as_str())?,
        do_not_disturb_until: row.try_get(col("do_not_disturb_until").as_str())?,
        availability_status: row.try_get(col("availability_status").as_str())?,
        preferred_radius_km: row.try_get(col("preferred_radius_km").as_str())?,
        donations_count: row.try_get(col("donations_count").as_str())?,
        location: row.try_get(col("location").as_str())?,
        home_address: row.try_get(col("home_address").as_str())?,
        user: user_from_row(row, user_prefix)?,
    })
}
