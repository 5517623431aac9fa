//! Donation repository.
//!
//! Donations read with full details, like pledges: the donor profile (and
//! its user) plus the fulfilled request (and its requester).

use chrono::Utc;
use sqlx::sqlite::{SqlitePool, SqliteRow};
use sqlx::Row;

use hemolink_core::model::{Donation, NewDonation};

use crate::error::{Error, Result};

use super::blood_requests::{request_from_row, REQUEST_FIELDS};
use super::donor_profiles::{profile_from_row, PROFILE_FIELDS};
use super::select_list;
use super::users::USER_FIELDS;

const DONATION_FIELDS: &[&str] = &[
    "donation_id",
    "units_donated",
    "outcome",
    "donation_time",
    "confirmed_by_requester",
    "created_at",
];

fn donation_select() -> String {
    format!(
        "SELECT {}, {}, {}, {}, {}
         FROM donations d
         JOIN donor_profiles p ON p.donor_id = d.donor_id
         JOIN users pu ON pu.user_id = p.user_id
         JOIN blood_requests r ON r.request_id = d.request_id
         JOIN users ru ON ru.user_id = r.user_id",
        select_list("d", "d_", DONATION_FIELDS),
        select_list("p", "p_", PROFILE_FIELDS),
        select_list("pu", "pu_", USER_FIELDS),
        select_list("r", "r_", REQUEST_FIELDS),
        select_list("ru", "ru_", USER_FIELDS)
    )
}

/// CRUD over the `donations` table.
#[derive(Clone)]
pub struct DonationRepo {
    pool: SqlitePool,
}

impl DonationRepo {
    /// Create a repository over the given pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a donation and return it re-read with full details. The
    /// caller resolves and validates both referenced ids first.
    pub async fn insert(
        &self,
        donation: &NewDonation,
        donor_id: i64,
        request_id: i64,
    ) -> Result<Donation> {
        let created_at = Utc::now().naive_utc();
        let result = sqlx::query(
            "INSERT INTO donations
                (units_donated, outcome, donation_time,
                 confirmed_by_requester, created_at, donor_id, request_id)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        )
        .bind(donation.units_donated)
        .bind(&donation.outcome)
        .bind(donation.donation_time)
        .bind(donation.confirmed_by_requester)
        .bind(created_at)
        .bind(donor_id)
        .bind(request_id)
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_rowid();
        self.find_by_id(id).await?.ok_or(Error::NotFound {
            entity: "donation",
            id,
        })
    }

    /// All donations, oldest first, with details.
    pub async fn find_all(&self) -> Result<Vec<Donation>> {
        let sql = format!("{} ORDER BY d.donation_id", donation_select());
        let rows = sqlx::query(&sql).fetch_all(&self.pool).await?;
        rows.iter().map(donation_from_row).collect()
    }

    /// Look up one donation by id, with details.
    pub async fn find_by_id(&self, id: i64) -> Result<Option<Donation>> {
        let sql = format!("{} WHERE d.donation_id = ?1", donation_select());
        let row = sqlx::query(&sql).bind(id).fetch_optional(&self.pool).await?;
        row.as_ref().map(donation_from_row).transpose()
    }

    /// Whether a donation row exists.
    pub async fn exists(&self, id: i64) -> Result<bool> {
        let found: i64 =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM donations WHERE donation_id = ?1)")
                .bind(id)
                .fetch_one(&self.pool)
                .await?;
        Ok(found == 1)
    }

    /// Delete a donation, reporting whether a row was removed.
    pub async fn delete(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM donations WHERE donation_id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

fn donation_from_row(row: &SqliteRow) -> Result<Donation> {
    Ok(Donation {
        donation_id: row.try_get("d_donation_id")?,
        units_donated: row.try_get("d_units_donated")?,
        outcome: row.try_get("d_outcome")?,
        donation_time: row.try_get("d_donation_time")?,
        confirmed_by_requester: row.try_get("d_confirmed_by_requester")?,
        created_at: row.try_get("d_created_at")?,
        donor_profile: profile_from_row(row, "p_", "pu_")?,
        fulfilled_request: request_from_row(row, "r_", "ru_")?,
    })
}
