//! Donor pledge repository.
//!
//! Pledges are only ever read with full details: the donor profile (and
//! its user) plus the matched request (and its requester) in one query.

use chrono::Utc;
use sqlx::sqlite::{SqlitePool, SqliteRow};
use sqlx::Row;

use hemolink_core::model::{DonorPledge, NewDonorPledge};

use crate::error::{Error, Result};

use super::blood_requests::{request_from_row, REQUEST_FIELDS};
use super::donor_profiles::{profile_from_row, PROFILE_FIELDS};
use super::select_list;
use super::users::USER_FIELDS;

const PLEDGE_FIELDS: &[&str] = &[
    "pledge_id",
    "pledge_status",
    "pledged_units",
    "message",
    "created_at",
    "updated_at",
];

fn pledge_select() -> String {
    format!(
        "SELECT {}, {}, {}, {}, {}
         FROM donor_pledges g
         JOIN donor_profiles p ON p.donor_id = g.donor_id
         JOIN users pu ON pu.user_id = p.user_id
         JOIN blood_requests r ON r.request_id = g.request_id
         JOIN users ru ON ru.user_id = r.user_id",
        select_list("g", "g_", PLEDGE_FIELDS),
        select_list("p", "p_", PROFILE_FIELDS),
        select_list("pu", "pu_", USER_FIELDS),
        select_list("r", "r_", REQUEST_FIELDS),
        select_list("ru", "ru_", USER_FIELDS)
    )
}

/// CRUD over the `donor_pledges` table.
#[derive(Clone)]
pub struct DonorPledgeRepo {
    pool: SqlitePool,
}

impl DonorPledgeRepo {
    /// Create a repository over the given pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a pledge and return it re-read with full details. The caller
    /// resolves and validates both referenced ids first.
    pub async fn insert(
        &self,
        pledge: &NewDonorPledge,
        donor_id: i64,
        request_id: i64,
    ) -> Result<DonorPledge> {
        let created_at = Utc::now().naive_utc();
        let result = sqlx::query(
            "INSERT INTO donor_pledges
                (pledge_status, pledged_units, message, created_at, donor_id, request_id)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        )
        .bind(&pledge.pledge_status)
        .bind(pledge.pledged_units)
        .bind(&pledge.message)
        .bind(created_at)
        .bind(donor_id)
        .bind(request_id)
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_rowid();
        self.find_by_id(id).await?.ok_or(Error::NotFound {
            entity: "donor pledge",
            id,
        })
    }

    /// All pledges, oldest first, with details.
    pub async fn find_all(&self) -> Result<Vec<DonorPledge>> {
        let sql = format!("{} ORDER BY g.pledge_id", pledge_select());
        let rows = sqlx::query(&sql).fetch_all(&self.pool).await?;
        rows.iter().map(pledge_from_row).collect()
    }

    /// Look up one pledge by id, with details.
    pub async fn find_by_id(&self, id: i64) -> Result<Option<DonorPledge>> {
        let sql = format!("{} WHERE g.pledge_id = ?1", pledge_select());
        let row = sqlx::query(&sql).bind(id).fetch_optional(&self.pool).await?;
        row.as_ref().map(pledge_from_row).transpose()
    }

    /// Pledges against one blood request, with details.
    pub async fn find_by_request(&self, request_id: i64) -> Result<Vec<DonorPledge>> {
        let sql = format!(
            "{} WHERE g.request_id = ?1 ORDER BY g.pledge_id",
            pledge_select()
        );
        let rows = sqlx::query(&sql)
            .bind(request_id)
            .fetch_all(&self.pool)
            .await?;
        rows.iter().map(pledge_from_row).collect()
    }
}

fn pledge_from_row(row: &SqliteRow) -> Result<DonorPledge> {
    Ok(DonorPledge {
        pledge_id: row.try_get("g_pledge_id")?,
        pledge_status: row.try_get("g_pledge_status")?,
        pledged_units: row.try_get("g_pledged_units")?,
        message: row.try_get("g_message")?,
        created_at: row.try_get("g_created_at")?,
        updated_at: row.try_get("g_updated_at")?,
        donor_profile: profile_from_row(row, "p_", "pu_")?,
        matched_request: request_from_row(row, "r_", "ru_")?,
    })
}
