//! Blood request repository.
//!
//! Every read joins the requesting user.

use chrono::Utc;
use sqlx::sqlite::{SqlitePool, SqliteRow};
use sqlx::Row;

use hemolink_core::model::{BloodRequest, NewBloodRequest};

use crate::error::{Error, Result};

use super::select_list;
use super::users::{parse_blood_type, parse_rhesus, user_from_row, USER_FIELDS};

pub(crate) const REQUEST_FIELDS: &[&str] = &[
    "request_id",
    "needed_blood_type",
    "needed_rhesus",
    "units_needed",
    "hospital_name",
    "hospital_address",
    "urgency",
    "status",
    "needed_before",
    "notes",
    "created_at",
];

fn request_select() -> String {
    format!(
        "SELECT {}, {}
         FROM blood_requests r
         JOIN users u ON u.user_id = r.user_id",
        select_list("r", "r_", REQUEST_FIELDS),
        select_list("u", "u_", USER_FIELDS)
    )
}

/// CRUD over the `blood_requests` table.
#[derive(Clone)]
pub struct BloodRequestRepo {
    pool: SqlitePool,
}

impl BloodRequestRepo {
    /// Create a repository over the given pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a request for an existing user and return it with the user
    /// embedded. The caller resolves and validates `user_id` first.
    pub async fn insert(&self, request: &NewBloodRequest, user_id: i64) -> Result<BloodRequest> {
        let created_at = Utc::now().naive_utc();
        let result = sqlx::query(
            "INSERT INTO blood_requests
                (needed_blood_type, needed_rhesus, units_needed,
                 hospital_name, hospital_address, urgency, status,
                 needed_before, notes, created_at, user_id)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
        )
        .bind(request.needed_blood_type.as_str())
        .bind(request.needed_rhesus.as_str())
        .bind(request.units_needed)
        .bind(&request.hospital_name)
        .bind(&request.hospital_address)
        .bind(&request.urgency)
        .bind(&request.status)
        .bind(request.needed_before)
        .bind(&request.notes)
        .bind(created_at)
        .bind(user_id)
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_rowid();
        self.find_by_id(id).await?.ok_or(Error::NotFound {
            entity: "blood request",
            id,
        })
    }

    /// All requests, oldest first, with requesters embedded.
    pub async fn find_all(&self) -> Result<Vec<BloodRequest>> {
        let sql = format!("{} ORDER BY r.request_id", request_select());
        let rows = sqlx::query(&sql).fetch_all(&self.pool).await?;
        rows.iter()
            .map(|row| request_from_row(row, "r_", "u_"))
            .collect()
    }

    /// Look up one request by id.
    pub async fn find_by_id(&self, id: i64) -> Result<Option<BloodRequest>> {
        let sql = format!("{} WHERE r.request_id = ?1", request_select());
        let row = sqlx::query(&sql).bind(id).fetch_optional(&self.pool).await?;
        row.as_ref()
            .map(|r| request_from_row(r, "r_", "u_"))
            .transpose()
    }

    /// Delete a request, reporting whether a row was removed.
    pub async fn delete(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM blood_requests WHERE request_id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

/// Unpack a request (and its embedded requester) from prefixed columns.
pub(crate) fn request_from_row(
    row: &SqliteRow,
    prefix: &str,
    user_prefix: &str,
) -> Result<BloodRequest> {
    let col = |name: &str| format!("{prefix}{name}");
    Ok(BloodRequest {
        request_id: row.try_get(col("request_id").as_str())?,
        needed_blood_type: parse_blood_type(row.try_get(col("needed_blood_type").as_str())?)?,
        needed_rhesus: parse_rhesus(row.try_get(col("needed_rhesus").as_str())?)?,
        units_needed: row.try_get(col("units_needed").as_str())?,
        hospital_name: row.try_get(col("hospital_name").as_str())?,
        hospital_address: row.try_get(col("hospital_address").as_str())?,
        urgency: row.try_get(col("urgency").as_str())?,
        status: row.try_get(col("status").as_str())?,
        needed_before: row.try_get(col("needed_before").as_str())?,
        notes: row.try_get(col("notes").as_str())?,
        created_at: row.try_get(col("created_at").as_str())?,
        user: user_from_row(row, user_prefix)?,
    })
}
