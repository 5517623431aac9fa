//! User repository.

use chrono::Utc;
use sqlx::sqlite::{SqlitePool, SqliteRow};
use sqlx::Row;

use hemolink_core::model::{BloodType, NewUser, Rhesus, User};

use crate::error::{Error, Result};

use super::select_list;

pub(crate) const USER_FIELDS: &[&str] = &[
    "user_id",
    "full_name",
    "email",
    "phone",
    "password_hash",
    "role",
    "home_address",
    "blood_type",
    "rhesus",
    "created_at",
];

/// CRUD over the `users` table.
#[derive(Clone)]
pub struct UserRepo {
    pool: SqlitePool,
}

impl UserRepo {
    /// Create a repository over the given pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a user row and return the stored entity.
    ///
    /// A duplicate email surfaces as [`Error::EmailTaken`] rather than a
    /// bare constraint violation.
    pub async fn insert(&self, user: &NewUser) -> Result<User> {
        let created_at = Utc::now().naive_utc();
        let result = sqlx::query(
            "INSERT INTO users
                (full_name, email, phone, password_hash, role,
                 home_address, blood_type, rhesus, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        )
        .bind(&user.full_name)
        .bind(&user.email)
        .bind(&user.phone)
        .bind(&user.password_hash)
        .bind(&user.role)
        .bind(&user.home_address)
        .bind(user.blood_type.map(|b| b.as_str()))
        .bind(user.rhesus.map(|r| r.as_str()))
        .bind(created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                Error::EmailTaken(user.email.clone())
            } else {
                Error::Database(e)
            }
        })?;

        let id = result.last_insert_rowid();
        self.find_by_id(id)
            .await?
            .ok_or(Error::NotFound { entity: "user", id })
    }

    /// All users, oldest first.
    pub async fn find_all(&self) -> Result<Vec<User>> {
        let sql = format!(
            "SELECT {} FROM users ORDER BY user_id",
            select_list("users", "", USER_FIELDS)
        );
        let rows = sqlx::query(&sql).fetch_all(&self.pool).await?;
        rows.iter().map(|row| user_from_row(row, "")).collect()
    }

    /// Look up one user by id.
    pub async fn find_by_id(&self, id: i64) -> Result<Option<User>> {
        let sql = format!(
            "SELECT {} FROM users WHERE user_id = ?1",
            select_list("users", "", USER_FIELDS)
        );
        let row = sqlx::query(&sql).bind(id).fetch_optional(&self.pool).await?;
        row.as_ref().map(|r| user_from_row(r, "")).transpose()
    }

    /// Look up one user by email.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        let sql = format!(
            "SELECT {} FROM users WHERE email = ?1",
            select_list("users", "", USER_FIELDS)
        );
        let row = sqlx::query(&sql)
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;
        row.as_ref().map(|r| user_from_row(r, "")).transpose()
    }

    /// Delete a user, reporting whether a row was removed.
    pub async fn delete(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM users WHERE user_id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

/// Unpack a user from prefixed columns.
pub(crate) fn user_from_row(row: &SqliteRow, prefix: &str) -> Result<User> {
    let col = |name: &str| format!("{prefix}{name}");
    Ok(User {
        user_id: row.try_get(col("user_id").as_str())?,
        full_name: row.try_get(col("full_name").as_str())?,
        email: row.try_get(col("email").as_str())?,
        phone: row.try_get(col("phone").as_str())?,
        password_hash: row.try_get(col("password_hash").as_str())?,
        role: row.try_get(col("role").as_str())?,
        home_address: row.try_get(col("home_address").as_str())?,
        blood_type: parse_opt_blood_type(row.try_get(col("blood_type").as_str())?)?,
        rhesus: parse_opt_rhesus(row.try_get(col("rhesus").as_str())?)?,
        created_at: row.try_get(col("created_at").as_str())?,
    })
}

pub(crate) fn parse_blood_type(value: String) -> Result<BloodType> {
    value.parse().map_err(|e: hemolink_core::Error| Error::Decode {
        column: "blood_type",
        message: e.to_string(),
    })
}

pub(crate) fn parse_opt_blood_type(value: Option<String>) -> Result<Option<BloodType>> {
    value.map(parse_blood_type).transpose()
}

pub(crate) fn parse_rhesus(value: String) -> Result<Rhesus> {
    value.parse().map_err(|e: hemolink_core::Error| Error::Decode {
        column: "rhesus",
        message: e.to_string(),
    })
}

pub(crate) fn parse_opt_rhesus(value: Option<String>) -> Result<Option<Rhesus>> {
    value.map(parse_rhesus).transpose()
}

pub(crate) fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(
        err,
        sqlx::Error::Database(db)
            if matches!(db.kind(), sqlx::error::ErrorKind::UniqueViolation)
    )
}
