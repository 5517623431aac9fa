//! Connection handling and the SQLite migration registry.
//!
//! Migrations are registered in strictly increasing order and applied
//! atomically; the applied version is mirrored to `PRAGMA user_version`.

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy)]
struct Migration {
    version: u32,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[Migration {
    version: 1,
    sql: include_str!("migrations/0001_init.sql"),
}];

/// Open a pooled SQLite database, creating the file if missing.
///
/// `url` is a sqlx SQLite URL, e.g. `sqlite://hemolink.db` or
/// `sqlite::memory:`. Foreign keys are enforced on every connection.
pub async fn connect(url: &str) -> Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    Ok(pool)
}

/// Returns the latest migration version known by this binary.
pub fn latest_version() -> u32 {
    MIGRATIONS.last().map_or(0, |migration| migration.version)
}

/// Applies all pending migrations on the provided pool.
pub async fn apply_migrations(pool: &SqlitePool) -> Result<()> {
    let current_version: u32 = sqlx::query_scalar("PRAGMA user_version")
        .fetch_one(pool)
        .await?;
    let latest = latest_version();

    if current_version > latest {
        return Err(Error::UnsupportedSchemaVersion {
            db_version: current_version,
            latest_supported: latest,
        });
    }

    if current_version == latest {
        return Ok(());
    }

    tracing::info!(from = current_version, to = latest, "applying migrations");

    let mut tx = pool.begin().await?;
    for migration in MIGRATIONS {
        if migration.version <= current_version {
            continue;
        }

        sqlx::raw_sql(migration.sql).execute(&mut *tx).await?;
        let pragma = format!("PRAGMA user_version = {};", migration.version);
        sqlx::raw_sql(&pragma).execute(&mut *tx).await?;
    }
    tx.commit().await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    // Pooled `sqlite::memory:` would give every pooled connection its own
    // database; tests go through a real file instead.
    async fn temp_pool(dir: &tempfile::TempDir) -> SqlitePool {
        let path = dir.path().join("test.db");
        let url = format!("sqlite://{}", path.display());
        connect(&url).await.unwrap()
    }

    #[test]
    fn test_migration_versions_are_monotonic() {
        let mut previous = 0;
        for migration in MIGRATIONS {
            assert!(migration.version > previous);
            previous = migration.version;
        }
    }

    #[test]
    fn test_latest_version_matches_registry() {
        assert_eq!(latest_version(), MIGRATIONS.last().unwrap().version);
    }

    #[tokio::test]
    async fn test_apply_migrations_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let pool = temp_pool(&dir).await;
        apply_migrations(&pool).await.unwrap();
        apply_migrations(&pool).await.unwrap();

        let version: u32 = sqlx::query_scalar("PRAGMA user_version")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(version, latest_version());
    }

    #[tokio::test]
    async fn test_newer_schema_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let pool = temp_pool(&dir).await;
        sqlx::raw_sql("PRAGMA user_version = 999")
            .execute(&pool)
            .await
            .unwrap();

        let result = apply_migrations(&pool).await;
        assert!(matches!(
            result,
            Err(Error::UnsupportedSchemaVersion {
                db_version: 999,
                ..
            })
        ));
    }
}
