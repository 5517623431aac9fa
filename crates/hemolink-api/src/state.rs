//! Shared application state.

use sqlx::SqlitePool;

use hemolink_auth::AuthConfig;
use hemolink_storage::{
    apply_migrations, connect, BloodRequestRepo, DonationRepo, DonorPledgeRepo, DonorProfileRepo,
    UserRepo,
};

use crate::config::Config;
use crate::error::Result;

/// Repositories plus auth settings, cloned into every handler.
#[derive(Clone)]
pub struct AppState {
    /// User repository.
    pub users: UserRepo,
    /// Donor profile repository.
    pub profiles: DonorProfileRepo,
    /// Blood request repository.
    pub requests: BloodRequestRepo,
    /// Donor pledge repository.
    pub pledges: DonorPledgeRepo,
    /// Donation repository.
    pub donations: DonationRepo,
    /// Token signing and middleware settings.
    pub auth: AuthConfig,
}

impl AppState {
    /// Open the configured database, apply migrations, and build the state.
    pub async fn new(config: &Config) -> Result<Self> {
        let pool = connect(&config.database_url).await?;
        apply_migrations(&pool).await?;
        Ok(Self::with_pool(pool, config.auth.clone()))
    }

    /// Build state over an already-migrated pool (used by tests).
    pub fn with_pool(pool: SqlitePool, auth: AuthConfig) -> Self {
        Self {
            users: UserRepo::new(pool.clone()),
            profiles: DonorProfileRepo::new(pool.clone()),
            requests: BloodRequestRepo::new(pool.clone()),
            pledges: DonorPledgeRepo::new(pool.clone()),
            donations: DonationRepo::new(pool),
            auth,
        }
    }
}
