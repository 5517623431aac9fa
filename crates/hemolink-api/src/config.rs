//! Environment-driven server configuration.

use std::{env, fmt::Display, str::FromStr};

use hemolink_auth::AuthConfig;
use tracing::{info, warn};

/// Fallback signing secret for local development only.
const DEV_SECRET: &str = "hemolink-dev-secret";

/// Runtime configuration for `hemolinkd`.
#[derive(Debug, Clone)]
pub struct Config {
    /// Listen port.
    pub port: u16,
    /// sqlx SQLite URL.
    pub database_url: String,
    /// Token signing and middleware settings.
    pub auth: AuthConfig,
}

impl Config {
    /// Load configuration from the environment, logging every default
    /// that gets used.
    pub fn load() -> Self {
        let secret = env::var("HEMOLINK_JWT_SECRET").unwrap_or_else(|_| {
            warn!("HEMOLINK_JWT_SECRET not set, using the development secret");
            DEV_SECRET.to_string()
        });

        Self {
            port: try_load("HEMOLINK_PORT", "3002"),
            database_url: env::var("HEMOLINK_DB")
                .unwrap_or_else(|_| "sqlite://hemolink.db".to_string()),
            auth: AuthConfig {
                enabled: try_load("HEMOLINK_AUTH_ENABLED", "false"),
                secret,
                token_ttl_secs: try_load("HEMOLINK_TOKEN_TTL_SECS", "86400"),
            },
        }
    }
}

fn try_load<T: FromStr>(key: &str, default: &str) -> T
where
    T::Err: Display,
{
    env::var(key)
        .unwrap_or_else(|_| {
            info!("{key} not set, using default: {default}");
            default.to_string()
        })
        .parse()
        .map_err(|e| {
            warn!("invalid {key} value: {e}");
        })
        .expect("environment misconfigured")
}

#[cfg(test)]
mod tests {
    use super::*;

    // Only defaults are covered here; mutating process env in tests races
    // with parallel test threads.
    #[test]
    fn test_load_defaults() {
        let config = Config::load();
        assert_eq!(config.database_url, "sqlite://hemolink.db");
        assert!(!config.auth.enabled);
        assert_eq!(config.auth.token_ttl_secs, 86_400);
    }
}
