use std::str::FromStr;
use std::time::Duration;

use scenesync_db::PoolConfig;

/// Errors raised while reading configuration from the environment.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{key} has invalid value '{value}': {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Server configuration loaded from environment variables.
///
/// Everything except `DATABASE_URL` has a default suitable for local
/// development. Values are read once at startup and never change.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Environment label, e.g. `local`, `staging`, `production` (default: `local`).
    pub env: String,
    /// PostgreSQL connection string.
    pub database_url: String,
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Database connection pool sizing.
    pub pool: PoolConfig,
}

impl ServerConfig {
    /// Load configuration from the process environment.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `DATABASE_URL`         | required                   |
    /// | `ENV`                  | `local`                    |
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `8000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `DB_POOL_SIZE`         | `10`                       |
    /// | `DB_MAX_OVERFLOW`      | `20`                       |
    /// | `DB_POOL_TIMEOUT_SECS` | `10`                       |
    /// | `DB_POOL_RECYCLE_SECS` | `1800`                     |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|s| !s.trim().is_empty())
            .ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let env = lookup("ENV").unwrap_or_else(|| "local".into());
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".into());
        let port = parse_or(&lookup, "PORT", 8000u16)?;

        let cors_origins: Vec<String> = lookup("CORS_ORIGINS")
            .unwrap_or_else(|| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs = parse_or(&lookup, "REQUEST_TIMEOUT_SECS", 30u64)?;

        let defaults = PoolConfig::default();
        let pool = PoolConfig {
            pool_size: parse_or(&lookup, "DB_POOL_SIZE", defaults.pool_size)?,
            max_overflow: parse_or(&lookup, "DB_MAX_OVERFLOW", defaults.max_overflow)?,
            acquire_timeout: Duration::from_secs(parse_or(
                &lookup,
                "DB_POOL_TIMEOUT_SECS",
                defaults.acquire_timeout.as_secs(),
            )?),
            recycle: Duration::from_secs(parse_or(
                &lookup,
                "DB_POOL_RECYCLE_SECS",
                defaults.recycle.as_secs(),
            )?),
        };

        Ok(Self {
            env,
            database_url,
            host,
            port,
            cors_origins,
            request_timeout_secs,
            pool,
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        None => Ok(default),
        Some(value) => {
            let parsed = value.trim().parse::<T>();
            parsed.map_err(|e| ConfigError::Invalid {
                key,
                reason: e.to_string(),
                value,
            })
        }
    }
}
