//! PostgreSQL persistence layer: connection pool, migrations, repositories.

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;

pub mod models;
pub mod repositories;

pub type DbPool = sqlx::PgPool;

/// Connection pool sizing, fixed at process start.
///
/// The pool keeps `pool_size` connections warm and may open up to
/// `max_overflow` more under load. Overflow connections are closed once they
/// have been idle for `recycle`, and every connection is replaced after living
/// for `recycle`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolConfig {
    /// Base number of connections kept open (default: `10`).
    pub pool_size: u32,
    /// Extra connections allowed beyond the base size (default: `20`).
    pub max_overflow: u32,
    /// How long a request waits for a free connection (default: 10s).
    pub acquire_timeout: Duration,
    /// Maximum lifetime of a connection before it is replaced (default: 30min).
    pub recycle: Duration,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            pool_size: 10,
            max_overflow: 20,
            acquire_timeout: Duration::from_secs(10),
            recycle: Duration::from_secs(1800),
        }
    }
}

impl PoolConfig {
    /// Upper bound on concurrently open connections.
    pub fn max_connections(&self) -> u32 {
        self.pool_size.saturating_add(self.max_overflow)
    }

    /// Pool builder carrying these settings.
    pub fn pool_options(&self) -> PgPoolOptions {
        PgPoolOptions::new()
            .min_connections(self.pool_size)
            .max_connections(self.max_connections())
            .acquire_timeout(self.acquire_timeout)
            .idle_timeout(Some(self.recycle))
            .max_lifetime(Some(self.recycle))
    }
}

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str, config: &PoolConfig) -> Result<DbPool, sqlx::Error> {
    tracing::debug!(
        pool_size = config.pool_size,
        max_connections = config.max_connections(),
        acquire_timeout_secs = config.acquire_timeout.as_secs(),
        recycle_secs = config.recycle.as_secs(),
        "Creating database pool"
    );
    config.pool_options().connect(database_url).await
}

/// Round-trip a trivial query to confirm the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply all pending migrations from `db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../db/migrations").run(pool).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_pool_allows_base_plus_overflow() {
        let config = PoolConfig::default();
        assert_eq!(config.pool_size, 10);
        assert_eq!(config.max_connections(), 30);
        assert_eq!(config.acquire_timeout, Duration::from_secs(10));
        assert_eq!(config.recycle, Duration::from_secs(1800));
    }

    #[test]
    fn max_connections_saturates() {
        let config = PoolConfig {
            pool_size: u32::MAX,
            max_overflow: 5,
            ..PoolConfig::default()
        };
        assert_eq!(config.max_connections(), u32::MAX);
    }

    #[test]
    fn options_reflect_config() {
        let config = PoolConfig {
            pool_size: 2,
            max_overflow: 3,
            acquire_timeout: Duration::from_secs(1),
            recycle: Duration::from_secs(60),
        };
        let options = config.pool_options();
        assert_eq!(options.get_min_connections(), 2);
        assert_eq!(options.get_max_connections(), 5);
        assert_eq!(options.get_acquire_timeout(), Duration::from_secs(1));
        assert_eq!(options.get_max_lifetime(), Some(Duration::from_secs(60)));
        assert_eq!(options.get_idle_timeout(), Some(Duration::from_secs(60)));
    }
}
