//! MySQL connection pool management.

use std::time::Duration;

use sqlx::mysql::MySqlPoolOptions;
use sqlx::MySqlPool;
use tracing::info;

use st_core::errors::DomainError;
use st_shared::DatabaseConfig;

/// Shared connection pool for the MySQL-backed stores
#[derive(Clone)]
pub struct DatabasePool {
    pool: MySqlPool,
}

impl DatabasePool {
    /// Connects a pool using the given configuration.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, DomainError> {
        let pool = MySqlPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.connect_timeout))
            .connect(&config.url)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to connect to database: {}", e),
            })?;

        info!(max_connections = config.max_connections, "database pool ready");
        Ok(Self { pool })
    }

    /// Connects using `DATABASE_*` environment variables, loading a
    /// `.env` file when present.
    pub async fn from_env() -> Result<Self, DomainError> {
        dotenvy::dotenv().ok();
        Self::connect(&DatabaseConfig::from_env()).await
    }

    /// The underlying SQLx pool
    pub fn inner(&self) -> &MySqlPool {
        &self.pool
    }
}
