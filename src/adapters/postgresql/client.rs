//! PostgreSQL client implementation
//!
//! This module provides the pooled connection handling for PostgreSQL.

use crate::config::schema::PostgreSQLConfig;
use crate::domain::{Result, SyncError};
use deadpool_postgres::{Manager, ManagerConfig, Pool, RecyclingMethod, Runtime};
use secrecy::ExposeSecret;
use std::time::Duration;
use tokio_postgres::NoTls;

/// PostgreSQL client for catalog-sync
///
/// Provides methods for connecting to PostgreSQL and handing out pooled
/// connections.
pub struct PostgreSQLClient {
    /// Connection pool
    pool: Pool,

    /// Configuration
    config: PostgreSQLConfig,
}

impl PostgreSQLClient {
    /// Create a new PostgreSQL client
    ///
    /// No connection is opened until the first one is requested.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection string is invalid or the pool
    /// cannot be built.
    pub fn new(config: PostgreSQLConfig) -> Result<Self> {
        let conn_str: &str = config.connection_string.expose_secret().as_str();
        let pg_config: tokio_postgres::Config = conn_str.parse().map_err(|e| {
            SyncError::Configuration(format!("Invalid PostgreSQL connection string: {}", e))
        })?;

        let manager = Manager::from_config(
            pg_config,
            NoTls,
            ManagerConfig {
                recycling_method: RecyclingMethod::Fast,
            },
        );

        let timeout = Duration::from_secs(config.connection_timeout_seconds);
        let pool = Pool::builder(manager)
            .max_size(config.max_connections)
            .runtime(Runtime::Tokio1)
            .wait_timeout(Some(timeout))
            .create_timeout(Some(timeout))
            .recycle_timeout(Some(timeout))
            .build()
            .map_err(|e| SyncError::Database(format!("Failed to create connection pool: {}", e)))?;

        Ok(Self { pool, config })
    }

    /// Get a connection from the pool
    ///
    /// # Errors
    ///
    /// Returns an error if a connection cannot be obtained.
    pub async fn get_connection(&self) -> Result<deadpool_postgres::Object> {
        self.pool
            .get()
            .await
            .map_err(|e| SyncError::Database(format!("Failed to get connection from pool: {}", e)))
    }

    /// Configuration the client was built with
    pub fn config(&self) -> &PostgreSQLConfig {
        &self.config
    }

    /// Get the connection string (without credentials)
    pub fn connection_string_safe(&self) -> String {
        let conn_str: &str = self.config.connection_string.expose_secret().as_str();
        conn_str
            .rsplit('@')
            .next()
            .filter(|host| *host != conn_str)
            .map(|s| format!("postgresql://***@{}", s))
            .unwrap_or_else(|| "postgresql://***".to_string())
    }

    /// Close the pool; idle connections are dropped and new requests fail
    pub fn close(&self) {
        self.pool.close();
        tracing::debug!(target_db = %self.connection_string_safe(), "PostgreSQL pool closed");
    }
}
