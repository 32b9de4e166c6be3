//! External system integrations for catalog-sync.
//!
//! This module provides adapters for integrating with external systems:
//!
//! - [`vendor`] - Supplier shop API (login, paginated catalog)
//! - [`dropbox`] - Dropbox upload of the export CSV
//! - [`database`] - Snapshot store abstraction (trait-based)
//! - [`postgresql`] - PostgreSQL implementation
//!
//! # Design Pattern
//!
//! Adapters follow the **Adapter Pattern** to isolate external dependencies and
//! enable testing with mock implementations. The pipeline only sees
//! [`vendor::CatalogSource`], [`dropbox::ObjectStore`] and
//! [`database::CatalogStore`].
//!
//! ```rust,no_run
//! use catalog_sync::adapters::postgresql::{PostgreSQLAdapter, PostgreSQLClient};
//! use catalog_sync::adapters::database::CatalogStore;
//! use catalog_sync::config::load_config;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("catalog-sync.toml")?;
//! let store = PostgreSQLAdapter::new(PostgreSQLClient::new(config.postgresql.clone())?);
//!
//! store.ensure_import_log_table().await?;
//! store.close();
//! # Ok(())
//! # }
//! ```

pub mod database;
pub mod dropbox;
pub mod postgresql;
pub mod vendor;
