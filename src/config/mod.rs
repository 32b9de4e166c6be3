//! Configuration management for catalog-sync.
//!
//! # Overview
//!
//! catalog-sync is configured from one TOML file with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - `CATALOG_SYNC_<SECTION>_<KEY>` environment overrides
//! - Default values for optional settings
//! - Validation on load
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use catalog_sync::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("catalog-sync.toml")?;
//!
//! println!("Vendor: {}", config.vendor.base_url);
//! println!("Dropbox folder: {}", config.dropbox.folder);
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration Structure
//!
//! - [`ApplicationConfig`] - Log level and dry-run flag
//! - [`SupplierConfig`] - Supplier code, name and SKU prefix
//! - [`VendorConfig`] - Vendor API credentials and paging
//! - [`PricingConfig`] - Discount per supplier
//! - [`ExportConfig`] - CSV output directory
//! - [`DropboxConfig`] - Upload target
//! - [`PostgreSQLConfig`] - Database load target
//! - [`LoggingConfig`] - Logging configuration
//!
//! # Example Configuration
//!
//! ```toml
//! [supplier]
//! code = "THG"
//!
//! [vendor]
//! base_url = "https://api.terheegde.nl"
//! email = "inkoop@example.com"
//! password = "${THG_PASSWORD}"
//!
//! [pricing.discounts]
//! terheegde = "10%"
//!
//! [dropbox]
//! access_token = "${DROPBOX_TOKEN}"
//! folder = "/macro/datafiles/THG"
//!
//! [postgresql]
//! connection_string = "${DATABASE_URL}"
//! ```

pub mod loader;
pub mod schema;
pub mod secret;

// Re-export commonly used types
pub use loader::{load_config, parse_config};
pub use schema::{
    ApplicationConfig, DiscountSetting, DropboxConfig, ExportConfig, LoggingConfig,
    PostgreSQLConfig, PricingConfig, SupplierConfig, SyncConfig, VendorConfig,
};
pub use secret::{secret_string, SecretString, SecretValue};
