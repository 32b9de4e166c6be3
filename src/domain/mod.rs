//! Domain models and types for catalog-sync.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Vendor records** ([`Product`], [`CatalogPage`])
//! - **Strongly-typed identifiers** ([`Ean`], [`InternalSku`])
//! - **Transformed rows** ([`CatalogRow`], [`CatalogTable`], [`LoadRow`])
//! - **Error types** ([`SyncError`], [`VendorError`])
//! - **Result type alias** ([`Result`])
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T, SyncError>`]:
//!
//! ```rust
//! use catalog_sync::domain::{Result, SyncError};
//!
//! fn example() -> Result<()> {
//!     let config = catalog_sync::config::load_config("catalog-sync.toml")?;
//!     println!("{}", config.supplier.code);
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod errors;
pub mod ids;
pub mod product;
pub mod result;

// Re-export commonly used types for convenience
pub use catalog::{CatalogRow, CatalogTable, ImportStats, LoadRow};
pub use errors::{SyncError, VendorError};
pub use ids::{Ean, InternalSku};
pub use product::{CatalogPage, Product};
pub use result::Result;
