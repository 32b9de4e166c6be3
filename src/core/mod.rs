//! Core business logic for catalog-sync.
//!
//! # Modules
//!
//! - [`fetch`] - Paginated in-stock crawl
//! - [`transform`] - Flattening, pricing and filtering of vendor products
//! - [`export`] - CSV export and upload
//! - [`pipeline`] - Orchestration of one run
//! - [`summary`] - Run summary
//!
//! # Workflow
//!
//! 1. **Login**: Obtain a vendor session token
//! 2. **Fetch**: Read in-stock pages until a short page or the page cap
//! 3. **Transform**: Drop unusable rows, flatten, derive and price
//! 4. **Export**: Write the timestamped CSV
//! 5. **Upload**: Push the newest export to Dropbox
//! 6. **Load**: Replace the day's snapshot table and append the import log
//!
//! # Example
//!
//! ```rust,no_run
//! use catalog_sync::config::load_config;
//! use catalog_sync::core::pipeline::SyncPipeline;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("catalog-sync.toml")?;
//! let summary = SyncPipeline::from_config(config)?.run().await?;
//!
//! println!("Kept {} of {} products", summary.kept, summary.fetched);
//! # Ok(())
//! # }
//! ```

pub mod export;
pub mod fetch;
pub mod pipeline;
pub mod summary;
pub mod transform;
