// catalog-sync - Supplier Catalog Export Tool
// Copyright (c) 2026 catalog-sync Contributors
// Licensed under the MIT License

//! # catalog-sync - Supplier Catalog Export
//!
//! catalog-sync pulls the in-stock product catalog of one supplier from the
//! vendor's shop API and publishes it three ways: a CSV file on disk, the same
//! file in Dropbox, and a dated snapshot table in PostgreSQL with an audit row
//! in the shared import log.
//!
//! ## Overview
//!
//! One run:
//! - **Authenticates** against the vendor API and keeps the bearer token
//! - **Fetches** the in-stock tag listing page by page until a short page or the page cap
//! - **Transforms** products into catalog rows (internal SKU, EAN, discounted price, image URL)
//! - **Exports** `<code>_artikelen_<timestamp>.csv` and uploads it to Dropbox
//! - **Loads** the rows into `<SUPPLIER>_dag_<date>` and records totals in `process_import_log`
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Pipeline steps (fetch, transform, export) and the orchestrator
//! - [`adapters`] - External integrations (vendor API, Dropbox, PostgreSQL)
//! - [`domain`] - Core domain types and models
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use catalog_sync::config::load_config;
//! use catalog_sync::core::pipeline::SyncPipeline;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = load_config("catalog-sync.toml")?;
//!     let summary = SyncPipeline::from_config(config)?.run().await?;
//!
//!     println!("Exported {} products to {}", summary.kept, summary.csv_path.display());
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Library code returns [`domain::SyncError`]; the binary maps it to an exit
//! code (2 configuration, 3 vendor login, 4 vendor API, 5 everything else).
//!
//! ## Logging
//!
//! Logging goes through the `tracing` crate, to the console and to a JSON log
//! file named after the ISO week:
//!
//! ```rust,no_run
//! use tracing::{info, warn};
//!
//! info!(supplier = "TERHEEGDE", "Starting catalog sync");
//! warn!(pages = 14, "Page cap reached");
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
