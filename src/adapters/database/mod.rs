//! Database abstraction layer
//!
//! This module provides the trait the pipeline loads snapshots through, and
//! the naming rule for per-run snapshot tables.

pub mod traits;

pub use traits::{snapshot_table_name, CatalogStore};
