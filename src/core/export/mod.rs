//! CSV export and upload
//!
//! This module provides the export sink:
//! - Writing the transformed catalog as a timestamped CSV
//! - Picking the newest export in the output directory
//! - Uploading that file to the object store

pub mod csv;
pub mod upload;

pub use self::csv::{export_file_name, latest_export, run_timestamp, write_catalog_csv};
pub use upload::upload_export;
