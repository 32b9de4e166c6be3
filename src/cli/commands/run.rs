//! Run command implementation
//!
//! This module implements the `run` command: one full catalog sync.

use crate::config::{parse_config, SyncConfig};
use crate::core::pipeline::SyncPipeline;
use crate::core::summary::RunSummary;
use crate::domain::SyncError;
use clap::Args;

/// Exit code for configuration errors
pub const EXIT_CONFIG: i32 = 2;
/// Exit code for a rejected vendor login
pub const EXIT_AUTH: i32 = 3;
/// Exit code for vendor API failures
pub const EXIT_VENDOR: i32 = 4;
/// Exit code for everything else
pub const EXIT_FATAL: i32 = 5;

/// Arguments for the run command
#[derive(Args, Debug, Default)]
pub struct RunArgs {
    /// Dry run mode - write the CSV but skip upload and database load
    #[arg(long)]
    pub dry_run: bool,

    /// Override the supplier name (table name and discount key)
    #[arg(long)]
    pub supplier: Option<String>,

    /// Override the number of products per page
    #[arg(long)]
    pub page_size: Option<u32>,

    /// Override the page cap
    #[arg(long)]
    pub max_pages: Option<u32>,

    /// Override the CSV output directory
    #[arg(long)]
    pub output_dir: Option<String>,
}

impl RunArgs {
    /// Apply the command-line overrides to a loaded configuration
    pub fn apply_overrides(&self, config: &mut SyncConfig) {
        if let Some(supplier) = &self.supplier {
            tracing::info!(supplier = %supplier, "Overriding supplier name from CLI");
            config.supplier.name = Some(supplier.clone());
        }
        if let Some(page_size) = self.page_size {
            config.vendor.page_size = page_size;
        }
        if let Some(max_pages) = self.max_pages {
            config.vendor.max_pages = max_pages;
        }
        if let Some(dir) = &self.output_dir {
            config.export.output_dir = dir.clone();
        }
        if self.dry_run {
            tracing::info!("Enabling dry-run mode from CLI");
            config.application.dry_run = true;
        }
    }

    /// Execute the run command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Starting run command");

        let mut config = match parse_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                tracing::error!(error = %e, "Failed to load configuration");
                eprintln!("Failed to load configuration: {e}");
                return Ok(EXIT_CONFIG);
            }
        };

        self.apply_overrides(&mut config);
        if let Err(e) = config.validate() {
            tracing::error!(error = %e, "Configuration validation failed");
            eprintln!("Configuration validation failed: {e}");
            return Ok(EXIT_CONFIG);
        }

        if config.application.dry_run {
            println!("🔍 DRY RUN MODE - the CSV is written, nothing is uploaded or loaded");
            println!();
        }

        let result = match SyncPipeline::from_config(config) {
            Ok(pipeline) => {
                println!("🚀 Syncing catalog for {}", pipeline.supplier());
                pipeline.run().await
            }
            Err(e) => Err(e),
        };

        match result {
            Ok(summary) => {
                summary.log_summary();
                print_summary(&summary);
                Ok(0)
            }
            Err(e) => {
                crate::log_error_with_context!(&e, "Catalog sync failed");
                eprintln!("Catalog sync failed: {e}");
                Ok(exit_code_for(&e))
            }
        }
    }
}

/// Map a pipeline error to the process exit code
pub fn exit_code_for(error: &SyncError) -> i32 {
    match error {
        SyncError::Configuration(_) | SyncError::Validation(_) => EXIT_CONFIG,
        e if e.is_authentication() => EXIT_AUTH,
        SyncError::Vendor(_) => EXIT_VENDOR,
        _ => EXIT_FATAL,
    }
}

fn print_summary(summary: &RunSummary) {
    println!();
    println!("📊 Sync Summary:");
    println!("  Supplier: {}", summary.supplier);
    println!("  Pages fetched: {}", summary.pages_fetched);
    println!("  Products fetched: {}", summary.fetched);
    println!("  Products kept: {}", summary.kept);
    println!(
        "  Dropped: {} (no image: {}, invalid EAN: {})",
        summary.dropped(),
        summary.dropped_missing_image,
        summary.dropped_invalid_ean
    );
    println!("  CSV: {}", summary.csv_path.display());
    if let Some(path) = &summary.uploaded_path {
        println!("  Uploaded: {path}");
    }
    if let (Some(table), Some(stats)) = (&summary.table_name, &summary.import_stats) {
        println!("  Table: {table}");
        println!(
            "  Import log: {} items, stock {}, price {}",
            stats.item_count, stats.total_stock, stats.total_price
        );
    }
    println!("  Duration: {:.2}s", summary.duration.as_secs_f64());
    println!();
    if summary.hit_page_cap() {
        println!("⚠️  Page cap reached; the catalog may be incomplete");
    }
    println!("✅ Sync completed successfully!");
}
