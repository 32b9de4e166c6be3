//! Sync pipeline - main orchestrator for one catalog run
//!
//! Login → fetch → transform → CSV export → upload → database load, each
//! step awaited in turn. The first error aborts the remaining steps; the
//! database pool is closed on every exit path.

use crate::adapters::database::{snapshot_table_name, CatalogStore};
use crate::adapters::dropbox::{DropboxClient, ObjectStore};
use crate::adapters::postgresql::{PostgreSQLAdapter, PostgreSQLClient};
use crate::adapters::vendor::{CatalogSource, VendorClient};
use crate::config::SyncConfig;
use crate::core::export::{latest_export, run_timestamp, upload_export, write_catalog_csv};
use crate::core::fetch::fetch_all_in_stock;
use crate::core::summary::RunSummary;
use crate::core::transform::{transform, TransformSettings};
use crate::domain::{Result, SyncError};
use chrono::{DateTime, Local};
use std::path::PathBuf;
use std::time::Instant;

/// Sync pipeline
pub struct SyncPipeline {
    config: SyncConfig,
    supplier: String,
    discount_percent: f64,
    source: Box<dyn CatalogSource>,
    object_store: Box<dyn ObjectStore>,
    catalog_store: Box<dyn CatalogStore>,
    dry_run: bool,
}

impl SyncPipeline {
    /// Create a pipeline with the HTTP and PostgreSQL adapters from `config`
    ///
    /// No network or database connection is made here.
    ///
    /// # Errors
    ///
    /// Returns an error if the supplier or discount cannot be resolved, or an
    /// adapter cannot be built.
    pub fn from_config(config: SyncConfig) -> Result<Self> {
        let source = VendorClient::new(&config.vendor)?;
        let object_store = DropboxClient::new(&config.dropbox)?;
        let catalog_store =
            PostgreSQLAdapter::new(PostgreSQLClient::new(config.postgresql.clone())?);

        Self::new(
            config,
            Box::new(source),
            Box::new(object_store),
            Box::new(catalog_store),
        )
    }

    /// Create a pipeline with explicit adapters
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the supplier name or its discount
    /// cannot be resolved.
    pub fn new(
        config: SyncConfig,
        source: Box<dyn CatalogSource>,
        object_store: Box<dyn ObjectStore>,
        catalog_store: Box<dyn CatalogStore>,
    ) -> Result<Self> {
        let supplier = config
            .supplier
            .resolve_name()
            .map_err(SyncError::Configuration)?;
        let discount_percent = config
            .pricing
            .discount_for(&supplier)
            .map_err(SyncError::Configuration)?;
        let dry_run = config.application.dry_run;

        Ok(Self {
            config,
            supplier,
            discount_percent,
            source,
            object_store,
            catalog_store,
            dry_run,
        })
    }

    /// Override the configured dry-run flag
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Supplier name the run is labelled with
    pub fn supplier(&self) -> &str {
        &self.supplier
    }

    /// Execute one run now
    pub async fn run(self) -> Result<RunSummary> {
        self.run_at(Local::now()).await
    }

    /// Execute one run with `now` as the run time
    ///
    /// `now` names the export file and the snapshot table. The database pool
    /// is closed on every outcome, dry runs included.
    pub async fn run_at(mut self, now: DateTime<Local>) -> Result<RunSummary> {
        let result = self.execute(now).await;
        self.catalog_store.close();
        result
    }

    async fn execute(&mut self, now: DateTime<Local>) -> Result<RunSummary> {
        let start_time = Instant::now();
        let timestamp = run_timestamp(&now);
        let vendor = &self.config.vendor;

        tracing::info!(
            supplier = %self.supplier,
            discount_percent = self.discount_percent,
            dry_run = self.dry_run,
            "Starting catalog sync"
        );

        // 1. Login; nothing else is attempted if it is rejected
        self.source.authenticate().await?;

        // 2. Fetch
        let fetched =
            fetch_all_in_stock(self.source.as_ref(), vendor.page_size, vendor.max_pages).await?;

        // 3. Transform
        let settings = TransformSettings {
            discount_percent: self.discount_percent,
            image_base_url: vendor.image_base_url(),
            sku_prefix: self.config.supplier.sku_prefix().to_string(),
        };
        let fetched_count = fetched.products.len();
        let output = transform(fetched.products, &settings);
        if output.table.is_empty() {
            tracing::warn!("No products left after transform");
        }

        // 4. Export
        let output_dir = PathBuf::from(&self.config.export.output_dir);
        let csv_path = write_catalog_csv(
            &output_dir,
            &self.config.supplier.code,
            &timestamp,
            &output.table,
        )?;

        let mut summary = RunSummary {
            supplier: self.supplier.clone(),
            run_timestamp: timestamp,
            pages_fetched: fetched.pages_fetched,
            termination: fetched.termination,
            fetched: fetched_count,
            kept: output.table.len(),
            dropped_missing_image: output.dropped_missing_image,
            dropped_invalid_ean: output.dropped_invalid_ean,
            csv_path: csv_path.clone(),
            uploaded_path: None,
            table_name: None,
            import_stats: None,
            duration: start_time.elapsed(),
            dry_run: self.dry_run,
        };

        if self.dry_run {
            tracing::info!("DRY RUN: skipping upload and database load");
            return Ok(summary);
        }

        // 5. Upload the newest export in the directory
        let upload_path =
            latest_export(&output_dir, &self.config.supplier.code)?.unwrap_or(csv_path);
        summary.uploaded_path = Some(upload_export(self.object_store.as_ref(), &upload_path).await?);

        // 6. Load
        let table = snapshot_table_name(&self.supplier, now.date_naive())?;
        let load_rows = output.table.load_rows();
        self.catalog_store.ensure_import_log_table().await?;
        let stats = self
            .catalog_store
            .load_snapshot(&table, &self.supplier, &load_rows)
            .await?;

        summary.import_stats = Some(stats);
        summary.table_name = Some(table);
        summary.duration = start_time.elapsed();

        Ok(summary)
    }
}
