//! Run summary and reporting
//!
//! This module defines the structure reported at the end of a sync run.

use crate::core::fetch::Termination;
use crate::domain::ImportStats;
use std::path::PathBuf;
use std::time::Duration;

/// Summary of one sync run
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Supplier name used for the table and the import log
    pub supplier: String,

    /// Timestamp embedded in the export file name
    pub run_timestamp: String,

    /// Pages requested from the vendor
    pub pages_fetched: u32,

    /// Why fetching stopped
    pub termination: Termination,

    /// Products received from the vendor
    pub fetched: usize,

    /// Rows kept after transformation
    pub kept: usize,

    /// Rows dropped for a missing image
    pub dropped_missing_image: usize,

    /// Rows dropped for a non-numeric EAN
    pub dropped_invalid_ean: usize,

    /// CSV written by this run
    pub csv_path: PathBuf,

    /// Remote path of the uploaded file (None in dry-run)
    pub uploaded_path: Option<String>,

    /// Snapshot table name (None in dry-run)
    pub table_name: Option<String>,

    /// Aggregates written to the import log (None in dry-run)
    pub import_stats: Option<ImportStats>,

    /// Wall-clock duration of the run
    pub duration: Duration,

    /// Whether upload and load were skipped
    pub dry_run: bool,
}

impl RunSummary {
    /// Total rows dropped by the transform
    pub fn dropped(&self) -> usize {
        self.dropped_missing_image + self.dropped_invalid_ean
    }

    /// True when the page cap ended the crawl
    pub fn hit_page_cap(&self) -> bool {
        matches!(self.termination, Termination::PageCap { .. })
    }

    /// Log the summary
    pub fn log_summary(&self) {
        tracing::info!(
            supplier = %self.supplier,
            pages = self.pages_fetched,
            fetched = self.fetched,
            kept = self.kept,
            dropped = self.dropped(),
            csv = %self.csv_path.display(),
            duration_secs = self.duration.as_secs(),
            dry_run = self.dry_run,
            "Sync completed"
        );

        if self.dropped() > 0 {
            tracing::info!(
                missing_image = self.dropped_missing_image,
                invalid_ean = self.dropped_invalid_ean,
                "Rows filtered during transform"
            );
        }

        if self.hit_page_cap() {
            tracing::warn!(
                pages = self.pages_fetched,
                "Page cap reached; the vendor may have more in-stock products"
            );
        }

        if let (Some(table), Some(stats)) = (&self.table_name, &self.import_stats) {
            tracing::info!(
                table = %table,
                aantal_items = stats.item_count,
                totaal_stock = stats.total_stock,
                totaal_prijs = stats.total_price,
                "Import logged"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(termination: Termination) -> RunSummary {
        RunSummary {
            supplier: "TERHEEGDE".to_string(),
            run_timestamp: "Fri Oct 16 14-03-22 2026".to_string(),
            pages_fetched: 3,
            termination,
            fetched: 232,
            kept: 220,
            dropped_missing_image: 10,
            dropped_invalid_ean: 2,
            csv_path: PathBuf::from("THG_artikelen_x.csv"),
            uploaded_path: None,
            table_name: None,
            import_stats: None,
            duration: Duration::from_secs(4),
            dry_run: true,
        }
    }

    #[test]
    fn test_dropped_total() {
        let s = summary(Termination::ShortPage { page: 3, rows: 40 });
        assert_eq!(s.dropped(), 12);
        assert!(!s.hit_page_cap());
    }

    #[test]
    fn test_page_cap_detection() {
        let s = summary(Termination::PageCap { pages: 14 });
        assert!(s.hit_page_cap());
        s.log_summary();
    }
}
