//! Database abstraction traits
//!
//! This module defines the trait that database adapters must implement to
//! receive catalog snapshots.

use crate::config::schema::is_sql_identifier;
use crate::domain::{ImportStats, LoadRow, Result, SyncError};
use async_trait::async_trait;
use chrono::NaiveDate;

/// Longest table name accepted; leaves room for the `_pkey` index suffix
/// within PostgreSQL's 63-byte identifier limit.
const MAX_TABLE_NAME_LEN: usize = 58;

/// Snapshot sink for one catalog run
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Ensure the import log table exists
    ///
    /// # Errors
    ///
    /// Returns an error if the table cannot be created.
    async fn ensure_import_log_table(&self) -> Result<()>;

    /// Replace `table` with `rows`, key it on `eigen_sku`, compute the
    /// aggregates and append one import log row labelled `supplier`
    ///
    /// Either all of this is committed or none of it is.
    ///
    /// # Errors
    ///
    /// Returns an error if any statement fails; the transaction is rolled back.
    async fn load_snapshot(
        &self,
        table: &str,
        supplier: &str,
        rows: &[LoadRow],
    ) -> Result<ImportStats>;

    /// Release all pooled connections
    fn close(&self);
}

/// Name of the per-run snapshot table: `<SUPPLIER>_dag_<DD_Mon_YYYY>`
///
/// # Errors
///
/// Returns a validation error if the name would not be a plain identifier
/// or would be too long.
pub fn snapshot_table_name(supplier: &str, date: NaiveDate) -> Result<String> {
    let name = format!("{}_dag_{}", supplier, date.format("%d_%b_%Y"));

    if !is_sql_identifier(&name) {
        return Err(SyncError::Validation(format!(
            "Invalid snapshot table name '{name}'"
        )));
    }
    if name.len() > MAX_TABLE_NAME_LEN {
        return Err(SyncError::Validation(format!(
            "Snapshot table name '{name}' exceeds {MAX_TABLE_NAME_LEN} characters"
        )));
    }

    Ok(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_table_name() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
        assert_eq!(
            snapshot_table_name("TERHEEGDE", date).unwrap(),
            "TERHEEGDE_dag_16_Oct_2026"
        );

        let date = NaiveDate::from_ymd_opt(2026, 3, 5).unwrap();
        assert_eq!(
            snapshot_table_name("THG", date).unwrap(),
            "THG_dag_05_Mar_2026"
        );
    }

    #[test]
    fn test_snapshot_table_name_rejects_bad_supplier() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
        assert!(snapshot_table_name("TER HEEGDE", date).is_err());
        assert!(snapshot_table_name("x\"; DROP", date).is_err());
        assert!(snapshot_table_name(&"A".repeat(50), date).is_err());
    }
}
