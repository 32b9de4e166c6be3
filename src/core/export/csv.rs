//! CSV writer for the export table

use crate::domain::{CatalogTable, Result, SyncError};
use chrono::{DateTime, TimeZone};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Run timestamp used in export file names
///
/// Formatted like the C locale's `%c` (`Fri Oct 16 14:03:22 2026`) with the
/// colons replaced, since file names may not contain them everywhere.
pub fn run_timestamp<Tz: TimeZone>(now: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    now.format("%c").to_string().replace(':', "-")
}

/// `<prefix>_artikelen_<timestamp>.csv`
pub fn export_file_name(file_prefix: &str, run_timestamp: &str) -> String {
    format!("{file_prefix}_artikelen_{run_timestamp}.csv")
}

/// Write the table to `<dir>/<prefix>_artikelen_<timestamp>.csv`
///
/// The header is the table's full column set; every row writes a value for
/// every column.
///
/// # Errors
///
/// Returns an export error if the file cannot be created or written.
pub fn write_catalog_csv(
    dir: &Path,
    file_prefix: &str,
    run_timestamp: &str,
    table: &CatalogTable,
) -> Result<PathBuf> {
    fs::create_dir_all(dir).map_err(|e| {
        SyncError::Export(format!("Cannot create output directory {}: {e}", dir.display()))
    })?;

    let path = dir.join(export_file_name(file_prefix, run_timestamp));
    let mut writer = ::csv::Writer::from_path(&path)?;

    let columns = table.columns();
    writer.write_record(&columns)?;
    for row in table.rows() {
        writer.write_record(columns.iter().map(|column| row.cell(column)))?;
    }
    writer.flush()?;

    tracing::info!(
        path = %path.display(),
        rows = table.len(),
        columns = columns.len(),
        "Wrote export CSV"
    );

    Ok(path)
}

/// Newest `<prefix>_artikelen_*.csv` in `dir`, by creation time
///
/// Falls back to modification time where the filesystem does not record
/// creation time. This is not necessarily the file written by this run.
///
/// # Errors
///
/// Returns an I/O error if the directory cannot be read.
pub fn latest_export(dir: &Path, file_prefix: &str) -> Result<Option<PathBuf>> {
    let prefix = format!("{file_prefix}_artikelen_");
    let mut newest: Option<(SystemTime, PathBuf)> = None;

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name();
        let name = name.to_string_lossy();
        if !name.starts_with(&prefix) || !name.ends_with(".csv") {
            continue;
        }

        let metadata = entry.metadata()?;
        if !metadata.is_file() {
            continue;
        }
        let created = metadata.created().or_else(|_| metadata.modified())?;

        if newest.as_ref().map_or(true, |(time, _)| created >= *time) {
            newest = Some((created, entry.path()));
        }
    }

    Ok(newest.map(|(_, path)| path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CatalogRow, Ean, InternalSku};
    use chrono::{NaiveDate, Utc};
    use std::collections::BTreeMap;
    use tempfile::TempDir;

    fn row(code: &str, extra: Option<(&str, &str)>) -> CatalogRow {
        let mut attributes = BTreeMap::new();
        if let Some((k, v)) = extra {
            attributes.insert(k.to_string(), v.to_string());
        }
        CatalogRow {
            code: code.to_string(),
            name: "Poot, rond".to_string(),
            ean: Ean::new(8712345678906),
            brand: None,
            free_stock: 4,
            price: 45.0,
            discount_amount: 5.0,
            image_url: "https://x/a.jpg".to_string(),
            category: Some("Poot".to_string()),
            eigen_sku: InternalSku::derive("THG", code),
            attributes,
        }
    }

    #[test]
    fn test_run_timestamp_format() {
        let ts = NaiveDate::from_ymd_opt(2026, 10, 16)
            .unwrap()
            .and_hms_opt(14, 3, 22)
            .unwrap()
            .and_utc();
        assert_eq!(run_timestamp(&ts), "Fri Oct 16 14-03-22 2026");

        let ts = Utc.with_ymd_and_hms(2026, 3, 5, 9, 0, 0).unwrap();
        assert_eq!(run_timestamp(&ts), "Thu Mar  5 09-00-00 2026");
    }

    #[test]
    fn test_export_file_name() {
        assert_eq!(
            export_file_name("THG", "Fri Oct 16 14-03-22 2026"),
            "THG_artikelen_Fri Oct 16 14-03-22 2026.csv"
        );
    }

    #[test]
    fn test_write_catalog_csv() {
        let dir = TempDir::new().unwrap();
        let table = CatalogTable::new(vec![row("A", Some(("unit", "stuk"))), row("B", None)]);

        let path = write_catalog_csv(dir.path(), "THG", "run", &table).unwrap();
        assert_eq!(path.file_name().unwrap(), "THG_artikelen_run.csv");

        let mut reader = ::csv::Reader::from_path(&path).unwrap();
        let headers: Vec<String> = reader.headers().unwrap().iter().map(String::from).collect();
        assert_eq!(headers, table.columns());

        let records: Vec<_> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(records.len(), 2);
        let unit = headers.iter().position(|h| h == "unit").unwrap();
        assert_eq!(&records[0][unit], "stuk");
        assert_eq!(&records[1][unit], "");
        let name = headers.iter().position(|h| h == "name").unwrap();
        assert_eq!(&records[0][name], "Poot, rond");
    }

    #[test]
    fn test_latest_export_ignores_other_files() {
        let dir = TempDir::new().unwrap();
        assert_eq!(latest_export(dir.path(), "THG").unwrap(), None);

        fs::write(dir.path().join("OTHER_artikelen_x.csv"), "a").unwrap();
        fs::write(dir.path().join("THG_artikelen_x.txt"), "a").unwrap();
        assert_eq!(latest_export(dir.path(), "THG").unwrap(), None);

        let table = CatalogTable::new(vec![row("A", None)]);
        let written = write_catalog_csv(dir.path(), "THG", "run", &table).unwrap();
        assert_eq!(latest_export(dir.path(), "THG").unwrap(), Some(written));
    }
}
