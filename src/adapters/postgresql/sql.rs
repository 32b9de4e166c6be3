//! SQL text for snapshot tables
//!
//! Table names are validated identifiers before they reach these builders;
//! they are double-quoted so the supplier's upper-case name is preserved.

use crate::domain::catalog::LOAD_COLUMNS;

/// Column definitions in `LOAD_COLUMNS` order
const COLUMN_TYPES: [&str; 14] = [
    "TEXT NOT NULL",
    "TEXT",
    "DOUBLE PRECISION",
    "BIGINT",
    "TEXT",
    "DOUBLE PRECISION",
    "TEXT",
    "TEXT",
    "TEXT",
    "TEXT",
    "TEXT",
    "TEXT",
    "TEXT",
    "TEXT",
];

/// Bind parameters per inserted row
pub const PARAMS_PER_ROW: usize = LOAD_COLUMNS.len();

pub fn drop_table(table: &str) -> String {
    format!("DROP TABLE IF EXISTS \"{table}\"")
}

pub fn create_table(table: &str) -> String {
    let columns = LOAD_COLUMNS
        .iter()
        .zip(COLUMN_TYPES.iter())
        .map(|(name, ty)| format!("    {name} {ty}"))
        .collect::<Vec<_>>()
        .join(",\n");
    format!("CREATE TABLE \"{table}\" (\n{columns}\n)")
}

/// Unique key on the first `key_length` characters of `eigen_sku`
pub fn create_key_index(table: &str, key_length: usize) -> String {
    format!("CREATE UNIQUE INDEX \"{table}_pkey\" ON \"{table}\" (left(eigen_sku, {key_length}))")
}

/// Multi-row INSERT with `rows` groups of placeholders
pub fn insert_rows(table: &str, rows: usize) -> String {
    let groups = (0..rows)
        .map(|r| {
            let placeholders = (1..=PARAMS_PER_ROW)
                .map(|c| format!("${}", r * PARAMS_PER_ROW + c))
                .collect::<Vec<_>>()
                .join(", ");
            format!("({placeholders})")
        })
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "INSERT INTO \"{table}\" ({}) VALUES {groups}",
        LOAD_COLUMNS.join(", ")
    )
}

/// Row count plus truncated stock and price sums, all as BIGINT
pub fn import_stats(table: &str) -> String {
    format!(
        "SELECT count(*)::BIGINT, \
         COALESCE(TRUNC(SUM(voorraad)), 0)::BIGINT, \
         COALESCE(TRUNC(SUM(prijs)), 0)::BIGINT \
         FROM \"{table}\""
    )
}

pub fn insert_import_log(log_table: &str) -> String {
    format!(
        "INSERT INTO {log_table} (aantal_items, totaal_stock, totaal_prijs, leverancier) \
         VALUES ($1, $2, $3, $4)"
    )
}
