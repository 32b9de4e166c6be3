//! PostgreSQL adapter implementing the snapshot store
//!
//! One `load_snapshot` call is one transaction: the previous table of the
//! same name is dropped, the new one is created with its key, filled in
//! batches, aggregated, and the import log row is appended before commit.

use super::client::PostgreSQLClient;
use super::sql;
use crate::adapters::database::traits::CatalogStore;
use crate::domain::{ImportStats, LoadRow, Result, SyncError};
use async_trait::async_trait;
use tokio_postgres::types::ToSql;

/// PostgreSQL implementation of [`CatalogStore`]
pub struct PostgreSQLAdapter {
    client: PostgreSQLClient,
}

impl PostgreSQLAdapter {
    /// Create a new PostgreSQL adapter
    pub fn new(client: PostgreSQLClient) -> Self {
        Self { client }
    }
}

fn db_err(context: &str) -> impl Fn(tokio_postgres::Error) -> SyncError + '_ {
    move |e| SyncError::Database(format!("{context}: {e}"))
}

fn row_params(row: &LoadRow) -> [&(dyn ToSql + Sync); sql::PARAMS_PER_ROW] {
    [
        &row.eigen_sku,
        &row.sku,
        &row.ean,
        &row.voorraad,
        &row.merk,
        &row.prijs,
        &row.advies_prijs,
        &row.category,
        &row.gewicht,
        &row.url_plaatje,
        &row.url_artikel,
        &row.product_title,
        &row.lange_omschrijving,
        &row.verpakings_eenheid,
    ]
}

#[async_trait]
impl CatalogStore for PostgreSQLAdapter {
    async fn ensure_import_log_table(&self) -> Result<()> {
        let client = self.client.get_connection().await?;
        let log_table = &self.client.config().import_log_table;

        let migration_sql = include_str!("../../../migrations/001_process_import_log.sql")
            .replace("process_import_log", log_table);

        client
            .batch_execute(&migration_sql)
            .await
            .map_err(db_err("Failed to create import log table"))?;

        tracing::debug!(table = %log_table, "Import log table ready");
        Ok(())
    }

    async fn load_snapshot(
        &self,
        table: &str,
        supplier: &str,
        rows: &[LoadRow],
    ) -> Result<ImportStats> {
        let config = self.client.config();
        let mut client = self.client.get_connection().await?;
        let tx = client
            .transaction()
            .await
            .map_err(db_err("Failed to begin transaction"))?;

        tx.batch_execute(&format!(
            "SET LOCAL statement_timeout = {}",
            config.statement_timeout_seconds * 1000
        ))
        .await
        .map_err(db_err("Failed to set statement timeout"))?;

        tx.batch_execute(&sql::drop_table(table))
            .await
            .map_err(db_err("Failed to drop previous snapshot table"))?;
        tx.batch_execute(&sql::create_table(table))
            .await
            .map_err(db_err("Failed to create snapshot table"))?;
        tx.batch_execute(&sql::create_key_index(table, config.primary_key_length))
            .await
            .map_err(db_err("Failed to create snapshot key"))?;

        for (batch_no, batch) in rows.chunks(config.insert_batch_size.max(1)).enumerate() {
            let statement = sql::insert_rows(table, batch.len());
            let params: Vec<&(dyn ToSql + Sync)> = batch.iter().flat_map(row_params).collect();

            tx.execute(statement.as_str(), &params)
                .await
                .map_err(db_err("Failed to insert snapshot rows"))?;

            tracing::debug!(batch = batch_no + 1, rows = batch.len(), "Inserted batch");
        }

        let stats_row = tx
            .query_one(sql::import_stats(table).as_str(), &[])
            .await
            .map_err(db_err("Failed to compute import statistics"))?;
        let stats = ImportStats {
            item_count: stats_row.get(0),
            total_stock: stats_row.get(1),
            total_price: stats_row.get(2),
        };

        tx.execute(
            sql::insert_import_log(&config.import_log_table).as_str(),
            &[
                &stats.item_count,
                &stats.total_stock,
                &stats.total_price,
                &supplier,
            ],
        )
        .await
        .map_err(db_err("Failed to append import log"))?;

        tx.commit()
            .await
            .map_err(db_err("Failed to commit snapshot"))?;

        tracing::info!(
            table = %table,
            items = stats.item_count,
            total_stock = stats.total_stock,
            total_price = stats.total_price,
            "Snapshot loaded"
        );

        Ok(stats)
    }

    fn close(&self) {
        self.client.close();
    }
}
