//! SQLite-backed log store.

use super::{LogStore, StoreError};
use crate::{
    config::StoreConfig,
    db,
    models::log::{log_entry::LogEntry, log_row::LogRow},
};
use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::{debug, info};

#[derive(Debug, Clone)]
pub struct SqliteLogStore {
    pool: SqlitePool,
    table: String,
}

impl SqliteLogStore {
    /// Open the configured database and provision the table when asked to.
    pub async fn connect(config: &StoreConfig) -> Result<Self, StoreError> {
        let pool = db::connect(config).await?;
        if config.create_table {
            db::ensure_log_table(&pool, &config.table_name).await?;
            info!(table = %config.table_name, index = %config.index_name(), "log table ready");
        }
        Ok(Self::from_pool(pool, config.table_name.clone()))
    }

    /// Wrap an existing pool. `table` must be a bare identifier.
    pub fn from_pool(pool: SqlitePool, table: impl Into<String>) -> Self {
        SqliteLogStore {
            pool,
            table: table.into(),
        }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    fn classify(&self, err: sqlx::Error) -> StoreError {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.message().contains("no such table") {
                return StoreError::TableNotFound {
                    table: self.table.clone(),
                };
            }
        }
        StoreError::Database(err)
    }
}

#[async_trait]
impl LogStore for SqliteLogStore {
    async fn put_entry(&self, entry: &LogEntry) -> Result<(), StoreError> {
        let sql = format!(
            "INSERT OR REPLACE INTO {} (log_id, timestamp, datetime, severity, message, partition_key) VALUES (?, ?, ?, ?, ?, ?)",
            self.table
        );
        sqlx::query(&sql)
            .bind(entry.log_id())
            .bind(entry.timestamp)
            .bind(&entry.datetime)
            .bind(entry.severity.as_str())
            .bind(&entry.message)
            .bind(entry.partition_key)
            .execute(&self.pool)
            .await
            .map_err(|e| self.classify(e))?;
        debug!(log_id = %entry.id, "put_entry ok");
        Ok(())
    }

    async fn query_recent(&self, partition: &str, limit: u32) -> Result<Vec<LogRow>, StoreError> {
        // Qualified ORDER BY so the sort uses the numeric column, not the text alias.
        let sql = format!(
            "SELECT log_id, CAST(timestamp AS TEXT) AS timestamp, datetime, severity, message FROM {t} WHERE partition_key = ? ORDER BY {t}.timestamp DESC LIMIT ?",
            t = self.table
        );
        let rows = sqlx::query_as::<_, LogRow>(&sql)
            .bind(partition)
            .bind(i64::from(limit))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| self.classify(e))?;
        debug!(count = rows.len(), "query_recent ok");
        Ok(rows)
    }
}
