//! Durable log store: trait seam, errors and the process-wide handle.

use crate::{
    config::StoreConfig,
    models::log::{log_entry::LogEntry, log_row::LogRow},
};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::OnceCell;

pub mod numeric;
pub mod sqlite;

pub use sqlite::SqliteLogStore;

/// Maximum number of entries the recent-logs query returns.
pub const MAX_RECENT: u32 = 100;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("log table `{table}` does not exist")]
    TableNotFound { table: String },
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("timestamp conversion failed: {0}")]
    Conversion(#[from] numeric::NumericError),
    #[error("stored entry {log_id} is inconsistent: {reason}")]
    Integrity { log_id: String, reason: String },
}

/// Operations the handlers need from the backing table.
#[async_trait]
pub trait LogStore: Send + Sync + 'static {
    /// Write one entry keyed by its id. No conditional check is made.
    async fn put_entry(&self, entry: &LogEntry) -> Result<(), StoreError>;

    /// Entries in `partition`, newest first, at most `limit` of them.
    /// Order among equal timestamps is unspecified.
    async fn query_recent(&self, partition: &str, limit: u32) -> Result<Vec<LogRow>, StoreError>;
}

static SHARED: OnceCell<Arc<SqliteLogStore>> = OnceCell::const_new();

/// Process-wide store handle, built from `config` on first use and reused
/// afterwards. Later calls ignore `config`.
pub async fn shared(config: &StoreConfig) -> Result<Arc<SqliteLogStore>, StoreError> {
    SHARED
        .get_or_try_init(|| async {
            let store = SqliteLogStore::connect(config).await?;
            Ok::<_, StoreError>(Arc::new(store))
        })
        .await
        .cloned()
}
