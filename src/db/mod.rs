//! Database helpers: pool setup, table provisioning and path handling.

use crate::config::StoreConfig;
use sqlx::{SqlitePool, sqlite::SqlitePoolOptions};
use std::path::Path;
use tracing::warn;

/// Open a pool for the configured database, creating the file if needed.
pub async fn connect(config: &StoreConfig) -> Result<SqlitePool, sqlx::Error> {
    let db_url = ensure_sqlite_path(&config.database_url);
    SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect(db_url)
        .await
}

/// Create the log table and its timestamp index if absent.
///
/// `table` must already be validated as a bare identifier.
pub async fn ensure_log_table(pool: &SqlitePool, table: &str) -> Result<(), sqlx::Error> {
    sqlx::query(&format!(
        r#"CREATE TABLE IF NOT EXISTS {table} (
            log_id TEXT PRIMARY KEY,
            timestamp NUMERIC NOT NULL,
            datetime TEXT NOT NULL,
            severity TEXT NOT NULL,
            message TEXT NOT NULL,
            partition_key TEXT NOT NULL
        )"#
    ))
    .execute(pool)
    .await?;

    sqlx::query(&format!(
        "CREATE INDEX IF NOT EXISTS {table}_timestamp_index ON {table} (partition_key, timestamp)"
    ))
    .execute(pool)
    .await?;
    Ok(())
}

/// Filesystem path behind a file-backed SQLite URL; `None` for in-memory
/// databases and other drivers.
pub fn sqlite_file_path(db_url: &str) -> Option<&Path> {
    let rest = db_url
        .strip_prefix("sqlite://")
        .or_else(|| db_url.strip_prefix("sqlite:"))?;
    let path = rest.split_once('?').map_or(rest, |(p, _)| p);
    if path.is_empty() || path == ":memory:" {
        return None;
    }
    Some(Path::new(path))
}

/// Create the SQLite file and its parent folders ahead of connecting.
///
/// Failures are logged and left for the connect call to report.
pub fn ensure_sqlite_path(db_url: &str) -> &str {
    let Some(file) = sqlite_file_path(db_url) else {
        return db_url;
    };
    if let Some(parent) = file.parent().filter(|p| !p.as_os_str().is_empty()) {
        if let Err(e) = std::fs::create_dir_all(parent) {
            warn!(path = %parent.display(), error = %e, "could not create database directory");
        }
    }
    if let Err(e) = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(file)
    {
        warn!(path = %file.display(), error = %e, "could not create database file");
    }
    db_url
}
