//! Raw row read back from the log table.

use super::{recent_log::RecentLog, severity::Severity};
use crate::store::{StoreError, numeric::integer_from_decimal};
use sqlx::FromRow;

/// `timestamp` arrives in its textual decimal form and is converted
/// losslessly when projected.
#[derive(Debug, FromRow)]
pub struct LogRow {
    pub log_id: String,
    pub timestamp: String,
    pub datetime: String,
    pub severity: String,
    pub message: String,
}

impl TryFrom<LogRow> for RecentLog {
    type Error = StoreError;

    fn try_from(row: LogRow) -> Result<Self, Self::Error> {
        let timestamp = integer_from_decimal(&row.timestamp)?;
        let severity: Severity = row.severity.parse().map_err(|e| StoreError::Integrity {
            log_id: row.log_id.clone(),
            reason: e,
        })?;
        Ok(RecentLog {
            log_id: row.log_id,
            timestamp,
            datetime: row.datetime,
            severity,
            message: row.message,
        })
    }
}
