//! Log entry as written by the ingest endpoint.

use super::severity::Severity;
use chrono::{DateTime, SecondsFormat, Utc};
use uuid::Uuid;

/// Partition value shared by every entry so all of them sit in one
/// timestamp-ordered index range.
pub const PARTITION_KEY: &str = "LOG";

/// A persisted entry. Entries are append-only: built once, written once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub id: Uuid,
    pub timestamp: i64,
    pub datetime: String,
    pub severity: Severity,
    pub message: String,
    pub partition_key: &'static str,
}

impl LogEntry {
    /// Build a fresh entry stamped with the current time.
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self::at(severity, message, Utc::now())
    }

    /// Build a fresh entry stamped with `now`. `datetime` is rendered from the
    /// same instant as `timestamp`.
    pub fn at(severity: Severity, message: impl Into<String>, now: DateTime<Utc>) -> Self {
        LogEntry {
            id: Uuid::new_v4(),
            timestamp: now.timestamp_millis(),
            datetime: render_datetime(&now),
            severity,
            message: message.into(),
            partition_key: PARTITION_KEY,
        }
    }

    pub fn log_id(&self) -> String {
        self.id.hyphenated().to_string()
    }
}

/// ISO-8601 in UTC with millisecond precision and a `Z` suffix.
pub fn render_datetime(at: &DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn datetime_mirrors_timestamp() {
        let now = Utc.timestamp_millis_opt(1_706_356_800_123).unwrap();
        let entry = LogEntry::at(Severity::Info, "hello", now);
        assert_eq!(entry.timestamp, 1_706_356_800_123);
        assert_eq!(entry.datetime, "2024-01-27T12:00:00.123Z");
        assert_eq!(entry.partition_key, "LOG");
    }

    #[test]
    fn whole_seconds_keep_millis() {
        let now = Utc.timestamp_millis_opt(1_706_356_800_000).unwrap();
        assert_eq!(render_datetime(&now), "2024-01-27T12:00:00.000Z");
    }

    #[test]
    fn ids_are_fresh() {
        let a = LogEntry::new(Severity::Error, "same");
        let b = LogEntry::new(Severity::Error, "same");
        assert_ne!(a.id, b.id);
        assert_eq!(a.log_id().len(), 36);
    }
}
