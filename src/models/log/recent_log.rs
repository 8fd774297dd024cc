//! Transport shape returned by the recent-logs endpoint.

use super::severity::Severity;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentLog {
    pub log_id: String,
    pub timestamp: i64,
    pub datetime: String,
    pub severity: Severity,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct RecentLogs {
    pub count: usize,
    pub logs: Vec<RecentLog>,
}

impl From<Vec<RecentLog>> for RecentLogs {
    fn from(logs: Vec<RecentLog>) -> Self {
        RecentLogs {
            count: logs.len(),
            logs,
        }
    }
}
