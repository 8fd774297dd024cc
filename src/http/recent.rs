//! Recent-logs endpoint: newest entries first, capped.

use crate::{
  app::AppState,
  error::ApiError,
  http::envelope::{ALLOW_GET, ErrorBody, json_response},
  models::log::{
    log_entry::PARTITION_KEY,
    recent_log::{RecentLog, RecentLogs},
  },
  store::{LogStore, MAX_RECENT},
};
use axum::{extract::State, http::StatusCode, response::Response};
use tracing::{error, info, instrument};

/// `GET /logs`
#[instrument(name = "recent_logs", skip(state))]
pub async fn recent_logs(State(state): State<AppState>) -> Response {
  match fetch_recent(state.store.as_ref()).await {
    Ok(logs) => {
      info!(count = logs.len(), "retrieved recent log entries");
      json_response(StatusCode::OK, ALLOW_GET, RecentLogs::from(logs))
    }
    Err(e) => query_failure(e),
  }
}

/// Read the newest entries through the partition's timestamp index and
/// project them for transport.
pub async fn fetch_recent(store: &dyn LogStore) -> Result<Vec<RecentLog>, ApiError> {
  let rows = store.query_recent(PARTITION_KEY, MAX_RECENT).await?;
  rows
    .into_iter()
    .map(|row| RecentLog::try_from(row).map_err(ApiError::from))
    .collect()
}

fn query_failure(err: ApiError) -> Response {
  error!(error = %err, "recent logs query failed");
  let body = match err {
    ApiError::StoreUnavailable { .. } => ErrorBody::with_details(
      "Database table not found",
      "The log storage table does not exist",
    ),
    ApiError::StoreOperation(detail) => {
      ErrorBody::with_details("Failed to retrieve log entries", detail)
    }
    ApiError::Internal(detail) | ApiError::ClientInput(detail) => {
      ErrorBody::with_details("Internal server error", detail)
    }
  };
  json_response(StatusCode::INTERNAL_SERVER_ERROR, ALLOW_GET, body)
}
