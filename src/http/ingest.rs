//! Ingest endpoint: validate, stamp and store one log entry.

use crate::{
  app::AppState,
  error::ApiError,
  http::{
    envelope::{ALLOW_POST, ErrorBody, json_response},
    payload::parse_ingest,
  },
  models::log::log_entry::LogEntry,
};
use axum::{body::Bytes, extract::State, http::StatusCode, response::Response};
use serde::Serialize;
use tracing::{error, info, instrument, warn};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IngestResponse {
  pub message: &'static str,
  pub log_id: String,
  pub timestamp: i64,
}

/// `POST /logs`
///
/// 201 with the new id and timestamp, 400 naming the first failed rule, or
/// 500 with a generic message. Store errors are logged, never returned.
#[instrument(name = "ingest_log", skip(state, body), fields(body_len = body.len()))]
pub async fn ingest_log(State(state): State<AppState>, body: Bytes) -> Response {
  match ingest(&state, &body).await {
    Ok(entry) => json_response(
      StatusCode::CREATED,
      ALLOW_POST,
      IngestResponse {
        message: "Log entry created successfully",
        log_id: entry.log_id(),
        timestamp: entry.timestamp,
      },
    ),
    Err(e) => ingest_failure(e),
  }
}

async fn ingest(state: &AppState, body: &[u8]) -> Result<LogEntry, ApiError> {
  let valid = parse_ingest(body)?;
  let entry = LogEntry::new(valid.severity, valid.message);
  state.store.put_entry(&entry).await?;
  info!(log_id = %entry.id, severity = %entry.severity, "stored log entry");
  Ok(entry)
}

fn ingest_failure(err: ApiError) -> Response {
  let (status, body) = match &err {
    ApiError::ClientInput(msg) => {
      warn!(reason = %msg, "rejected log entry");
      (StatusCode::BAD_REQUEST, ErrorBody::new(msg.clone()))
    }
    ApiError::StoreUnavailable { .. } | ApiError::StoreOperation(_) => {
      error!(error = %err, "log store write failed");
      (
        StatusCode::INTERNAL_SERVER_ERROR,
        ErrorBody::new("Failed to store log entry"),
      )
    }
    ApiError::Internal(_) => {
      error!(error = %err, "unexpected ingest failure");
      (
        StatusCode::INTERNAL_SERVER_ERROR,
        ErrorBody::new("Internal server error"),
      )
    }
  };
  json_response(status, ALLOW_POST, body)
}
