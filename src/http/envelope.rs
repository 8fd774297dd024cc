//! JSON response envelope with fixed cross-origin headers.

use axum::{
  Json,
  http::{HeaderMap, HeaderValue, StatusCode, header},
  response::{IntoResponse, Response},
};
use serde::Serialize;

pub const ALLOW_POST: &str = "POST";
pub const ALLOW_GET: &str = "GET";

/// Error body. `details` is only sent by the query endpoint.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
  pub error: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub details: Option<String>,
}

impl ErrorBody {
  pub fn new(error: impl Into<String>) -> Self {
    ErrorBody {
      error: error.into(),
      details: None,
    }
  }

  pub fn with_details(error: impl Into<String>, details: impl Into<String>) -> Self {
    ErrorBody {
      error: error.into(),
      details: Some(details.into()),
    }
  }
}

fn cors_headers(allow: &'static str) -> HeaderMap {
  let mut headers = HeaderMap::new();
  headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));
  headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
  headers.insert(header::ACCESS_CONTROL_ALLOW_METHODS, HeaderValue::from_static(allow));
  headers.insert(
    header::ACCESS_CONTROL_ALLOW_HEADERS,
    HeaderValue::from_static("Content-Type"),
  );
  headers
}

/// Serialize `body` as JSON with `status` and the CORS headers for `allow`.
pub fn json_response<T: Serialize>(status: StatusCode, allow: &'static str, body: T) -> Response {
  (status, cors_headers(allow), Json(body)).into_response()
}

/// Preflight reply for `/logs`.
pub async fn preflight() -> Response {
  (StatusCode::NO_CONTENT, cors_headers("POST, GET")).into_response()
}
