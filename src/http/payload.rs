//! Ingest payload decoding and field validation.
//!
//! The request body is an invocation envelope in one of three shapes, tried
//! in order:
//! 1. `{"body": "<json text>"}`: the string is decoded as the payload
//! 2. `{"body": {...}}`: the object is the payload
//! 3. any other object: the envelope itself is the payload, and a `body`
//!    of another type (often `null`) is ignored

use crate::{error::ApiError, models::log::severity::Severity};
use serde::Deserialize;
use serde_json::{Map, Value};

pub const MAX_MESSAGE_CHARS: usize = 10_000;

const INVALID_JSON: &str = "Invalid JSON in request body";
const INVALID_FORMAT: &str = "Invalid request format";

type Object = Map<String, Value>;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum Envelope {
  Encoded { body: String },
  Structured { body: Object },
  Flat(Object),
}

impl Envelope {
  pub fn decode(raw: &[u8]) -> Result<Self, ApiError> {
    let value: Value =
      serde_json::from_slice(raw).map_err(|_| ApiError::ClientInput(INVALID_JSON.into()))?;
    // Untagged struct variants would also accept JSON arrays.
    if !value.is_object() {
      return Err(ApiError::ClientInput(INVALID_FORMAT.into()));
    }
    serde_json::from_value(value).map_err(|_| ApiError::ClientInput(INVALID_FORMAT.into()))
  }

  pub fn into_payload(self) -> Result<Object, ApiError> {
    match self {
      Envelope::Encoded { body } => {
        let value: Value = serde_json::from_str(&body)
          .map_err(|_| ApiError::ClientInput(INVALID_JSON.into()))?;
        match value {
          Value::Object(map) => Ok(map),
          _ => Err(ApiError::ClientInput(INVALID_FORMAT.into())),
        }
      }
      Envelope::Structured { body } => Ok(body),
      Envelope::Flat(map) => Ok(map),
    }
  }
}

/// Normalized fields ready to be stamped and stored.
#[derive(Debug, PartialEq, Eq)]
pub struct ValidLog {
  pub severity: Severity,
  pub message: String,
}

/// Apply the field rules in order; the first failing rule's message wins.
pub fn validate(payload: &Object) -> Result<ValidLog, String> {
  let Some(severity) = payload.get("severity") else {
    return Err("Missing required field: severity".into());
  };
  let Some(message) = payload.get("message") else {
    return Err("Missing required field: message".into());
  };

  let Value::String(severity) = severity else {
    return Err("Severity must be a string".into());
  };
  let severity: Severity = severity.parse().map_err(|_| {
    format!(
      "Invalid severity. Must be one of: {}",
      Severity::valid_values()
    )
  })?;

  let Value::String(message) = message else {
    return Err("Message must be a string".into());
  };
  let trimmed = message.trim_matches(is_strip_char);
  if trimmed.is_empty() {
    return Err("Message cannot be empty".into());
  }
  if message.chars().count() > MAX_MESSAGE_CHARS {
    return Err(format!(
      "Message exceeds maximum length of {MAX_MESSAGE_CHARS} characters"
    ));
  }

  Ok(ValidLog {
    severity,
    message: trimmed.to_string(),
  })
}

/// Stripped from both ends of a message: Unicode whitespace and the
/// information separators U+001C..=U+001F.
fn is_strip_char(c: char) -> bool {
  c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Decode the raw request body and validate its fields.
pub fn parse_ingest(raw: &[u8]) -> Result<ValidLog, ApiError> {
  let payload = Envelope::decode(raw)?.into_payload()?;
  validate(&payload).map_err(ApiError::ClientInput)
}
