//! Request-level error taxonomy shared by both endpoints.

use crate::store::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed envelope or a failed field rule; the message is returned as is.
    #[error("{0}")]
    ClientInput(String),
    #[error("log table `{table}` not found")]
    StoreUnavailable { table: String },
    #[error("{0}")]
    StoreOperation(String),
    #[error("{0}")]
    Internal(String),
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::TableNotFound { table } => ApiError::StoreUnavailable { table },
            StoreError::Database(e) => ApiError::StoreOperation(e.to_string()),
            // A row that cannot be projected is a data bug, not a store outage.
            other @ (StoreError::Conversion(_) | StoreError::Integrity { .. }) => {
                ApiError::Internal(other.to_string())
            }
        }
    }
}
