//! HTTP router and handlers.

use crate::app::AppState;
use axum::{Router, routing::get};

pub mod envelope;
pub mod ingest;
pub mod payload;
pub mod recent;

/// Assemble the HTTP router with all routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/logs",
            get(recent::recent_logs)
                .post(ingest::ingest_log)
                .options(envelope::preflight),
        )
        .with_state(state)
}
