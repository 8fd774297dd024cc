//! loghouse library entrypoint.
//!
//! Modules:
//! - `app`: startup and shared state
//! - `config`: layered configuration (defaults, file, environment)
//! - `http`: Axum router, ingest and recent-logs handlers
//! - `store`: log store trait, SQLite implementation, numeric conversion
//! - `db`: pool setup and table provisioning
//! - `models`: typed records used across layers
//! - `error`: request-level error taxonomy
//! - `util`: tracing setup

pub mod app;
pub mod config;
pub mod db;
pub mod error;
pub mod http;
pub mod models;
pub mod store;
pub mod util;
