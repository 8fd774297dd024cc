//! Tracing setup.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, fmt};

/// Install the global subscriber. `RUST_LOG` directives apply on top of an
/// `info` floor; malformed directives are skipped rather than fatal.
pub fn init_tracing() {
  let filter = EnvFilter::builder()
    .with_default_directive(LevelFilter::INFO.into())
    .from_env_lossy();
  fmt()
    .with_env_filter(filter)
    .with_target(true)
    .with_thread_ids(false)
    .compact()
    .init();
}
