//! Application setup and runtime.

use crate::{
  config::AppConfig,
  http,
  store::{self, LogStore},
};
use std::{net::SocketAddr, sync::Arc};
use tracing::info;

pub mod args;

pub use args::AppArgs;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
  pub store: Arc<dyn LogStore>,
}

impl AppState {
  pub fn new(store: Arc<dyn LogStore>) -> Self {
    AppState { store }
  }
}

/// Load configuration, open the store and serve both endpoints.
pub async fn run(args: AppArgs) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
  crate::util::init_tracing();

  let mut config = AppConfig::load(args.config.as_deref())?;
  if let Some(addr) = args.addr {
    config.server.addr = addr;
  }
  let store: Arc<dyn LogStore> = store::shared(&config.store).await?;
  let app = http::build_router(AppState::new(store));

  let addr: SocketAddr = config.server.addr.parse()?;

  info!("ingest endpoint:  POST http://{}/logs", addr);
  info!("recent endpoint:  GET  http://{}/logs", addr);

  let listener = tokio::net::TcpListener::bind(addr).await?;
  axum::serve(listener, app).await?;
  Ok(())
}
