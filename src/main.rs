//! loghouse binary: parse arguments, then serve until shutdown.

use loghouse::app::{self, AppArgs};

#[tokio::main]
async fn main() {
  let args = AppArgs::from_cli();
  if let Err(e) = app::run(args).await {
    eprintln!("loghouse: {e}");
    std::process::exit(1);
  }
}
