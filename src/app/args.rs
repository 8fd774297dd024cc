use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "loghouse", version)]
#[command(about = "Log ingestion and recent-log retrieval service")]
pub struct AppArgs {
  #[arg(long, help = "Config file path (default: config/loghouse.toml if present)")]
  pub config: Option<PathBuf>,

  #[arg(long, help = "Listen address, overrides server.addr")]
  pub addr: Option<String>,
}

impl AppArgs {
  pub fn from_cli() -> Self {
    <Self as Parser>::parse()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parses_overrides() {
    let args = AppArgs::try_parse_from(["loghouse", "--config", "prod.toml", "--addr", "0.0.0.0:9000"])
      .unwrap();
    assert_eq!(args.config, Some(PathBuf::from("prod.toml")));
    assert_eq!(args.addr.as_deref(), Some("0.0.0.0:9000"));
  }

  #[test]
  fn no_args_means_defaults() {
    let args = AppArgs::try_parse_from(["loghouse"]).unwrap();
    assert!(args.config.is_none() && args.addr.is_none());
  }
}
