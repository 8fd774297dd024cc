//! Service configuration: defaults, optional file, then environment.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub addr: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StoreConfig {
    pub database_url: String,
    pub table_name: String,
    pub max_connections: u32,
    /// Provision the table and its timestamp index at startup.
    pub create_table: bool,
}

impl StoreConfig {
    /// Name of the secondary index ordering a partition by timestamp.
    pub fn index_name(&self) -> String {
        format!("{}_timestamp_index", self.table_name)
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub store: StoreConfig,
}

impl AppConfig {
    /// Defaults, then `file` (or `config/loghouse.toml` when absent), then
    /// `LOGHOUSE__*` variables.
    pub fn load(file: Option<&Path>) -> Result<Self, ConfigError> {
        let file_source = match file {
            Some(path) => File::from(path).required(true),
            None => File::with_name("config/loghouse").required(false),
        };
        let s = Config::builder()
            .set_default("server.addr", "127.0.0.1:8080")?
            .set_default("store.database_url", "sqlite://loghouse.db")?
            .set_default("store.table_name", "logs")?
            .set_default("store.max_connections", 5)?
            .set_default("store.create_table", true)?
            .add_source(file_source)
            // e.g. LOGHOUSE__STORE__TABLE_NAME=audit_logs
            .add_source(
                Environment::with_prefix("LOGHOUSE")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let cfg: AppConfig = s.try_deserialize()?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !is_identifier(&self.store.table_name) {
            return Err(ConfigError::Message(format!(
                "store.table_name `{}` must be a plain identifier ([A-Za-z_][A-Za-z0-9_]*)",
                self.store.table_name
            )));
        }
        if self.store.max_connections == 0 {
            return Err(ConfigError::Message(
                "store.max_connections must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

/// The table name is interpolated into SQL, so only bare identifiers pass.
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
