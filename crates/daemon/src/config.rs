//! Daemon configuration
//!
//! Layers, later wins: built-in defaults, optional TOML file
//! (`TABLEBOOK_CONFIG`, default `tablebook.toml`), then `TABLEBOOK_*`
//! environment variables with `__` between nested keys
//! (e.g. `TABLEBOOK_ENGINE__OVERLAP_MINUTES=60`).

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tablebook_api_rpc::RpcServerConfig;
use tablebook_core::domain::EngineConfig;

pub const CONFIG_PATH_ENV: &str = "TABLEBOOK_CONFIG";
const DEFAULT_CONFIG_FILE: &str = "tablebook.toml";
const DEFAULT_DB_PATH: &str = "~/.tablebook/tablebook.db";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    #[default]
    Sqlite,
    Memory,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DaemonConfig {
    pub database_url: String,
    pub storage: StorageBackend,
    pub rpc: RpcServerConfig,
    pub seed_sample_tables: bool,
    pub log_dir: Option<PathBuf>,
    pub engine: EngineConfig,
}

impl Default for DaemonConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DB_PATH.to_string(),
            storage: StorageBackend::default(),
            rpc: RpcServerConfig::default(),
            seed_sample_tables: true,
            log_dir: None,
            engine: EngineConfig::default(),
        }
    }
}

impl DaemonConfig {
    /// Load from the file named by `TABLEBOOK_CONFIG` (if any) and the environment
    pub fn load() -> Result<Self> {
        let path = std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_FILE.into());
        Self::load_from(Path::new(&path))
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let settings = Config::builder()
            .add_source(
                Config::try_from(&DaemonConfig::default())
                    .context("Failed to serialize default configuration")?,
            )
            .add_source(File::from(path).required(false))
            .add_source(
                Environment::with_prefix("TABLEBOOK")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .with_context(|| format!("Failed to read configuration from {}", path.display()))?;

        let config: DaemonConfig = settings
            .try_deserialize()
            .context("Invalid configuration")?;

        config
            .engine
            .validate()
            .context("Invalid engine configuration")?;

        Ok(config)
    }

    /// sqlx connection URL with `~` expanded; bare paths get the `sqlite://` scheme
    pub fn sqlite_url(&self) -> String {
        let raw = self.database_url.trim();
        if raw.starts_with("sqlite:") {
            return raw.to_string();
        }
        format!("sqlite://{}", shellexpand::tilde(raw))
    }

    /// Directory that must exist before SQLite can create the database file
    pub fn database_dir(&self) -> Option<PathBuf> {
        let raw = self.database_url.trim();
        if raw.starts_with("sqlite:") {
            return None;
        }
        Path::new(shellexpand::tilde(raw).as_ref())
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tablebook_core::domain::{CapacityModel, ConcurrencyMode};

    fn write_temp(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("{}-{}", std::process::id(), name));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_defaults_without_file() {
        let config = DaemonConfig::load_from(Path::new("/nonexistent/tablebook.toml")).unwrap();
        assert_eq!(config.storage, StorageBackend::Sqlite);
        assert_eq!(config.rpc.port, 9530);
        assert_eq!(config.engine, EngineConfig::default());
        assert!(config.seed_sample_tables);
    }

    #[test]
    fn test_file_overrides() {
        let path = write_temp(
            "tablebook-overrides.toml",
            r#"
            storage = "memory"
            seed_sample_tables = false

            [rpc]
            port = 9600

            [engine]
            overlap_minutes = 60
            capacity_model = "table_matching"
            concurrency = "per_date_lock"
            "#,
        );

        let config = DaemonConfig::load_from(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(config.storage, StorageBackend::Memory);
        assert!(!config.seed_sample_tables);
        assert_eq!(config.rpc.port, 9600);
        assert_eq!(config.rpc.host, "127.0.0.1");
        assert_eq!(config.engine.overlap_minutes, 60);
        assert_eq!(config.engine.opening_hour, 17);
        assert_eq!(config.engine.capacity_model, CapacityModel::TableMatching);
        assert_eq!(config.engine.concurrency, ConcurrencyMode::PerDateLock);
    }

    #[test]
    fn test_invalid_engine_rejected() {
        let path = write_temp(
            "tablebook-invalid.toml",
            r#"
            [engine]
            opening_hour = 23
            closing_hour = 22
            "#,
        );

        let result = DaemonConfig::load_from(&path);
        std::fs::remove_file(&path).ok();
        assert!(result.is_err());
    }

    #[test]
    fn test_sqlite_url() {
        let mut config = DaemonConfig {
            database_url: "/var/lib/tablebook/data.db".to_string(),
            ..Default::default()
        };
        assert_eq!(config.sqlite_url(), "sqlite:///var/lib/tablebook/data.db");
        assert_eq!(
            config.database_dir(),
            Some(PathBuf::from("/var/lib/tablebook"))
        );

        config.database_url = "sqlite::memory:".to_string();
        assert_eq!(config.sqlite_url(), "sqlite::memory:");
        assert!(config.database_dir().is_none());
    }
}
