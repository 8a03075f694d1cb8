//! Configuration management for ethcmd.
//!
//! Handles loading configuration from a TOML file and the environment. The
//! backend is resolved with the precedence CLI flag, `ETHCMD_BACKEND`, config
//! file, built-in default.

use crate::backend::Backend;
use crate::error::{EthcmdError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable that overrides the configured backend.
pub const BACKEND_ENV: &str = "ETHCMD_BACKEND";

/// Main configuration structure for ethcmd.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    /// Backend used when neither the CLI nor the environment picks one.
    #[serde(default)]
    pub backend: Option<Backend>,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Default filter directive, overridden by `RUST_LOG`.
    #[serde(default = "default_level")]
    pub level: String,
}

fn default_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

impl Config {
    /// Returns the default config file path for the current platform.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("ethcmd")
            .join("config.toml")
    }

    /// Loads configuration from a TOML file.
    ///
    /// A missing file yields the defaults.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| EthcmdError::config(format!("Failed to read config file: {e}")))?;

        Self::parse_toml(&content, path)
    }

    /// Parses configuration from a TOML string.
    fn parse_toml(content: &str, path: &Path) -> Result<Self> {
        toml::from_str(content).map_err(|e| {
            EthcmdError::config(format!(
                "Configuration error in {}:\n  {}",
                path.display(),
                e
            ))
        })
    }

    /// Resolves the active backend from the CLI flag, the environment and
    /// this file, in that order.
    pub fn resolve_backend(&self, cli: Option<Backend>) -> Result<Backend> {
        let env = std::env::var(BACKEND_ENV).ok();
        self.resolve_backend_with(cli, env.as_deref())
    }

    fn resolve_backend_with(&self, cli: Option<Backend>, env: Option<&str>) -> Result<Backend> {
        if let Some(backend) = cli {
            return Ok(backend);
        }
        if let Some(name) = env.filter(|name| !name.is_empty()) {
            return Backend::parse(name).ok_or_else(|| {
                EthcmdError::config(format!("{BACKEND_ENV}: unknown backend '{name}'"))
            });
        }
        Ok(self.backend.unwrap_or_default())
    }
}
