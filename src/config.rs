//! Service configuration.
//!
//! Loaded from a TOML file; every section and field is optional and falls
//! back to its default.
//!
//! ```toml
//! [server]
//! host = "0.0.0.0"
//! port = 8080
//!
//! [analyzer]
//! concurrency = 8
//!
//! [keywords]
//! gambling = ["casino", "poker"]
//! ```

use safescan_search::{AnalyzerConfig, KeywordTable};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Result, ServiceError};

/// Top-level configuration for the service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// HTTP listener settings.
    pub server: ServerConfig,
    /// Search, fetch, and concurrency settings.
    pub analyzer: AnalyzerConfig,
    /// Keyword categories. Replaces the built-in table entirely when present.
    pub keywords: Option<KeywordTable>,
}

/// HTTP listener configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to bind.
    pub host: String,
    /// Port to bind (`0` picks a free port).
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 5000,
        }
    }
}

impl ServiceConfig {
    /// Load configuration from a TOML file, falling back to defaults for missing fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if the
    /// analyzer section is invalid.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self =
            toml::from_str(&content).map_err(|e| ServiceError::Config(e.to_string()))?;
        config.analyzer.validate()?;
        Ok(config)
    }

    /// Keyword table to analyze with: the configured one, or the built-in default.
    pub fn keyword_table(&self) -> KeywordTable {
        self.keywords.clone().unwrap_or_default()
    }

    /// Returns the default config file path: `~/.config/safescan/config.toml`.
    pub fn default_config_path() -> PathBuf {
        if let Some(config) = std::env::var_os("XDG_CONFIG_HOME") {
            PathBuf::from(config).join("safescan").join("config.toml")
        } else if let Some(home) = std::env::var_os("HOME") {
            PathBuf::from(home)
                .join(".config")
                .join("safescan")
                .join("config.toml")
        } else {
            PathBuf::from("/tmp/safescan-config/config.toml")
        }
    }
}
