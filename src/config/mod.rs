//! # Configuration
//!
//! JSON configuration file with per-field defaults. Every field is
//! optional on disk; an absent or partial file still yields a runnable
//! configuration.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("cannot parse config file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Top-level application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP listener settings
    #[serde(default)]
    pub http: HttpConfig,

    /// Backing store connection settings
    #[serde(default)]
    pub store: StoreConfig,
}

impl AppConfig {
    /// Load configuration from a JSON file.
    ///
    /// A missing file is not an error; defaults apply.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Write this configuration as pretty-printed JSON.
    pub fn write(&self, path: &Path) -> Result<(), ConfigError> {
        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents)?;
        Ok(())
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Host to bind to (default: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to (default: 8000)
    #[serde(default = "default_http_port")]
    pub port: u16,

    /// CORS allowed origins; empty means permissive
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_http_port() -> u16 {
    8000
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_http_port(),
            cors_origins: Vec::new(),
        }
    }
}

impl HttpConfig {
    /// Create a config with the given port
    pub fn with_port(port: u16) -> Self {
        Self {
            port,
            ..Default::default()
        }
    }

    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Backing store connection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Store host (default: "127.0.0.1")
    #[serde(default = "default_store_host")]
    pub host: String,

    /// Store port (default: 5432)
    #[serde(default = "default_store_port")]
    pub port: u16,

    /// Role to authenticate as
    #[serde(default = "default_store_user")]
    pub user: String,

    /// Password for the role
    #[serde(default = "default_store_password")]
    pub password: String,

    /// Database name
    #[serde(default = "default_store_dbname")]
    pub dbname: String,

    /// Maximum pooled connections (default: 16)
    #[serde(default = "default_pool_size")]
    pub pool_size: usize,
}

fn default_store_host() -> String {
    "127.0.0.1".to_string()
}

fn default_store_port() -> u16 {
    5432
}

fn default_store_user() -> String {
    "nagga".to_string()
}

fn default_store_password() -> String {
    "nagga".to_string()
}

fn default_store_dbname() -> String {
    "nagga".to_string()
}

fn default_pool_size() -> usize {
    16
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            host: default_store_host(),
            port: default_store_port(),
            user: default_store_user(),
            password: default_store_password(),
            dbname: default_store_dbname(),
            pool_size: default_pool_size(),
        }
    }
}
