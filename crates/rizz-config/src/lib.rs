use std::env;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use self::batch::BatchConfig;
use self::cache::CacheConfig;
use self::server::ServerConfig;
use self::translator::TranslatorConfig;

pub mod batch;
pub mod cache;
pub mod server;
pub mod translator;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub translator: TranslatorConfig,
    pub cache: CacheConfig,
    pub batch: BatchConfig,
}

impl Config {
    /// Build the config from environment variables, falling back to defaults
    pub fn new() -> Self {
        Config {
            server: ServerConfig::new(),
            translator: TranslatorConfig::new(),
            cache: CacheConfig::new(),
            batch: BatchConfig::new(),
        }
    }

    /// Load a JSON config file. Missing sections and fields take their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let data = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;

        serde_json::from_str(&data).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }
}

/// Read and parse an env var, using `default` when it is unset or malformed
pub(crate) fn env_or<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

pub(crate) fn env_string_or(key: &str, default: impl Into<String>) -> String {
    env::var(key).unwrap_or_else(|_| default.into())
}
