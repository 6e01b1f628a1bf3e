use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use reqwest::Url;

use crate::config::types::{Config, API_URL_ENV};

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/fundscope/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("fundscope").join("config.toml")
    }

    /// Loads configuration from the default config file, then applies
    /// environment overrides.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// Reads the file (see [`Config::read_from`]), then lets
    /// `FUNDSCOPE_API_URL` override `api.base_url` when set and non-empty.
    /// The result is validated before being returned.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::read_from(path)?;
        config.apply_env_override(std::env::var(API_URL_ENV).ok());
        config.validate()?;
        Ok(config)
    }

    /// Parses `path` alone, without environment overrides or validation.
    ///
    /// A missing file yields `Config::default()`.
    pub fn read_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content, path)
    }

    fn parse(content: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Replaces the base URL with `value` when it is set and non-blank.
    pub fn apply_env_override(&mut self, value: Option<String>) {
        if let Some(url) = value {
            let url = url.trim();
            if !url.is_empty() {
                self.api.base_url = url.to_string();
            }
        }
    }

    /// Validates the configuration.
    ///
    /// Checks that the base URL is an absolute http(s) URL.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = Url::parse(&self.api.base_url).map_err(|e| ConfigError::ValidationError {
            message: format!("Invalid base_url '{}': {}", self.api.base_url, e),
        })?;

        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "base_url '{}' must use http or https",
                    self.api.base_url
                ),
            });
        }

        Ok(())
    }
}
