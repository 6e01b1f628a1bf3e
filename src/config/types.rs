use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Environment variable that overrides the backend base URL.
pub const API_URL_ENV: &str = "FUNDSCOPE_API_URL";

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub theme: ThemeConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Backend connection settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the analysis backend (scheme + host + port).
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

/// Where the theme preference is persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Directory holding the persisted theme key. `None` uses the platform data dir.
    #[serde(default)]
    pub storage_dir: Option<PathBuf>,
}

/// Log filter used when `RUST_LOG` is unset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

impl ThemeConfig {
    /// Resolved storage directory for the theme key.
    ///
    /// Falls back to `dirs::data_dir()/fundscope`, or the current directory
    /// when no data dir is available.
    pub fn resolved_storage_dir(&self) -> PathBuf {
        match &self.storage_dir {
            Some(dir) => dir.clone(),
            None => dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("fundscope"),
        }
    }
}
