//! Configuration loading: TOML file plus environment overrides.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{ApiConfig, Config, LoggingConfig, ThemeConfig, API_URL_ENV};
