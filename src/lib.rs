//! Client library for the mutual-fund recommendation dashboard.
//!
//! - [`api`]: typed HTTP client for the analysis backend
//! - [`ui::theme`]: persisted light/dark theme store
//! - [`config`]: TOML config with environment overrides
//! - [`cli`]: the `fundscope` command-line driver

pub mod api;
pub mod cli;
pub mod config;
pub mod logging;
pub mod ui;
