//! Configuration management for Mirrorbox
//!
//! This module provides a layered configuration system that loads settings from:
//! 1. Default values (embedded in structs)
//! 2. TOML configuration file
//! 3. Environment variables (highest priority)
//!
//! The resulting [`Config`] is assembled once at startup and handed to the
//! resolver; nothing reads the process environment after that.
//!
//! # Usage
//!
//! ```no_run
//! use mirrorbox::config::Config;
//!
//! let config = Config::load().expect("Failed to load configuration");
//! println!("Server listening on: {}", config.server.bind_addr);
//! ```
//!
//! # Environment Variables
//!
//! Configuration can be overridden using environment variables with the pattern:
//! `MIRRORBOX__<section>__<key>`
//!
//! Examples:
//! - `MIRRORBOX__SERVER__BIND_ADDR=0.0.0.0:9000`
//! - `MIRRORBOX__BACKENDS__PRIMARY_STORAGE_BASE=https://cdn.example.com/media`
//! - `MIRRORBOX__BACKENDS__BACKUP_HOST_BASE=https://backup.example.net`
//!
//! # Configuration File
//!
//! By default, the configuration is loaded from `config/mirrorbox.toml`.
//! This can be overridden using the `MIRRORBOX_CONFIG` environment variable.

mod models;
mod sources;
mod validation;

pub use models::{BackendsConfig, Config, ServerConfig};
pub use validation::ValidationError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Configuration validation failed: {0}")]
    ValidationError(#[from] ValidationError),
}

impl Config {
    /// Load configuration from all sources (file + environment)
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables (`MIRRORBOX__*`)
    /// 2. TOML file (default: `config/mirrorbox.toml`)
    /// 3. Default values
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file is malformed or a backend
    /// base path is set to something that is not an http(s) url. Missing
    /// base paths are not an error.
    pub fn load() -> Result<Self, ConfigError> {
        let config = sources::load()?;
        validation::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a specific path
    pub fn load_from_path(path: std::path::PathBuf) -> Result<Self, ConfigError> {
        let config = sources::load_from_sources(path)?;
        validation::validate(&config)?;
        Ok(config)
    }
}
