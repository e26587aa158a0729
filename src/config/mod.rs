//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `PSYCHE_PROFILE` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use psyche_profile::config::{init_tracing, AppConfig};
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! init_tracing(&config.logging);
//!
//! let registry = config.instruments.load_registry().expect("Invalid catalog");
//! let store = config.storage.open("default").expect("Invalid user context");
//! ```

mod error;
mod instruments;
mod logging;
mod storage;
mod telemetry;

pub use error::{ConfigError, ValidationError};
pub use instruments::InstrumentsConfig;
pub use logging::{LogFormat, LoggingConfig};
pub use storage::{StorageBackend, StorageConfig};
pub use telemetry::init_tracing;

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields an in-memory
/// engine over the built-in catalog. Load using [`AppConfig::load()`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Persistence backend
    #[serde(default)]
    pub storage: StorageConfig,

    /// Log filter and format
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Instrument catalog source
    #[serde(default)]
    pub instruments: InstrumentsConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `PSYCHE_PROFILE` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `PSYCHE_PROFILE__STORAGE__BACKEND=file` -> `storage.backend = file`
    /// - `PSYCHE_PROFILE__LOGGING__FORMAT=json` -> `logging.format = json`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("PSYCHE_PROFILE")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.storage.validate()?;
        self.logging.validate()?;
        self.instruments.validate()?;
        Ok(())
    }
}
