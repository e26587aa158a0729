//! Configuration error types

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::instrument::ConfigurationError;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),

    #[error("Failed to read instrument catalog {path}: {source}")]
    CatalogRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid instrument catalog: {0}")]
    Catalog(#[from] ConfigurationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid log filter '{filter}': {reason}")]
    InvalidLogFilter { filter: String, reason: String },

    #[error("Instrument catalog not found: {0}")]
    CatalogNotFound(PathBuf),

    #[error("Invalid user context '{0}': expected [a-z0-9_-]+")]
    InvalidUserContext(String),
}
