//! Instrument catalog configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::{ConfigError, ValidationError};
use crate::domain::instrument::InstrumentRegistry;

/// Instrument catalog configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InstrumentsConfig {
    /// YAML catalog replacing the built-in instruments
    pub catalog_path: Option<PathBuf>,
}

impl InstrumentsConfig {
    /// Load and validate the configured catalog.
    pub fn load_registry(&self) -> Result<InstrumentRegistry, ConfigError> {
        let registry = match &self.catalog_path {
            None => InstrumentRegistry::builtin()?,
            Some(path) => {
                let text = std::fs::read_to_string(path).map_err(|source| ConfigError::CatalogRead {
                    path: path.clone(),
                    source,
                })?;
                InstrumentRegistry::from_yaml(&text)?
            }
        };
        tracing::info!(instruments = registry.len(), "instrument catalog loaded");
        Ok(registry)
    }

    /// Validate instrument configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        match &self.catalog_path {
            Some(path) if !path.is_file() => Err(ValidationError::CatalogNotFound(path.clone())),
            _ => Ok(()),
        }
    }
}
