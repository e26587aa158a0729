//! Storage configuration

use serde::Deserialize;
use std::path::PathBuf;
use std::sync::Arc;

use super::error::ValidationError;
use crate::adapters::storage::{FileStore, InMemoryStore};
use crate::ports::KeyValueStore;

/// Which `KeyValueStore` adapter backs a user context
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// Documents live only as long as the process
    #[default]
    Memory,
    /// One JSON file per document under `data_dir`
    File,
}

/// Storage configuration
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    #[serde(default)]
    pub backend: StorageBackend,

    /// Root directory for the file backend
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

impl StorageConfig {
    /// Open the store for one user context.
    ///
    /// With the file backend each context gets its own subdirectory of `data_dir`.
    /// The context follows the same `[a-z0-9_-]` rule as store keys, so it
    /// cannot name a path outside `data_dir`.
    pub fn open(&self, user_context: &str) -> Result<Arc<dyn KeyValueStore>, ValidationError> {
        if !FileStore::is_valid_segment(user_context) {
            return Err(ValidationError::InvalidUserContext(user_context.to_string()));
        }
        let store: Arc<dyn KeyValueStore> = match self.backend {
            StorageBackend::Memory => Arc::new(InMemoryStore::new()),
            StorageBackend::File => Arc::new(FileStore::new(self.data_dir.join(user_context))),
        };
        Ok(store)
    }

    /// Validate storage configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.backend == StorageBackend::File && self.data_dir.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("storage.data_dir"));
        }
        Ok(())
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            data_dir: default_data_dir(),
        }
    }
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./data")
}
