//! Shared fixtures for handler tests.

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

use crate::adapters::storage::InMemoryStore;
use crate::domain::foundation::TestType;
use crate::domain::instrument::InstrumentRegistry;
use crate::domain::scoring::fixtures::{clarity_twelve, CLARITY_TWELVE};
use crate::ports::{KeyValueStore, StorageError};

/// Registry holding only the twelve item clarity fixture.
pub fn clarity_registry() -> Arc<InstrumentRegistry> {
    Arc::new(InstrumentRegistry::from_definitions(vec![clarity_twelve()]).unwrap())
}

pub fn clarity() -> TestType {
    TestType::new(CLARITY_TWELVE).unwrap()
}

pub fn memory_store() -> Arc<InMemoryStore> {
    Arc::new(InMemoryStore::new())
}

/// Store whose writes always fail; reads see nothing.
pub struct FailingStore;

#[async_trait]
impl KeyValueStore for FailingStore {
    async fn get(&self, _key: &str) -> Result<Option<Value>, StorageError> {
        Ok(None)
    }

    async fn set(&self, _key: &str, _value: Value) -> Result<(), StorageError> {
        Err(StorageError::IoError("Simulated write failure".to_string()))
    }

    async fn remove(&self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::IoError("Simulated delete failure".to_string()))
    }
}

/// Store whose reads always fail; writes are accepted and dropped.
pub struct UnreadableStore;

#[async_trait]
impl KeyValueStore for UnreadableStore {
    async fn get(&self, _key: &str) -> Result<Option<Value>, StorageError> {
        Err(StorageError::IoError("Simulated read failure".to_string()))
    }

    async fn set(&self, _key: &str, _value: Value) -> Result<(), StorageError> {
        Ok(())
    }

    async fn remove(&self, _key: &str) -> Result<(), StorageError> {
        Ok(())
    }
}
