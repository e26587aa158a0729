//! Key-Value Store Port - Interface for persisting JSON documents.
//!
//! The engine stores exactly two kinds of document per user context: the
//! profile and one draft per instrument. Each adapter instance is scoped to
//! a single user context.

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::foundation::{DomainError, ErrorCode, TestType};

/// Key of the user profile document.
pub const PROFILE_KEY: &str = "profile";

/// Prefix of draft document keys.
pub const DRAFT_KEY_PREFIX: &str = "draft:";

/// Key of the draft document for `test_type`.
pub fn draft_key(test_type: &TestType) -> String {
    format!("{}{}", DRAFT_KEY_PREFIX, test_type)
}

/// Errors that can occur during store operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("Failed to serialize document '{key}': {reason}")]
    SerializationFailed { key: String, reason: String },

    #[error("Failed to deserialize document '{key}': {reason}")]
    DeserializationFailed { key: String, reason: String },

    #[error("IO error: {0}")]
    IoError(String),
}

impl From<StorageError> for DomainError {
    fn from(err: StorageError) -> Self {
        let code = match &err {
            StorageError::SerializationFailed { .. } | StorageError::DeserializationFailed { .. } => {
                ErrorCode::SerializationError
            }
            StorageError::InvalidKey(_) | StorageError::IoError(_) => ErrorCode::StorageError,
        };
        DomainError::new(code, err.to_string())
    }
}

/// Port for reading and writing named JSON documents
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Load the document stored under `key`
    ///
    /// # Returns
    /// `None` if nothing is stored under `key`
    async fn get(&self, key: &str) -> Result<Option<Value>, StorageError>;

    /// Store `value` under `key`, replacing any previous document
    async fn set(&self, key: &str, value: Value) -> Result<(), StorageError>;

    /// Remove the document under `key`
    ///
    /// Removing a missing key is not an error.
    async fn remove(&self, key: &str) -> Result<(), StorageError>;
}
