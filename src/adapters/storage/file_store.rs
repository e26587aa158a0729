//! File-based Key-Value Store Adapter
//!
//! Stores each document as a pretty-printed JSON file under a base
//! directory. Key segments separated by `:` become directories, so
//! `profile` lives at `{base}/profile.json` and `draft:rses` at
//! `{base}/draft/rses.json`.

use async_trait::async_trait;
use serde_json::Value;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::ports::{KeyValueStore, StorageError};

/// File-based storage for JSON documents
#[derive(Debug, Clone)]
pub struct FileStore {
    base_path: PathBuf,
}

impl FileStore {
    /// Create a new file store rooted at `base_path`
    ///
    /// The directory is created on first write.
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// A path segment is non-empty and limited to `[a-z0-9_-]`.
    pub fn is_valid_segment(segment: &str) -> bool {
        !segment.is_empty()
            && segment
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_')
    }

    /// Map a key onto a file path, rejecting anything that could escape the base directory
    fn document_path(&self, key: &str) -> Result<PathBuf, StorageError> {
        let segments: Vec<&str> = key.split(':').collect();
        if !segments.iter().all(|segment| Self::is_valid_segment(segment)) {
            return Err(StorageError::InvalidKey(key.to_string()));
        }

        let mut path = self.base_path.clone();
        let (file, dirs) = match segments.split_last() {
            Some(parts) => parts,
            None => return Err(StorageError::InvalidKey(key.to_string())),
        };
        for dir in dirs {
            path.push(dir);
        }
        path.push(format!("{}.json", file));
        Ok(path)
    }

    async fn ensure_parent(&self, path: &Path) -> Result<(), StorageError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| StorageError::IoError(format!("Failed to create directory: {}", e)))?;
        }
        Ok(())
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<Value>, StorageError> {
        let path = self.document_path(key)?;

        let text = match fs::read_to_string(&path).await {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(StorageError::IoError(format!("Failed to read {}: {}", path.display(), e))),
        };

        let value = serde_json::from_str(&text).map_err(|e| StorageError::DeserializationFailed {
            key: key.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Some(value))
    }

    async fn set(&self, key: &str, value: Value) -> Result<(), StorageError> {
        let path = self.document_path(key)?;
        self.ensure_parent(&path).await?;

        let text = serde_json::to_string_pretty(&value).map_err(|e| {
            StorageError::SerializationFailed {
                key: key.to_string(),
                reason: e.to_string(),
            }
        })?;

        // Write to a sibling temp file, then rename over the target
        let temp_path = path.with_extension("json.tmp");
        fs::write(&temp_path, text)
            .await
            .map_err(|e| StorageError::IoError(format!("Failed to write temporary file: {}", e)))?;
        fs::rename(&temp_path, &path)
            .await
            .map_err(|e| StorageError::IoError(format!("Failed to rename file: {}", e)))?;

        tracing::debug!(key, path = %path.display(), "document written");
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        let path = self.document_path(key)?;

        match fs::remove_file(&path).await {
            Ok(()) => {
                tracing::debug!(key, path = %path.display(), "document removed");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::IoError(format!("Failed to delete {}: {}", path.display(), e))),
        }
    }
}
