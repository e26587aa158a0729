//! Storage Adapters
//!
//! Implementations of the KeyValueStore port.
//!
//! ## Available Adapters
//!
//! - **FileStore** - Stores documents as JSON files on disk
//! - **InMemoryStore** - Stores documents in memory (testing/embedding)
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::{FileStore, InMemoryStore};
//!
//! // One store per user context
//! let store = FileStore::new("./data/users/alice");
//!
//! // Testing
//! let store = InMemoryStore::new();
//! ```

mod file_store;
mod in_memory_store;

pub use file_store::FileStore;
pub use in_memory_store::InMemoryStore;
