//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `storage` - Key-value stores (in-memory, JSON files)

pub mod storage;

pub use storage::{FileStore, InMemoryStore};
