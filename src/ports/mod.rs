//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `KeyValueStore` - Per-user-context persistence of JSON documents

mod key_value_store;

pub use key_value_store::{draft_key, KeyValueStore, StorageError, DRAFT_KEY_PREFIX, PROFILE_KEY};
