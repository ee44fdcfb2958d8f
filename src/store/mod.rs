//! Key-value storage - string-keyed persistence for serialized collections.
//!
//! The registry keeps each collection (and the session entries) as a single
//! string value under a fixed key. Stores make no transactional guarantee
//! across keys; a write replaces the whole value of one key.
//!
//! ## Example
//!
//! ```ignore
//! use vessel_registry::{InMemoryStore, KeyValueStore};
//!
//! let store = InMemoryStore::new();
//! store.set("maj_ships_db", "[]")?;
//! assert_eq!(store.get("maj_ships_db")?.as_deref(), Some("[]"));
//! ```

mod file;
mod in_memory;

use thiserror::Error;

/// Synchronous string-keyed storage.
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`. Returns None if absent.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Replace the value stored under `key`.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove `key`. Returns true if it existed.
    fn remove(&self, key: &str) -> Result<bool, StoreError>;
}

/// Error type for key-value store operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("store lock poisoned during {0}")]
    Poisoned(&'static str),

    /// Keys are limited to ASCII alphanumerics, `_` and `-`.
    #[error("invalid store key: {0:?}")]
    InvalidKey(String),

    #[error("store i/o error on {key}: {message}")]
    Io { key: String, message: String },
}

pub(crate) fn validate_key(key: &str) -> Result<(), StoreError> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if valid {
        Ok(())
    } else {
        Err(StoreError::InvalidKey(key.to_string()))
    }
}

pub use file::FileStore;
pub use in_memory::InMemoryStore;
