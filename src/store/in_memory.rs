//! InMemoryStore - HashMap-backed key-value store for tests and embedding.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use super::{validate_key, KeyValueStore, StoreError};

/// In-memory key-value store backed by a HashMap.
///
/// Clone-friendly via Arc: clones share the same entries, so a workspace and
/// a session gate can be handed the same store.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently stored.
    pub fn len(&self) -> usize {
        self.entries.read().map(|entries| entries.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStore for InMemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        validate_key(key)?;
        let entries = self
            .entries
            .read()
            .map_err(|_| StoreError::Poisoned("read"))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        validate_key(key)?;
        let mut entries = self
            .entries
            .write()
            .map_err(|_| StoreError::Poisoned("write"))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<bool, StoreError> {
        validate_key(key)?;
        let mut entries = self
            .entries
            .write()
            .map_err(|_| StoreError::Poisoned("remove"))?;
        Ok(entries.remove(key).is_some())
    }
}
