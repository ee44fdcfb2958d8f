//! Synchronizer - mirrors in-memory collections to a key-value store.

use tracing::{debug, info, warn};

use super::Collection;
use crate::error::{RegistryError, Result};
use crate::store::KeyValueStore;

/// Serialize a whole collection to its stored form.
pub fn encode<C: Collection>(records: &[C]) -> Result<String> {
    serde_json::to_string(records).map_err(|e| RegistryError::Serde(e.to_string()))
}

/// Parse a stored collection.
pub fn decode<C: Collection>(raw: &str) -> Result<Vec<C>> {
    serde_json::from_str(raw).map_err(|e| RegistryError::Serde(e.to_string()))
}

/// Loads collections at startup and writes them back after every mutation.
///
/// Writes are unconditional and synchronous. There is no versioning and no
/// migration: a stored value that fails to parse is replaced in memory by the
/// collection's seed for this session, and stays as-is in the store until the
/// next successful write.
#[derive(Clone, Debug)]
pub struct Synchronizer<S> {
    store: S,
}

impl<S: KeyValueStore> Synchronizer<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Load a collection, falling back to its seed when the key is absent,
    /// unreadable or malformed. Failures are logged, never returned.
    pub fn load<C: Collection>(&self) -> Vec<C> {
        match self.store.get(C::KEY) {
            Ok(Some(raw)) => match decode::<C>(&raw) {
                Ok(records) => {
                    info!(key = C::KEY, records = records.len(), "loaded collection");
                    records
                }
                Err(err) => {
                    warn!(key = C::KEY, error = %err, "stored collection is malformed, using seed");
                    C::seed()
                }
            },
            Ok(None) => {
                debug!(key = C::KEY, "no stored collection, using seed");
                C::seed()
            }
            Err(err) => {
                warn!(key = C::KEY, error = %err, "failed to read collection, using seed");
                C::seed()
            }
        }
    }

    /// Serialize and write the whole collection under its key.
    pub fn persist<C: Collection>(&self, records: &[C]) -> Result<()> {
        let raw = encode(records)?;
        self.store.set(C::KEY, &raw)?;
        debug!(key = C::KEY, records = records.len(), "persisted collection");
        Ok(())
    }

    /// Persist `next` and, only once the write succeeded, make it the current
    /// collection. On failure `current` is left untouched.
    pub fn commit<C: Collection>(&self, current: &mut Vec<C>, next: Vec<C>) -> Result<()> {
        self.persist(&next)?;
        *current = next;
        Ok(())
    }
}
