//! Collections - whole-collection persistence for registry records.
//!
//! Each record type lives in one ordered collection that is serialized as a
//! single JSON array under a fixed key. There are no secondary indices and no
//! cross-collection transactions: every mutation rewrites exactly one key.
//!
//! ## Example
//!
//! ```ignore
//! use vessel_registry::{Collection, InMemoryStore, Synchronizer};
//!
//! #[derive(Clone, Serialize, Deserialize, Collection)]
//! #[collection(key = "maj_surveyors_db")]
//! struct Surveyor {
//!     #[collection(id)]
//!     pub id: String,
//!     pub name: String,
//! }
//!
//! let sync = Synchronizer::new(InMemoryStore::new());
//! let mut surveyors: Vec<Surveyor> = sync.load();
//! let mut next = surveyors.clone();
//! next.push(surveyor);
//! sync.commit(&mut surveyors, next)?;
//! ```

mod synchronizer;

use serde::{de::DeserializeOwned, Serialize};

/// Trait for record types persisted as a whole collection.
pub trait Collection: Serialize + DeserializeOwned + Clone + Send + Sync {
    /// The fixed store key the whole collection is written under.
    const KEY: &'static str;

    /// Returns the identifier of this record within its collection.
    fn id(&self) -> &str;

    /// Records to start with when nothing usable is stored.
    fn seed() -> Vec<Self> {
        Vec::new()
    }
}

pub use synchronizer::{decode, encode, Synchronizer};
