use thiserror::Error;

use crate::gateway::GatewayError;
use crate::store::StoreError;

/// Result alias for registry operations.
pub type Result<T> = std::result::Result<T, RegistryError>;

/// Errors surfaced by the registry components.
///
/// Every variant is raised before the in-memory collections are touched, so
/// a failed operation always leaves the workspace in its previous state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// A required field was missing or empty.
    #[error("validation failed: {0}")]
    Validation(String),

    /// A vessel with the same IMO number is already registered.
    #[error("vessel with IMO {0} is already registered")]
    DuplicateImo(String),

    #[error("{collection} record not found: {id}")]
    NotFound {
        collection: &'static str,
        id: String,
    },

    /// An inspection was requested while no vessel is selected.
    #[error("no vessel is selected")]
    NoSelection,

    #[error("selected vessel {selected} does not match requested vessel {requested}")]
    SelectionMismatch { selected: String, requested: String },

    #[error("collection serialization error: {0}")]
    Serde(String),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Gateway(#[from] GatewayError),
}
