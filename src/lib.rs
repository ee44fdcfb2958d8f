//! Merchant vessel registry.
//!
//! Vessels with their inspection history, surveyors, ship exemptions and
//! the port state control performance of classification societies. Each collection is held
//! in a [`Workspace`] and written back whole to a [`KeyValueStore`] after
//! every change. Vessel data and class analyses come from an external
//! [`AnalysisGateway`].

extern crate self as vessel_registry;

mod classes;
mod clock;
mod collection;
mod config;
mod confirm;
mod error;
mod exemptions;
mod gateway;
mod letter;
mod models;
mod registry;
mod session;
mod stats;
mod store;
mod surveyors;
mod workspace;

pub use classes::{ClassAdded, ClassTracker, RefreshOutcome, RefreshTicket, PENDING_REASON};
pub use clock::{Clock, IdGenerator, SystemClock};
pub use collection::{decode, encode, Collection, Synchronizer};
pub use config::{ConfigError, RegistryConfig};
pub use confirm::{AutoConfirm, Confirm, PromptConfirm};
pub use error::{RegistryError, Result};
pub use exemptions::ExemptionRegister;
pub use gateway::{
    class_analysis, class_analysis_prompt, extract_json, vessel_candidate, vessel_search_prompt,
    AnalysisGateway, GatewayError,
};
#[cfg(feature = "gemini")]
pub use gateway::GeminiGateway;
pub use letter::{LetterDraft, LETTER_SUBJECT};
pub use models::{
    default_exemptions, default_societies, ClassAnalysis, ClassSocietyData, Exemption, Inspection,
    ListStatus, NewExemption, NewInspection, NewSurveyor, PscPerformance, ReliefStatus,
    ReliefType, SanctionStatus, Surveyor, Trend, Vessel, VesselCandidate,
};
pub use registry::VesselRegistry;
pub use session::{SessionError, SessionGate, AUTH_KEY, FALLBACK_SECRETS, SECRET_KEY};
pub use stats::{FlagCount, RegistryStats};
pub use store::{FileStore, InMemoryStore, KeyValueStore, StoreError};
pub use surveyors::SurveyorDirectory;
pub use workspace::{AppState, Workspace};

// Derive macro for `Collection`, emitted against `::vessel_registry`.
pub use vessel_registry_macros::Collection;
