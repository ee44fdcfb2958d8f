//! Workspace - the application state and the store it is mirrored to.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::info;

use crate::classes::{ClassTracker, RefreshLedger};
use crate::clock::{Clock, IdGenerator, SystemClock};
use crate::collection::Synchronizer;
use crate::exemptions::ExemptionRegister;
use crate::letter::LetterDraft;
use crate::models::{ClassSocietyData, Exemption, Surveyor, Vessel};
use crate::registry::VesselRegistry;
use crate::stats::RegistryStats;
use crate::store::KeyValueStore;
use crate::surveyors::SurveyorDirectory;

/// Everything the registry holds for one session.
///
/// The four collections are persisted; the selection and the letter draft
/// are transient and start empty on every open.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppState {
    pub vessels: Vec<Vessel>,
    pub surveyors: Vec<Surveyor>,
    pub classes: Vec<ClassSocietyData>,
    pub exemptions: Vec<Exemption>,
    /// Id of the currently selected vessel.
    pub selected_vessel: Option<String>,
    pub letter: LetterDraft,
}

/// Application state plus the synchronizer that persists it.
///
/// Components borrow the workspace mutably for the duration of an operation:
///
/// ```ignore
/// let mut ws = Workspace::open(FileStore::open("./registry_data")?);
/// let vessel = ws.vessels().register(candidate)?;
/// ws.surveyors().add(NewSurveyor::new("A. Clarke", "Kingston"))?;
/// ```
pub struct Workspace<S> {
    pub(crate) sync: Synchronizer<S>,
    pub(crate) state: AppState,
    pub(crate) refreshes: RefreshLedger,
    clock: Arc<dyn Clock>,
    ids: IdGenerator,
}

impl<S: KeyValueStore> Workspace<S> {
    /// Load every collection from `store`.
    pub fn open(store: S) -> Self {
        Self::with_clock(store, Arc::new(SystemClock))
    }

    pub fn with_clock(store: S, clock: Arc<dyn Clock>) -> Self {
        let sync = Synchronizer::new(store);
        let state = AppState {
            vessels: sync.load(),
            surveyors: sync.load(),
            classes: sync.load(),
            exemptions: sync.load(),
            selected_vessel: None,
            letter: LetterDraft::default(),
        };

        info!(
            vessels = state.vessels.len(),
            surveyors = state.surveyors.len(),
            classes = state.classes.len(),
            exemptions = state.exemptions.len(),
            "workspace opened"
        );

        Self {
            sync,
            state,
            refreshes: RefreshLedger::default(),
            clock,
            ids: IdGenerator::new(),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn store(&self) -> &S {
        self.sync.store()
    }

    pub fn vessels(&mut self) -> VesselRegistry<'_, S> {
        VesselRegistry::new(self)
    }

    pub fn surveyors(&mut self) -> SurveyorDirectory<'_, S> {
        SurveyorDirectory::new(self)
    }

    pub fn classes(&mut self) -> ClassTracker<'_, S> {
        ClassTracker::new(self)
    }

    pub fn exemptions(&mut self) -> ExemptionRegister<'_, S> {
        ExemptionRegister::new(self)
    }

    /// The selected vessel, resolved from the current collection.
    pub fn selected_vessel(&self) -> Option<&Vessel> {
        let id = self.state.selected_vessel.as_deref()?;
        self.state.vessels.iter().find(|v| v.id == id)
    }

    /// Surveyor targeted by the open authorization letter, if any.
    pub fn letter_surveyor(&self) -> Option<&Surveyor> {
        let id = self.state.letter.surveyor_id()?;
        self.state.surveyors.iter().find(|s| s.id == id)
    }

    pub fn letter_subject(&self, prefix: &str) -> String {
        self.state.letter.subject(&self.state.vessels, prefix)
    }

    pub fn stats(&self) -> RegistryStats {
        RegistryStats::from_vessels(&self.state.vessels)
    }

    /// True while at least one class refresh is outstanding.
    pub fn is_analyzing(&self) -> bool {
        self.refreshes.in_flight() > 0
    }

    pub(crate) fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    /// A fresh record id and the instant it was taken from.
    pub(crate) fn stamp(&mut self) -> (String, DateTime<Utc>) {
        let now = self.clock.now();
        (self.ids.next_id(now), now)
    }
}
