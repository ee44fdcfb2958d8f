//! Surveyor directory - add, remove and letter targeting.

use tracing::{debug, info};

use crate::collection::Collection;
use crate::confirm::Confirm;
use crate::error::{RegistryError, Result};
use crate::models::{NewSurveyor, Surveyor, Vessel};
use crate::store::KeyValueStore;
use crate::workspace::Workspace;

/// Operations over the surveyor collection.
///
/// Surveyors cannot be edited; to change one, delete and add it again.
pub struct SurveyorDirectory<'a, S> {
    ws: &'a mut Workspace<S>,
}

impl<'a, S: KeyValueStore> SurveyorDirectory<'a, S> {
    pub(crate) fn new(ws: &'a mut Workspace<S>) -> Self {
        Self { ws }
    }

    pub fn all(&self) -> &[Surveyor] {
        &self.ws.state.surveyors
    }

    pub fn get(&self, id: &str) -> Option<&Surveyor> {
        self.ws.state.surveyors.iter().find(|s| s.id == id)
    }

    /// Add a surveyor. Name and location are required.
    pub fn add(&mut self, input: NewSurveyor) -> Result<Surveyor> {
        let name = input.name.trim();
        let location = input.location.trim();
        if name.is_empty() || location.is_empty() {
            return Err(RegistryError::Validation(
                "surveyor name and location are required".into(),
            ));
        }

        let (id, _) = self.ws.stamp();
        let surveyor = Surveyor {
            id,
            name: name.to_string(),
            location: location.to_string(),
            email: input.email.trim().to_string(),
            phone: input.phone.trim().to_string(),
            company: input.company.trim().to_string(),
        };

        let ws = &mut *self.ws;
        let mut next = ws.state.surveyors.clone();
        next.push(surveyor.clone());
        ws.sync.commit(&mut ws.state.surveyors, next)?;

        info!(id = %surveyor.id, name = %surveyor.name, "surveyor added");
        Ok(surveyor)
    }

    /// Remove a surveyor. An open letter addressed to them loses its target.
    ///
    /// Returns false if the confirmation was declined.
    pub fn delete(&mut self, id: &str, confirm: &mut impl Confirm) -> Result<bool> {
        let surveyor = self.get(id).ok_or_else(|| RegistryError::NotFound {
            collection: Surveyor::KEY,
            id: id.to_string(),
        })?;

        let message = format!("Are you sure you want to remove surveyor {}?", surveyor.name);
        if !confirm.confirm(&message) {
            debug!(id, "surveyor removal declined");
            return Ok(false);
        }

        let ws = &mut *self.ws;
        let next = ws
            .state
            .surveyors
            .iter()
            .filter(|s| s.id != id)
            .cloned()
            .collect();
        ws.sync.commit(&mut ws.state.surveyors, next)?;

        if ws.state.letter.surveyor_id() == Some(id) {
            ws.state.letter.clear_surveyor();
        }

        info!(id, "surveyor removed");
        Ok(true)
    }

    /// Start an authorization letter addressed to `surveyor_id`.
    pub fn open_letter(&mut self, surveyor_id: &str) -> Result<()> {
        if self.get(surveyor_id).is_none() {
            return Err(RegistryError::NotFound {
                collection: Surveyor::KEY,
                id: surveyor_id.to_string(),
            });
        }
        self.ws.state.letter.open(surveyor_id.to_string());
        Ok(())
    }

    /// Choose the vessel named in the letter, or none for a general letter.
    pub fn set_letter_vessel(&mut self, vessel_id: Option<&str>) -> Result<()> {
        if let Some(id) = vessel_id {
            if !self.ws.state.vessels.iter().any(|v| v.id == id) {
                return Err(RegistryError::NotFound {
                    collection: Vessel::KEY,
                    id: id.to_string(),
                });
            }
        }
        self.ws.state.letter.set_vessel(vessel_id.map(str::to_string));
        Ok(())
    }

    pub fn close_letter(&mut self) {
        self.ws.state.letter.clear();
    }
}
