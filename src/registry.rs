//! Vessel registry - registration, deletion and inspections.

use tracing::{debug, info, warn};

use crate::collection::Collection;
use crate::confirm::Confirm;
use crate::error::{RegistryError, Result};
use crate::gateway::AnalysisGateway;
use crate::models::{Inspection, NewInspection, Vessel, VesselCandidate};
use crate::store::KeyValueStore;
use crate::workspace::Workspace;

/// Operations over the vessel collection.
///
/// There is no update for a registered vessel and no update or delete for a
/// single inspection; only whole-vessel deletion removes data.
pub struct VesselRegistry<'a, S> {
    ws: &'a mut Workspace<S>,
}

impl<'a, S: KeyValueStore> VesselRegistry<'a, S> {
    pub(crate) fn new(ws: &'a mut Workspace<S>) -> Self {
        Self { ws }
    }

    pub fn all(&self) -> &[Vessel] {
        &self.ws.state.vessels
    }

    pub fn get(&self, id: &str) -> Option<&Vessel> {
        self.ws.state.vessels.iter().find(|v| v.id == id)
    }

    pub fn find_by_imo(&self, imo: &str) -> Option<&Vessel> {
        self.ws.state.vessels.iter().find(|v| v.imo == imo)
    }

    pub fn selected(&self) -> Option<&Vessel> {
        self.ws.selected_vessel()
    }

    /// Look up a vessel through the gateway. Nothing is stored; the returned
    /// candidate is what `register` consumes.
    ///
    /// `Ok(None)` means the gateway had no usable data for this vessel.
    pub async fn lookup<G: AnalysisGateway>(
        &self,
        gateway: &G,
        name: &str,
        imo: &str,
    ) -> Result<Option<VesselCandidate>> {
        let (name, imo) = (name.trim(), imo.trim());
        if name.is_empty() || imo.is_empty() {
            return Err(RegistryError::Validation(
                "vessel name and IMO number are required".into(),
            ));
        }

        match gateway.search_vessel(name, imo).await {
            Ok(Some(candidate)) => Ok(Some(candidate)),
            Ok(None) => {
                info!(name, imo, "no vessel data found");
                Ok(None)
            }
            Err(err) => {
                warn!(name, imo, error = %err, "vessel lookup failed");
                Err(err.into())
            }
        }
    }

    /// Register a looked-up vessel and select it.
    ///
    /// Rejects a candidate whose IMO number is already registered; nothing
    /// is inserted in that case.
    pub fn register(&mut self, mut candidate: VesselCandidate) -> Result<Vessel> {
        candidate.imo = candidate.imo.trim().to_string();
        candidate.name = candidate.name.trim().to_string();
        if candidate.imo.is_empty() || candidate.name.is_empty() {
            return Err(RegistryError::Validation(
                "vessel name and IMO number are required".into(),
            ));
        }
        if self.find_by_imo(&candidate.imo).is_some() {
            warn!(imo = %candidate.imo, "vessel already registered");
            return Err(RegistryError::DuplicateImo(candidate.imo));
        }

        let vessel = Vessel::from_candidate(candidate, self.ws.now());

        let ws = &mut *self.ws;
        let mut next = ws.state.vessels.clone();
        next.push(vessel.clone());
        ws.sync.commit(&mut ws.state.vessels, next)?;
        ws.state.selected_vessel = Some(vessel.id.clone());

        info!(imo = %vessel.imo, name = %vessel.name, "vessel registered");
        Ok(vessel)
    }

    /// Delete a vessel and, with it, all of its inspections.
    ///
    /// Returns false if the confirmation was declined.
    pub fn delete(&mut self, id: &str, confirm: &mut impl Confirm) -> Result<bool> {
        let vessel = self.get(id).ok_or_else(|| RegistryError::NotFound {
            collection: Vessel::KEY,
            id: id.to_string(),
        })?;

        let message = format!(
            "Are you sure you want to delete the vessel {} from the registry? This action cannot be undone.",
            vessel.name
        );
        if !confirm.confirm(&message) {
            debug!(id, "vessel deletion declined");
            return Ok(false);
        }

        let ws = &mut *self.ws;
        let next = ws
            .state
            .vessels
            .iter()
            .filter(|v| v.id != id)
            .cloned()
            .collect();
        ws.sync.commit(&mut ws.state.vessels, next)?;

        if ws.state.selected_vessel.as_deref() == Some(id) {
            ws.state.selected_vessel = None;
        }
        if ws.state.letter.vessel_id() == Some(id) {
            ws.state.letter.set_vessel(None);
        }

        info!(id, "vessel deleted");
        Ok(true)
    }

    pub fn select(&mut self, id: &str) -> Result<&Vessel> {
        if self.get(id).is_none() {
            return Err(RegistryError::NotFound {
                collection: Vessel::KEY,
                id: id.to_string(),
            });
        }
        self.ws.state.selected_vessel = Some(id.to_string());
        self.selected().ok_or(RegistryError::NoSelection)
    }

    pub fn clear_selection(&mut self) {
        self.ws.state.selected_vessel = None;
    }

    /// Append an inspection to the selected vessel.
    ///
    /// `vessel_id` must be the selected vessel. No other vessel is touched,
    /// and the selection keeps pointing at the updated record.
    pub fn add_inspection(&mut self, vessel_id: &str, input: NewInspection) -> Result<Inspection> {
        match self.ws.state.selected_vessel.as_deref() {
            None => return Err(RegistryError::NoSelection),
            Some(selected) if selected != vessel_id => {
                return Err(RegistryError::SelectionMismatch {
                    selected: selected.to_string(),
                    requested: vessel_id.to_string(),
                })
            }
            Some(_) => {}
        }
        if self.get(vessel_id).is_none() {
            return Err(RegistryError::NotFound {
                collection: Vessel::KEY,
                id: vessel_id.to_string(),
            });
        }

        let (id, date) = self.ws.stamp();
        let inspection = Inspection {
            id,
            date,
            inspector_name: input.inspector_name.trim().to_string(),
            location: input.location.trim().to_string(),
            deficiencies_found: input.deficiencies_found,
            detained: input.detained,
            comments: input.comments,
        };

        let ws = &mut *self.ws;
        let next = ws
            .state
            .vessels
            .iter()
            .map(|v| {
                let mut v = v.clone();
                if v.id == vessel_id {
                    v.inspections.push(inspection.clone());
                }
                v
            })
            .collect();
        ws.sync.commit(&mut ws.state.vessels, next)?;

        info!(
            vessel = vessel_id,
            inspection = %inspection.id,
            detained = inspection.detained,
            "inspection recorded"
        );
        Ok(inspection)
    }
}
