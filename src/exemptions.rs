//! Register of ship exemptions and extensions.

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::collection::Collection;
use crate::confirm::Confirm;
use crate::error::{RegistryError, Result};
use crate::models::{Exemption, NewExemption};
use crate::store::KeyValueStore;
use crate::workspace::Workspace;

/// Operations over the exemption collection. Newest records come first.
pub struct ExemptionRegister<'a, S> {
    ws: &'a mut Workspace<S>,
}

impl<'a, S: KeyValueStore> ExemptionRegister<'a, S> {
    pub(crate) fn new(ws: &'a mut Workspace<S>) -> Self {
        Self { ws }
    }

    pub fn all(&self) -> &[Exemption] {
        &self.ws.state.exemptions
    }

    pub fn get(&self, id: &str) -> Option<&Exemption> {
        self.ws.state.exemptions.iter().find(|e| e.id == id)
    }

    /// Approved records valid on `day`.
    pub fn in_force_on(&self, day: NaiveDate) -> Vec<&Exemption> {
        self.ws
            .state
            .exemptions
            .iter()
            .filter(|e| e.in_force_on(day))
            .collect()
    }

    /// Record a new exemption or extension at the top of the register.
    pub fn add(&mut self, input: NewExemption) -> Result<Exemption> {
        let (id, _) = self.ws.stamp();
        let record = build(id, input)?;

        let ws = &mut *self.ws;
        let mut next = Vec::with_capacity(ws.state.exemptions.len() + 1);
        next.push(record.clone());
        next.extend(ws.state.exemptions.iter().cloned());
        ws.sync.commit(&mut ws.state.exemptions, next)?;

        info!(
            id = %record.id,
            vessel = %record.vessel_name,
            kind = ?record.relief_type,
            "exemption recorded"
        );
        Ok(record)
    }

    /// Replace every field of record `id` but the id itself.
    pub fn update(&mut self, id: &str, input: NewExemption) -> Result<Exemption> {
        if self.get(id).is_none() {
            return Err(not_found(id));
        }
        let record = build(id.to_string(), input)?;

        let ws = &mut *self.ws;
        let next = ws
            .state
            .exemptions
            .iter()
            .map(|e| if e.id == id { record.clone() } else { e.clone() })
            .collect();
        ws.sync.commit(&mut ws.state.exemptions, next)?;

        info!(id, status = ?record.status, "exemption updated");
        Ok(record)
    }

    /// Delete a record. Returns false if the confirmation was declined.
    pub fn delete(&mut self, id: &str, confirm: &mut impl Confirm) -> Result<bool> {
        if self.get(id).is_none() {
            return Err(not_found(id));
        }

        if !confirm.confirm("Delete this exemption/extension record?") {
            debug!(id, "exemption deletion declined");
            return Ok(false);
        }

        let ws = &mut *self.ws;
        let next = ws
            .state
            .exemptions
            .iter()
            .filter(|e| e.id != id)
            .cloned()
            .collect();
        ws.sync.commit(&mut ws.state.exemptions, next)?;

        info!(id, "exemption deleted");
        Ok(true)
    }
}

fn build(id: String, input: NewExemption) -> Result<Exemption> {
    let vessel_name = input.vessel_name.trim();
    let imo_number = input.imo_number.trim();
    let description = input.description.trim();
    if vessel_name.is_empty() || imo_number.is_empty() || description.is_empty() {
        return Err(RegistryError::Validation(
            "vessel name, IMO number and description are required".into(),
        ));
    }
    if let (Some(from), Some(to)) = (input.valid_from, input.valid_to) {
        if from > to {
            return Err(RegistryError::Validation(format!(
                "validity starts {from} after it ends {to}"
            )));
        }
    }

    Ok(Exemption {
        id,
        vessel_name: vessel_name.to_string(),
        imo_number: imo_number.to_string(),
        relief_type: input.relief_type,
        description: description.to_string(),
        valid_from: input.valid_from,
        valid_to: input.valid_to,
        status: input.status,
        remarks: input.remarks.trim().to_string(),
    })
}

fn not_found(id: &str) -> RegistryError {
    RegistryError::NotFound {
        collection: Exemption::KEY,
        id: id.to_string(),
    }
}
