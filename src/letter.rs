//! Authorization letter draft.
//!
//! A letter pairs a surveyor with an optional vessel while it is being
//! prepared. The pairing is never persisted.

use crate::models::Vessel;

pub const LETTER_SUBJECT: &str = "AUTHORIZATION TO CONDUCT FLAG STATE INSPECTION";

/// Transient target of the authorization letter view.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LetterDraft {
    surveyor_id: Option<String>,
    vessel_id: Option<String>,
}

impl LetterDraft {
    pub fn surveyor_id(&self) -> Option<&str> {
        self.surveyor_id.as_deref()
    }

    pub fn vessel_id(&self) -> Option<&str> {
        self.vessel_id.as_deref()
    }

    pub fn is_open(&self) -> bool {
        self.surveyor_id.is_some()
    }

    pub(crate) fn open(&mut self, surveyor_id: String) {
        self.surveyor_id = Some(surveyor_id);
    }

    pub(crate) fn set_vessel(&mut self, vessel_id: Option<String>) {
        self.vessel_id = vessel_id;
    }

    pub(crate) fn clear_surveyor(&mut self) {
        self.surveyor_id = None;
    }

    pub(crate) fn clear(&mut self) {
        self.surveyor_id = None;
        self.vessel_id = None;
    }

    /// Subject line, naming the vessel when it resolves in `vessels`.
    pub fn subject(&self, vessels: &[Vessel], prefix: &str) -> String {
        let vessel = self
            .vessel_id
            .as_deref()
            .and_then(|id| vessels.iter().find(|v| v.id == id));

        match vessel {
            Some(v) => format!("{}{} - MV {} (IMO: {})", prefix, LETTER_SUBJECT, v.name, v.imo),
            None => format!("{}{}", prefix, LETTER_SUBJECT),
        }
    }
}
