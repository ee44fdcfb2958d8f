use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::Collection;

/// Sanction screening outcome recorded at registration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SanctionStatus {
    #[default]
    Clean,
    Sanctioned,
}

/// A registered merchant vessel and the inspections carried out on it.
///
/// Keyed by IMO number. Inspections are embedded so that a vessel and its
/// inspection history are always written and deleted as one unit.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, Collection)]
#[serde(default, rename_all = "camelCase")]
#[collection(key = "maj_ships_db")]
pub struct Vessel {
    #[collection(id)]
    pub id: String,
    pub name: String,
    pub imo: String,
    pub gross_tonnage: u64,
    pub year_built: String,
    pub vessel_type: String,
    pub flag: String,
    pub length_overall: String,
    pub beam: String,
    pub draft: String,
    pub builder: String,
    pub current_location: String,
    pub classification_society: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_society_url: Option<String>,
    pub sanction_status: SanctionStatus,
    pub sanction_details: String,
    pub last_survey_date: String,
    pub certificate_status: String,
    pub registration_date: DateTime<Utc>,
    pub inspections: Vec<Inspection>,
}

impl Vessel {
    /// Build a freshly registered vessel from a lookup candidate.
    pub fn from_candidate(candidate: VesselCandidate, registered_at: DateTime<Utc>) -> Self {
        let class_society_url = Some(candidate.class_society_url)
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty());

        Self {
            id: candidate.imo.clone(),
            name: candidate.name,
            imo: candidate.imo,
            gross_tonnage: candidate.gross_tonnage,
            year_built: candidate.year_built,
            vessel_type: candidate.vessel_type,
            flag: candidate.flag,
            length_overall: candidate.length_overall,
            beam: candidate.beam,
            draft: candidate.draft,
            builder: candidate.builder,
            current_location: candidate.location,
            classification_society: candidate.class_society,
            class_society_url,
            sanction_status: if candidate.is_sanctioned {
                SanctionStatus::Sanctioned
            } else {
                SanctionStatus::Clean
            },
            sanction_details: candidate.sanction_info,
            last_survey_date: candidate.last_survey_date,
            certificate_status: candidate.certificate_status,
            registration_date: registered_at,
            inspections: Vec::new(),
        }
    }

    pub fn is_sanctioned(&self) -> bool {
        self.sanction_status == SanctionStatus::Sanctioned
    }

    /// Number of inspections that ended in detention.
    pub fn detentions(&self) -> usize {
        self.inspections.iter().filter(|i| i.detained).count()
    }

    pub fn total_deficiencies(&self) -> u64 {
        self.inspections
            .iter()
            .map(|i| u64::from(i.deficiencies_found))
            .sum()
    }
}

/// One inspection of a vessel. Never edited after creation.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Inspection {
    pub id: String,
    pub date: DateTime<Utc>,
    pub inspector_name: String,
    pub location: String,
    pub deficiencies_found: u32,
    pub detained: bool,
    pub comments: String,
}

/// Fields supplied when recording an inspection.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NewInspection {
    pub inspector_name: String,
    pub location: String,
    pub deficiencies_found: u32,
    pub detained: bool,
    pub comments: String,
}

/// Provisional vessel data returned by a vessel lookup, not yet registered.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VesselCandidate {
    pub name: String,
    pub imo: String,
    pub gross_tonnage: u64,
    pub year_built: String,
    #[serde(rename = "type")]
    pub vessel_type: String,
    pub flag: String,
    pub length_overall: String,
    pub beam: String,
    pub draft: String,
    pub builder: String,
    pub location: String,
    pub class_society: String,
    pub class_society_url: String,
    pub sanction_info: String,
    pub is_sanctioned: bool,
    pub last_survey_date: String,
    pub certificate_status: String,
    pub description: String,
}
