use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::Collection;

/// Kind of statutory relief granted to a ship.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReliefType {
    #[default]
    Exemption,
    Extension,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReliefStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
    Expired,
}

/// An exemption or extension granted to a named ship.
///
/// The ship is identified by name and IMO number as entered; it need not be
/// in the vessel registry. Validity dates are stored as `YYYY-MM-DD`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, Collection)]
#[serde(default, rename_all = "camelCase")]
#[collection(key = "maj_exemptions_db", seed = default_exemptions)]
pub struct Exemption {
    pub id: String,
    pub vessel_name: String,
    pub imo_number: String,
    #[serde(rename = "type")]
    pub relief_type: ReliefType,
    pub description: String,
    pub valid_from: Option<NaiveDate>,
    pub valid_to: Option<NaiveDate>,
    pub status: ReliefStatus,
    pub remarks: String,
}

impl Exemption {
    /// True if the record is approved and `day` falls inside its validity.
    /// An open end counts as unbounded.
    pub fn in_force_on(&self, day: NaiveDate) -> bool {
        self.status == ReliefStatus::Approved
            && self.valid_from.map_or(true, |from| from <= day)
            && self.valid_to.map_or(true, |to| day <= to)
    }
}

/// Fields supplied when recording or editing an exemption.
///
/// Vessel name, IMO number and description are required.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NewExemption {
    pub vessel_name: String,
    pub imo_number: String,
    pub relief_type: ReliefType,
    pub description: String,
    pub valid_from: Option<NaiveDate>,
    pub valid_to: Option<NaiveDate>,
    pub status: ReliefStatus,
    pub remarks: String,
}

impl NewExemption {
    pub fn new(
        vessel_name: impl Into<String>,
        imo_number: impl Into<String>,
        relief_type: ReliefType,
        description: impl Into<String>,
    ) -> Self {
        Self {
            vessel_name: vessel_name.into(),
            imo_number: imo_number.into(),
            relief_type,
            description: description.into(),
            ..Default::default()
        }
    }

    pub fn valid(mut self, from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        self.valid_from = from;
        self.valid_to = to;
        self
    }

    pub fn status(mut self, status: ReliefStatus) -> Self {
        self.status = status;
        self
    }

    pub fn remarks(mut self, remarks: impl Into<String>) -> Self {
        self.remarks = remarks.into();
        self
    }
}

/// The register as first opened, before anything has been stored.
pub fn default_exemptions() -> Vec<Exemption> {
    vec![
        Exemption {
            id: "1".into(),
            vessel_name: "Caribbean Queen".into(),
            imo_number: "9876543".into(),
            relief_type: ReliefType::Exemption,
            description: "Exemption from carriage of fast rescue boat due to limited service area around Jamaica.".into(),
            valid_from: NaiveDate::from_ymd_opt(2025, 1, 1),
            valid_to: NaiveDate::from_ymd_opt(2026, 1, 1),
            status: ReliefStatus::Approved,
            remarks: "Subject to annual verification.".into(),
        },
        Exemption {
            id: "2".into(),
            vessel_name: "Kingston Star".into(),
            imo_number: "8765432".into(),
            relief_type: ReliefType::Extension,
            description: "Dry dock / load line extension to allow voyage to approved yard.".into(),
            valid_from: NaiveDate::from_ymd_opt(2024, 11, 15),
            valid_to: NaiveDate::from_ymd_opt(2025, 2, 15),
            status: ReliefStatus::Approved,
            remarks: "PSC to be informed if trading outside Caribbean.".into(),
        },
    ]
}
