use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::Collection;

/// Direction of a classification society's PSC performance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Trend {
    Up,
    Down,
    #[default]
    Steady,
}

impl Trend {
    /// Lenient parse of a trend label. Anything unrecognised is `Steady`.
    pub fn parse_lenient(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "up" | "improving" | "upward" => Trend::Up,
            "down" | "declining" | "downward" => Trend::Down,
            _ => Trend::Steady,
        }
    }
}

/// Performance under one port state control regime.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PscPerformance {
    /// Regime name, e.g. "Paris MoU", "Tokyo MoU", "USCG".
    #[serde(rename = "mou")]
    pub regime: String,
    pub list_status: String,
    pub performance_level: String,
}

impl PscPerformance {
    pub fn new(
        regime: impl Into<String>,
        list_status: impl Into<String>,
        performance_level: impl Into<String>,
    ) -> Self {
        Self {
            regime: regime.into(),
            list_status: list_status.into(),
            performance_level: performance_level.into(),
        }
    }

    pub fn classification(&self) -> ListStatus {
        ListStatus::classify(&self.list_status)
    }
}

/// Coarse bucket for a free-text list status.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListStatus {
    Good,
    Caution,
    Poor,
    Unknown,
}

impl ListStatus {
    pub fn classify(status: &str) -> Self {
        let status = status.to_lowercase();
        if status.contains("white") || status.contains("qualship") || status.contains("non-targeted")
        {
            ListStatus::Good
        } else if status.contains("grey") {
            ListStatus::Caution
        } else if status.contains("black") || status.contains("targeted") {
            ListStatus::Poor
        } else {
            ListStatus::Unknown
        }
    }
}

/// Tracked PSC performance of a classification society.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, Collection)]
#[serde(default, rename_all = "camelCase")]
#[collection(key = "maj_classes_db", seed = default_societies)]
pub struct ClassSocietyData {
    pub id: String,
    pub name: String,
    pub psc_data: Vec<PscPerformance>,
    pub trend: Trend,
    pub trend_reason: String,
    pub last_updated: DateTime<Utc>,
}

impl ClassSocietyData {
    /// A record awaiting its first analysis.
    pub fn pending(
        id: impl Into<String>,
        name: impl Into<String>,
        reason: impl Into<String>,
        at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            psc_data: Vec::new(),
            trend: Trend::Steady,
            trend_reason: reason.into(),
            last_updated: at,
        }
    }

    /// First PSC entry whose regime name contains `regime`.
    pub fn performance_for(&self, regime: &str) -> Option<&PscPerformance> {
        self.psc_data.iter().find(|p| p.regime.contains(regime))
    }

    /// List status under `regime`, or "N/A" when the regime is not listed.
    pub fn status_for(&self, regime: &str) -> &str {
        self.performance_for(regime)
            .map(|p| p.list_status.as_str())
            .unwrap_or("N/A")
    }

    /// Replace every analytical field with `analysis`, keeping the id.
    pub fn apply(&mut self, analysis: ClassAnalysis, at: DateTime<Utc>) {
        self.name = analysis.name;
        self.psc_data = analysis.psc_data;
        self.trend = analysis.trend;
        self.trend_reason = analysis.trend_reason;
        self.last_updated = analysis.last_updated.unwrap_or(at);
    }
}

/// Result of an external PSC analysis. Carries no id: identity always stays
/// with the record being refreshed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClassAnalysis {
    pub name: String,
    pub psc_data: Vec<PscPerformance>,
    pub trend: Trend,
    pub trend_reason: String,
    pub last_updated: Option<DateTime<Utc>>,
}

const SEED_SOCIETIES: [(&str, &str); 5] = [
    ("1", "DNV"),
    ("2", "ABS"),
    ("3", "Lloyds Register"),
    ("4", "Bureau Veritas"),
    ("5", "ClassNK"),
];

/// The well-known societies tracked before anything has been stored.
/// Seeds are not analysed automatically.
pub fn default_societies() -> Vec<ClassSocietyData> {
    let now = Utc::now();
    SEED_SOCIETIES
        .iter()
        .map(|(id, name)| ClassSocietyData::pending(*id, *name, "Pending Analysis", now))
        .collect()
}
