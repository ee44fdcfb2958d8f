//! Coercion of untrusted gateway JSON into typed records.
//!
//! Field presence and types are not trusted. Scalars are coerced where the
//! intent is clear (numbers given as strings, booleans as "yes"/"true");
//! a reply missing a required field is rejected as a whole.

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use tracing::warn;

use crate::models::{ClassAnalysis, PscPerformance, Trend, VesselCandidate};

/// Largest gross tonnage accepted from a reply. The biggest hulls afloat are
/// well under half of this.
const MAX_GROSS_TONNAGE: u64 = 1_000_000;

/// Coerce a vessel search reply. Requires non-empty `name` and `imo`.
pub fn vessel_candidate(value: &Value) -> Option<VesselCandidate> {
    let Some(obj) = value.as_object() else {
        warn!("vessel search reply is not a JSON object");
        return None;
    };

    let name = text(obj, "name");
    let imo = text(obj, "imo");
    if name.is_empty() || imo.is_empty() {
        warn!(name = %name, imo = %imo, "vessel search reply is missing name or imo");
        return None;
    }

    Some(VesselCandidate {
        name,
        imo,
        gross_tonnage: tonnage(obj, "grossTonnage"),
        year_built: text(obj, "yearBuilt"),
        vessel_type: text(obj, "type"),
        flag: text(obj, "flag"),
        length_overall: text(obj, "lengthOverall"),
        beam: text(obj, "beam"),
        draft: text(obj, "draft"),
        builder: text(obj, "builder"),
        location: text(obj, "location"),
        class_society: text(obj, "classSociety"),
        class_society_url: text(obj, "classSocietyUrl"),
        sanction_info: text(obj, "sanctionInfo"),
        is_sanctioned: flag(obj, "isSanctioned"),
        last_survey_date: text(obj, "lastSurveyDate"),
        certificate_status: text(obj, "certificateStatus"),
        description: text(obj, "description"),
    })
}

/// Coerce a class analysis reply. Requires a non-empty `name` and a
/// `pscData` array. Any `id` in the reply is ignored.
pub fn class_analysis(value: &Value) -> Option<ClassAnalysis> {
    let Some(obj) = value.as_object() else {
        warn!("class analysis reply is not a JSON object");
        return None;
    };

    let name = text(obj, "name");
    if name.is_empty() {
        warn!("class analysis reply is missing name");
        return None;
    }

    let Some(entries) = obj.get("pscData").and_then(Value::as_array) else {
        warn!(name = %name, "class analysis reply is missing pscData");
        return None;
    };

    let psc_data = entries
        .iter()
        .filter_map(Value::as_object)
        .map(|entry| PscPerformance {
            regime: text(entry, "mou"),
            list_status: text(entry, "listStatus"),
            performance_level: text(entry, "performanceLevel"),
        })
        .filter(|entry| !entry.regime.is_empty())
        .collect();

    Some(ClassAnalysis {
        name,
        psc_data,
        trend: Trend::parse_lenient(&text(obj, "trend")),
        trend_reason: text(obj, "trendReason"),
        last_updated: timestamp(obj, "lastUpdated"),
    })
}

fn text(obj: &Map<String, Value>, key: &str) -> String {
    match obj.get(key) {
        Some(Value::String(s)) => s.trim().to_string(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}

fn tonnage(obj: &Map<String, Value>, key: &str) -> u64 {
    match whole_number(obj, key) {
        Some(gt) if gt > MAX_GROSS_TONNAGE => {
            warn!(gross_tonnage = gt, "discarding implausible gross tonnage");
            0
        }
        Some(gt) => gt,
        None => 0,
    }
}

fn whole_number(obj: &Map<String, Value>, key: &str) -> Option<u64> {
    match obj.get(key) {
        Some(Value::Number(n)) => n.as_u64().or_else(|| n.as_f64().and_then(non_negative)),
        Some(Value::String(s)) => {
            // "219,079 GT" -> 219079
            let digits: String = s
                .trim()
                .chars()
                .take_while(|c| c.is_ascii_digit() || *c == ',' || *c == '.')
                .filter(|c| *c != ',')
                .collect();
            digits.parse::<f64>().ok().and_then(non_negative)
        }
        _ => None,
    }
}

fn non_negative(value: f64) -> Option<u64> {
    (value.is_finite() && value >= 0.0 && value < u64::MAX as f64).then(|| value.round() as u64)
}

fn flag(obj: &Map<String, Value>, key: &str) -> bool {
    match obj.get(key) {
        Some(Value::Bool(b)) => *b,
        Some(Value::String(s)) => matches!(s.trim().to_ascii_lowercase().as_str(), "true" | "yes"),
        Some(Value::Number(n)) => n.as_f64().is_some_and(|v| v != 0.0),
        _ => false,
    }
}

fn timestamp(obj: &Map<String, Value>, key: &str) -> Option<DateTime<Utc>> {
    let raw = text(obj, key);
    DateTime::parse_from_rfc3339(&raw)
        .ok()
        .map(|t| t.with_timezone(&Utc))
}
