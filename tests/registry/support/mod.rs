//! Test doubles for the registry integration tests.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Mutex;

use chrono::{DateTime, TimeZone, Utc};
use vessel_registry::{
    class_analysis, extract_json, vessel_candidate, AnalysisGateway, ClassAnalysis, Clock,
    GatewayError, VesselCandidate,
};

/// One scripted reply: raw model text, no text at all, or a transport error.
pub type Reply = Result<Option<String>, GatewayError>;

/// Gateway that answers from a script of raw model replies, parsed the same
/// way the HTTP gateway parses real ones. Records every request it receives.
#[derive(Default)]
pub struct ScriptedGateway {
    replies: Mutex<VecDeque<Reply>>,
    requests: Mutex<Vec<String>>,
}

impl ScriptedGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(self, text: impl Into<String>) -> Self {
        self.push(Ok(Some(text.into())))
    }

    pub fn empty(self) -> Self {
        self.push(Ok(None))
    }

    pub fn fail(self, err: GatewayError) -> Self {
        self.push(Err(err))
    }

    fn push(self, reply: Reply) -> Self {
        self.replies.lock().unwrap().push_back(reply);
        self
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    fn next(&self, request: String) -> Reply {
        self.requests.lock().unwrap().push(request);
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(GatewayError::Network("no scripted reply".into())))
    }
}

impl AnalysisGateway for ScriptedGateway {
    async fn search_vessel(
        &self,
        name: &str,
        imo: &str,
    ) -> Result<Option<VesselCandidate>, GatewayError> {
        let text = self.next(format!("vessel:{name}:{imo}"))?;
        Ok(text
            .and_then(|t| extract_json(&t))
            .and_then(|v| vessel_candidate(&v)))
    }

    async fn analyze_class(&self, name: &str) -> Result<Option<ClassAnalysis>, GatewayError> {
        let text = self.next(format!("class:{name}"))?;
        Ok(text
            .and_then(|t| extract_json(&t))
            .and_then(|v| class_analysis(&v)))
    }
}

/// Gateway whose calls never finish.
pub struct StalledGateway;

impl AnalysisGateway for StalledGateway {
    async fn search_vessel(
        &self,
        _name: &str,
        _imo: &str,
    ) -> Result<Option<VesselCandidate>, GatewayError> {
        std::future::pending().await
    }

    async fn analyze_class(&self, _name: &str) -> Result<Option<ClassAnalysis>, GatewayError> {
        std::future::pending().await
    }
}

/// Clock that advances one second on every read.
pub struct SteppingClock {
    next: AtomicI64,
}

impl SteppingClock {
    pub fn starting_at(start: DateTime<Utc>) -> Self {
        Self {
            next: AtomicI64::new(start.timestamp()),
        }
    }
}

impl Default for SteppingClock {
    fn default() -> Self {
        Self::starting_at(epoch())
    }
}

impl Clock for SteppingClock {
    fn now(&self) -> DateTime<Utc> {
        let secs = self.next.fetch_add(1, Ordering::SeqCst);
        Utc.timestamp_opt(secs, 0).single().unwrap()
    }
}

pub fn epoch() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap()
}

pub fn ever_given() -> VesselCandidate {
    VesselCandidate {
        name: "EVER GIVEN".into(),
        imo: "9811000".into(),
        gross_tonnage: 219079,
        year_built: "2018".into(),
        vessel_type: "Container Ship".into(),
        flag: "Panama".into(),
        ..Default::default()
    }
}

pub fn candidate(name: &str, imo: &str, flag: &str) -> VesselCandidate {
    VesselCandidate {
        name: name.into(),
        imo: imo.into(),
        flag: flag.into(),
        gross_tonnage: 5000,
        ..Default::default()
    }
}

pub const EVER_GIVEN_REPLY: &str = r#"Here is what I found:
```json
{
  "name": "EVER GIVEN",
  "imo": "9811000",
  "grossTonnage": "219,079",
  "yearBuilt": 2018,
  "type": "Container Ship",
  "flag": "Panama",
  "classSociety": "ABS",
  "classSocietyUrl": "",
  "sanctionInfo": "No sanctions found",
  "isSanctioned": false
}
```"#;

pub const DNV_REPLY: &str = r#"{
  "id": "gateway-assigned-42",
  "name": "DNV",
  "pscData": [
    {"mou": "Paris MoU", "listStatus": "White List", "performanceLevel": "High"},
    {"mou": "Tokyo MoU", "listStatus": "White List", "performanceLevel": "High"},
    {"mou": "USCG", "listStatus": "QUALSHIP 21", "performanceLevel": "High"}
  ],
  "trend": "Up",
  "trendReason": "Detention ratio fell below the regional average",
  "lastUpdated": "2025-02-14T00:00:00Z"
}"#;
