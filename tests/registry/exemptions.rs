use std::sync::Arc;

use chrono::NaiveDate;
use vessel_registry::{
    decode, AutoConfirm, Collection, Exemption, FileStore, InMemoryStore, KeyValueStore,
    NewExemption, RegistryError, ReliefStatus, ReliefType, Workspace,
};

use crate::support::SteppingClock;

fn workspace() -> (InMemoryStore, Workspace<InMemoryStore>) {
    let store = InMemoryStore::new();
    let ws = Workspace::with_clock(store.clone(), Arc::new(SteppingClock::default()));
    (store, ws)
}

fn date(raw: &str) -> Option<NaiveDate> {
    Some(raw.parse().unwrap())
}

fn rescue_boat_exemption() -> NewExemption {
    NewExemption::new(
        "Blue Marlin",
        "9100001",
        ReliefType::Exemption,
        "Exemption from carriage of fast rescue boat",
    )
    .valid(date("2025-04-01"), date("2026-03-31"))
    .remarks("Domestic voyages only")
}

#[test]
fn seeded_register_is_not_written_until_changed() {
    let (store, mut ws) = workspace();
    let names: Vec<_> = ws
        .exemptions()
        .all()
        .iter()
        .map(|e| e.vessel_name.clone())
        .collect();
    assert_eq!(names, vec!["Caribbean Queen", "Kingston Star"]);
    assert!(store.get(Exemption::KEY).unwrap().is_none());
}

#[test]
fn add_persists_newest_first() {
    let (store, mut ws) = workspace();

    let record = ws.exemptions().add(rescue_boat_exemption()).unwrap();
    assert_eq!(record.status, ReliefStatus::Pending);
    assert_eq!(record.remarks, "Domestic voyages only");

    let raw = store.get(Exemption::KEY).unwrap().unwrap();
    let stored: Vec<Exemption> = decode(&raw).unwrap();
    let ids: Vec<_> = stored.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec![record.id.as_str(), "1", "2"]);

    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value[0]["type"], "Exemption");
    assert_eq!(value[0]["validTo"], "2026-03-31");
}

#[test]
fn add_rejects_missing_fields_and_reversed_dates() {
    let (store, mut ws) = workspace();

    let err = ws
        .exemptions()
        .add(NewExemption::new("Blue Marlin", "", ReliefType::Extension, "Dry dock"))
        .unwrap_err();
    assert!(matches!(err, RegistryError::Validation(_)));

    let reversed = rescue_boat_exemption().valid(date("2026-01-01"), date("2025-01-01"));
    let err = ws.exemptions().add(reversed).unwrap_err();
    assert!(matches!(err, RegistryError::Validation(_)));

    assert_eq!(ws.state().exemptions.len(), 2);
    assert!(store.get(Exemption::KEY).unwrap().is_none());
}

#[test]
fn update_keeps_id_and_position() {
    let (_, mut ws) = workspace();

    let edited = NewExemption::new(
        "Kingston Star",
        "8765432",
        ReliefType::Extension,
        "Dry dock / load line extension to allow voyage to approved yard.",
    )
    .valid(date("2024-11-15"), date("2025-02-15"))
    .status(ReliefStatus::Expired);
    let record = ws.exemptions().update("2", edited).unwrap();

    assert_eq!(record.id, "2");
    assert_eq!(record.status, ReliefStatus::Expired);
    assert_eq!(record.remarks, "");
    assert_eq!(ws.state().exemptions[1], record);
    assert_eq!(ws.exemptions().get("1").unwrap().status, ReliefStatus::Approved);
}

#[test]
fn rejected_update_changes_nothing() {
    let (_, mut ws) = workspace();
    let before = ws.state().exemptions.clone();

    let reversed = rescue_boat_exemption().valid(date("2026-01-01"), date("2025-01-01"));
    let err = ws.exemptions().update("1", reversed).unwrap_err();

    assert!(matches!(err, RegistryError::Validation(_)));
    assert_eq!(ws.state().exemptions, before);
}

#[test]
fn delete_asks_first() {
    let (_, mut ws) = workspace();

    let mut prompts = Vec::new();
    let deleted = ws
        .exemptions()
        .delete("1", &mut |message: &str| {
            prompts.push(message.to_string());
            false
        })
        .unwrap();
    assert!(!deleted);
    assert_eq!(prompts, vec!["Delete this exemption/extension record?"]);
    assert!(ws.exemptions().get("1").is_some());

    assert!(ws.exemptions().delete("1", &mut AutoConfirm(true)).unwrap());
    assert!(ws.exemptions().get("1").is_none());

    let err = ws.exemptions().delete("1", &mut AutoConfirm(true)).unwrap_err();
    assert!(matches!(err, RegistryError::NotFound { .. }));
}

#[test]
fn register_reopens_from_disk() {
    let dir = tempfile::tempdir().unwrap();

    let added = {
        let mut ws = Workspace::open(FileStore::open(dir.path()).unwrap());
        ws.exemptions().delete("2", &mut AutoConfirm(true)).unwrap();
        ws.exemptions().add(rescue_boat_exemption()).unwrap()
    };

    let mut ws = Workspace::open(FileStore::open(dir.path()).unwrap());
    let ids: Vec<_> = ws.exemptions().all().iter().map(|e| e.id.clone()).collect();
    assert_eq!(ids, vec![added.id.clone(), "1".to_string()]);
    assert_eq!(ws.exemptions().get(&added.id), Some(&added));
}
