use std::sync::Arc;

use vessel_registry::{
    decode, default_societies, encode, AutoConfirm, ClassSocietyData, Collection, FileStore,
    InMemoryStore, KeyValueStore, NewInspection, NewSurveyor, RegistryError, StoreError,
    Surveyor, Vessel, Workspace,
};

use crate::support::{candidate, ever_given, SteppingClock};

fn roundtrip<C: Collection + PartialEq + std::fmt::Debug>(records: Vec<C>) {
    let raw = encode(&records).unwrap();
    let back: Vec<C> = decode(&raw).unwrap();
    assert_eq!(back, records);
}

#[test]
fn collections_survive_serialization() {
    let mut ws = Workspace::with_clock(InMemoryStore::new(), Arc::new(SteppingClock::default()));
    let vessel = ws.vessels().register(ever_given()).unwrap();
    ws.vessels()
        .add_inspection(
            &vessel.id,
            NewInspection {
                inspector_name: "J. Brown".into(),
                detained: true,
                ..Default::default()
            },
        )
        .unwrap();
    ws.surveyors()
        .add(NewSurveyor::new("A. Clarke", "Kingston").email("a@example.com"))
        .unwrap();

    roundtrip(ws.state().vessels.clone());
    roundtrip(ws.state().surveyors.clone());
    roundtrip(ws.state().classes.clone());
    roundtrip(Vec::<Vessel>::new());
    roundtrip(Vec::<Surveyor>::new());
    roundtrip(Vec::<ClassSocietyData>::new());
}

#[test]
fn stored_shape_uses_camel_case_field_names() {
    let store = InMemoryStore::new();
    let mut ws = Workspace::open(store.clone());
    let vessel = ws.vessels().register(ever_given()).unwrap();
    ws.vessels()
        .add_inspection(&vessel.id, NewInspection::default())
        .unwrap();

    let raw = store.get(Vessel::KEY).unwrap().unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let stored = &value[0];
    assert_eq!(stored["grossTonnage"], 219079);
    assert_eq!(stored["sanctionStatus"], "Clean");
    assert_eq!(stored["inspections"][0]["deficienciesFound"], 0);
    assert!(stored.get("classSocietyUrl").is_none());
}

#[test]
fn workspace_reopens_from_disk() {
    let dir = tempfile::tempdir().unwrap();

    let vessel_id = {
        let mut ws = Workspace::open(FileStore::open(dir.path()).unwrap());
        let vessel = ws.vessels().register(ever_given()).unwrap();
        ws.surveyors()
            .add(NewSurveyor::new("A. Clarke", "Kingston"))
            .unwrap();
        ws.classes().delete("1", &mut AutoConfirm(true)).unwrap();
        vessel.id
    };

    let ws = Workspace::open(FileStore::open(dir.path()).unwrap());
    assert_eq!(ws.state().vessels.len(), 1);
    assert_eq!(ws.state().vessels[0].id, vessel_id);
    assert_eq!(ws.state().surveyors[0].name, "A. Clarke");
    assert_eq!(ws.state().classes.len(), 4);
    assert!(ws.selected_vessel().is_none());
    assert!(dir.path().join("maj_ships_db.json").exists());
}

#[test]
fn malformed_value_falls_back_until_next_write() {
    let store = InMemoryStore::new();
    store.set(Vessel::KEY, "{not json").unwrap();
    store.set(ClassSocietyData::KEY, "[{\"id\": 7}").unwrap();

    let mut ws = Workspace::open(store.clone());
    assert!(ws.state().vessels.is_empty());
    let names: Vec<_> = ws.state().classes.iter().map(|c| c.name.clone()).collect();
    let seeded: Vec<_> = default_societies().into_iter().map(|c| c.name).collect();
    assert_eq!(names, seeded);
    assert_eq!(store.get(Vessel::KEY).unwrap().as_deref(), Some("{not json"));

    ws.vessels().register(candidate("A", "9000001", "")).unwrap();
    let raw = store.get(Vessel::KEY).unwrap().unwrap();
    assert_eq!(decode::<Vessel>(&raw).unwrap().len(), 1);
}

/// Store whose writes always fail.
#[derive(Clone, Default)]
struct ReadOnly(InMemoryStore);

impl KeyValueStore for ReadOnly {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.0.get(key)
    }

    fn set(&self, key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::Io {
            key: key.to_string(),
            message: "read-only file system".into(),
        })
    }

    fn remove(&self, key: &str) -> Result<bool, StoreError> {
        self.0.remove(key)
    }
}

#[test]
fn failed_write_leaves_state_untouched() {
    let mut ws = Workspace::open(ReadOnly::default());

    let err = ws.vessels().register(ever_given()).unwrap_err();
    assert!(matches!(err, RegistryError::Store(StoreError::Io { .. })));
    assert!(ws.state().vessels.is_empty());
    assert!(ws.selected_vessel().is_none());

    let err = ws.classes().delete("1", &mut AutoConfirm(true)).unwrap_err();
    assert!(matches!(err, RegistryError::Store(_)));
    assert_eq!(ws.state().classes.len(), 5);
}
