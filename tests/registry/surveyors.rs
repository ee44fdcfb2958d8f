use std::sync::Arc;

use vessel_registry::{AutoConfirm, InMemoryStore, NewSurveyor, Workspace, LETTER_SUBJECT};

use crate::support::{ever_given, SteppingClock};

fn workspace() -> Workspace<InMemoryStore> {
    Workspace::with_clock(InMemoryStore::new(), Arc::new(SteppingClock::default()))
}

#[test]
fn optional_fields_default_to_empty() {
    let mut ws = workspace();

    let plain = ws
        .surveyors()
        .add(NewSurveyor::new("A. Clarke", "Kingston"))
        .unwrap();
    assert_eq!(plain.email, "");
    assert_eq!(plain.phone, "");
    assert_eq!(plain.company, "");

    let full = ws
        .surveyors()
        .add(
            NewSurveyor::new("M. Reid", "Montego Bay")
                .email("m.reid@example.com")
                .phone("+1 876 555 0100")
                .company("Caribbean Marine Surveys"),
        )
        .unwrap();
    assert_eq!(full.company, "Caribbean Marine Surveys");
    assert_ne!(plain.id, full.id);
    assert_eq!(ws.surveyors().all(), &[plain, full]);
}

#[test]
fn deleting_targeted_surveyor_clears_letter() {
    let mut ws = workspace();
    let surveyor = ws
        .surveyors()
        .add(NewSurveyor::new("A. Clarke", "Kingston"))
        .unwrap();
    let vessel = ws.vessels().register(ever_given()).unwrap();

    ws.surveyors().open_letter(&surveyor.id).unwrap();
    ws.surveyors().set_letter_vessel(Some(vessel.id.as_str())).unwrap();
    assert_eq!(ws.letter_surveyor(), Some(&surveyor));
    assert_eq!(
        ws.letter_subject("RE: "),
        format!("RE: {LETTER_SUBJECT} - MV EVER GIVEN (IMO: 9811000)")
    );

    assert!(ws.surveyors().delete(&surveyor.id, &mut AutoConfirm(true)).unwrap());

    assert!(ws.letter_surveyor().is_none());
    assert!(!ws.state().letter.is_open());
    assert!(ws.state().surveyors.is_empty());
}

#[test]
fn deleting_other_surveyor_keeps_letter() {
    let mut ws = workspace();
    let target = ws
        .surveyors()
        .add(NewSurveyor::new("A. Clarke", "Kingston"))
        .unwrap();
    let other = ws
        .surveyors()
        .add(NewSurveyor::new("M. Reid", "Montego Bay"))
        .unwrap();

    ws.surveyors().open_letter(&target.id).unwrap();
    assert!(ws.surveyors().delete(&other.id, &mut AutoConfirm(true)).unwrap());
    assert_eq!(ws.state().letter.surveyor_id(), Some(target.id.as_str()));
}

#[test]
fn declined_removal_changes_nothing() {
    let mut ws = workspace();
    let surveyor = ws
        .surveyors()
        .add(NewSurveyor::new("A. Clarke", "Kingston"))
        .unwrap();
    ws.surveyors().open_letter(&surveyor.id).unwrap();

    assert!(!ws.surveyors().delete(&surveyor.id, &mut AutoConfirm(false)).unwrap());
    assert_eq!(ws.state().surveyors.len(), 1);
    assert!(ws.state().letter.is_open());
}

#[test]
fn deleting_letter_vessel_falls_back_to_general_subject() {
    let mut ws = workspace();
    let surveyor = ws
        .surveyors()
        .add(NewSurveyor::new("A. Clarke", "Kingston"))
        .unwrap();
    let vessel = ws.vessels().register(ever_given()).unwrap();
    ws.surveyors().open_letter(&surveyor.id).unwrap();
    ws.surveyors().set_letter_vessel(Some(vessel.id.as_str())).unwrap();

    assert!(ws.vessels().delete(&vessel.id, &mut AutoConfirm(true)).unwrap());

    assert_eq!(ws.state().letter.vessel_id(), None);
    assert_eq!(ws.letter_subject(""), LETTER_SUBJECT);
}
