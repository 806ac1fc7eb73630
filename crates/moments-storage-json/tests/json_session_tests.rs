use std::fs;

use moments_core::{FormStateMachine, SessionStore, CURRENT_STEP_KEY, FORM_DATA_KEY};
use moments_domain::{CatalogEntry, FormState};
use moments_storage_json::JsonSessionStore;
use tempfile::tempdir;

#[test]
fn entries_survive_reopening() {
    let dir = tempdir().expect("tempdir");
    let mut store = JsonSessionStore::open(dir.path().to_path_buf()).expect("open store");
    store.set_item(CURRENT_STEP_KEY, "2").expect("write step");
    assert!(store.path().exists());
    assert!(!store.path().with_extension("json.tmp").exists());

    let reopened = JsonSessionStore::open(dir.path().to_path_buf()).expect("reopen");
    assert_eq!(
        reopened.get_item(CURRENT_STEP_KEY).expect("read").as_deref(),
        Some("2")
    );
}

#[test]
fn form_session_round_trips_through_the_file() {
    let dir = tempdir().expect("tempdir");
    let store = JsonSessionStore::open(dir.path().to_path_buf()).expect("open store");
    let mut machine = FormStateMachine::new(Box::new(store));
    machine.navigate_to_step(3);
    machine.set_relationship_name(0, "Ada");
    machine.assign_relationship_type(0, &CatalogEntry::new("👩", "Mother"));
    machine.add_relationship();
    machine.set_relationship_name(1, "Grace");

    let raw = fs::read_to_string(dir.path().join("session.json")).expect("session file");
    assert!(raw.contains(FORM_DATA_KEY));

    let reopened = JsonSessionStore::open(dir.path().to_path_buf()).expect("reopen");
    let restored = FormStateMachine::restore(Box::new(reopened));
    assert_eq!(restored.current_step(), 3);
    assert_eq!(restored.data(), machine.data());
}

#[test]
fn corrupt_file_starts_a_fresh_session() {
    let dir = tempdir().expect("tempdir");
    fs::write(dir.path().join("session.json"), "not json").expect("write garbage");

    let store = JsonSessionStore::open(dir.path().to_path_buf()).expect("open store");
    let restored = FormStateMachine::restore(Box::new(store));
    assert_eq!(restored.state(), &FormState::default());
}

#[test]
fn clear_removes_the_file() {
    let dir = tempdir().expect("tempdir");
    let mut store = JsonSessionStore::open(dir.path().to_path_buf()).expect("open store");
    store.set_item(FORM_DATA_KEY, "{}").expect("write");
    store.clear().expect("clear");
    assert!(!store.path().exists());
    assert!(store.get_item(FORM_DATA_KEY).expect("read").is_none());
}
