//! Tests for the record store.

use roster_core::{RosterStore, StudentPatch, ValidationPolicy};
use roster_model::{StudentDraft, StudentId, StudentRecord};

fn make_record(id: u64, name: &str, email: &str, city: &str) -> StudentRecord {
    StudentRecord {
        id: StudentId::new(id),
        name: name.to_string(),
        email: email.to_string(),
        phone: String::new(),
        website: String::new(),
        city: city.to_string(),
        company: String::new(),
    }
}

fn make_draft(name: &str, email: &str, city: &str) -> StudentDraft {
    StudentDraft {
        name: name.to_string(),
        email: email.to_string(),
        city: city.to_string(),
        ..StudentDraft::default()
    }
}

#[test]
fn test_load_replaces_contents_and_clears_selection() {
    let mut store = RosterStore::new();
    store.load(vec![make_record(1, "Ann Lee", "ann@x.com", "Pune")]);
    store.select(Some(StudentId::new(1)));

    store.load(vec![
        make_record(5, "Cy", "cy@x.com", ""),
        make_record(6, "Di", "di@x.com", ""),
    ]);

    assert_eq!(store.len(), 2);
    assert_eq!(store.selected(), None);
    assert!(store.get(StudentId::new(1)).is_none());
}

#[test]
fn test_add_prepends_and_assigns_unique_ids() {
    let mut store = RosterStore::new();
    store.load(vec![make_record(1, "Ann Lee", "ann@x.com", "Pune")]);

    let first = store
        .add(&make_draft("Bo", "bo@x.com", "Pune"), ValidationPolicy::BASIC)
        .expect("valid draft");
    let second = store
        .add(&make_draft("Cy", "cy@x.com", ""), ValidationPolicy::BASIC)
        .expect("valid draft");

    assert_ne!(first, StudentId::new(1));
    assert_ne!(second, first);

    // Most recently added first.
    let ids: Vec<_> = store.records().iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![second, first, StudentId::new(1)]);
}

#[test]
fn test_add_sequence_keeps_every_id_unique() {
    let mut store = RosterStore::new();
    store.load(vec![
        make_record(3, "Ann Lee", "ann@x.com", ""),
        make_record(9, "Bo", "bo@x.com", ""),
    ]);

    for i in 0..20 {
        store
            .add(
                &make_draft(&format!("S{i}"), &format!("s{i}@x.com"), ""),
                ValidationPolicy::BASIC,
            )
            .expect("valid draft");
    }

    let mut ids: Vec<_> = store.records().iter().map(|r| r.id).collect();
    let total = ids.len();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), total);
    assert_eq!(total, 22);
}

#[test]
fn test_add_invalid_draft_leaves_store_unchanged() {
    let mut store = RosterStore::new();
    store.load(vec![make_record(1, "Ann Lee", "ann@x.com", "Pune")]);

    let err = store
        .add(&make_draft("   ", "bo@x.com", ""), ValidationPolicy::BASIC)
        .expect_err("blank name must be rejected");
    assert_eq!(err.len(), 1);
    assert_eq!(store.len(), 1);

    let err = store
        .add(&make_draft("Bo", "  ", ""), ValidationPolicy::BASIC)
        .expect_err("blank email must be rejected");
    assert_eq!(err.len(), 1);
    assert_eq!(store.len(), 1);
}

#[test]
fn test_update_merges_only_patched_fields() {
    let mut store = RosterStore::new();
    store.load(vec![make_record(1, "Ann Lee", "ann@x.com", "Pune")]);

    let patch = StudentPatch {
        city: Some("Delhi".to_string()),
        ..StudentPatch::default()
    };
    assert!(store.update(StudentId::new(1), &patch));

    let record = store.get(StudentId::new(1)).expect("record exists");
    assert_eq!(record.city, "Delhi");
    assert_eq!(record.name, "Ann Lee");
    assert_eq!(record.email, "ann@x.com");
    assert_eq!(record.id, StudentId::new(1));
}

#[test]
fn test_update_unknown_id_is_a_noop() {
    let mut store = RosterStore::new();
    store.load(vec![make_record(1, "Ann Lee", "ann@x.com", "Pune")]);

    let patch = StudentPatch {
        name: Some("Zed".to_string()),
        ..StudentPatch::default()
    };
    assert!(!store.update(StudentId::new(99), &patch));
    assert_eq!(store.get(StudentId::new(1)).unwrap().name, "Ann Lee");
}

#[test]
fn test_remove_is_idempotent() {
    let mut store = RosterStore::new();
    store.load(vec![
        make_record(1, "Ann Lee", "ann@x.com", "Pune"),
        make_record(2, "Bo", "bo@x.com", ""),
    ]);

    assert!(store.remove(StudentId::new(1)));
    assert!(!store.remove(StudentId::new(1)));
    assert_eq!(store.len(), 1);
}

#[test]
fn test_remove_selected_record_clears_selection() {
    let mut store = RosterStore::new();
    store.load(vec![
        make_record(1, "Ann Lee", "ann@x.com", "Pune"),
        make_record(2, "Bo", "bo@x.com", ""),
    ]);

    store.select(Some(StudentId::new(1)));
    store.remove(StudentId::new(1));
    assert_eq!(store.selected(), None);

    // Removing an unselected record keeps the selection.
    store.select(Some(StudentId::new(2)));
    store.remove(StudentId::new(1));
    assert_eq!(store.selected(), Some(StudentId::new(2)));
}

#[test]
fn test_select_unknown_id_keeps_previous_selection() {
    let mut store = RosterStore::new();
    store.load(vec![make_record(1, "Ann Lee", "ann@x.com", "Pune")]);

    store.select(Some(StudentId::new(1)));
    store.select(Some(StudentId::new(42)));
    assert_eq!(store.selected(), Some(StudentId::new(1)));

    store.select(None);
    assert_eq!(store.selected(), None);
}

#[test]
fn test_example_scenario_end_to_end() {
    let mut store = RosterStore::new();
    store.load(vec![make_record(1, "Ann Lee", "ann@x.com", "Pune")]);

    let bo = store
        .add(&make_draft("Bo", "bo@x.com", "Pune"), ValidationPolicy::BASIC)
        .expect("valid draft");
    assert_eq!(store.len(), 2);
    assert_eq!(store.records()[0].id, bo);
    assert_ne!(bo, StudentId::new(1));

    let patch = StudentPatch {
        city: Some("Delhi".to_string()),
        ..StudentPatch::default()
    };
    store.update(StudentId::new(1), &patch);
    let ann = store.get(StudentId::new(1)).unwrap();
    assert_eq!(ann.city, "Delhi");
    assert_eq!(ann.name, "Ann Lee");
    assert_eq!(ann.email, "ann@x.com");

    let filter = roster_core::RosterFilter {
        search: "bo".to_string(),
        ..roster_core::RosterFilter::default()
    };
    let view = roster_core::filter_records(store.records(), &filter);
    assert_eq!(view.len(), 1);
    assert_eq!(view[0].id, bo);

    store.select(Some(StudentId::new(1)));
    store.remove(StudentId::new(1));
    assert_eq!(store.len(), 1);
    assert_eq!(store.records()[0].id, bo);
    assert_eq!(store.selected(), None);
}
