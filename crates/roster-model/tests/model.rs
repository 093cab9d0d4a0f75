//! Tests for roster-model types.

use roster_model::{RawUser, StudentDraft, StudentId, StudentRecord};

#[test]
fn raw_user_decodes_full_payload() {
    let json = r#"{
        "id": 1,
        "name": "Leanne Graham",
        "username": "Bret",
        "email": "Sincere@april.biz",
        "phone": "1-770-736-8031 x56442",
        "website": "hildegard.org",
        "address": { "street": "Kulas Light", "city": "Gwenborough" },
        "company": { "name": "Romaguera-Crona", "catchPhrase": "..." }
    }"#;

    let raw: RawUser = serde_json::from_str(json).expect("decode raw user");
    let record = StudentRecord::from(raw);

    assert_eq!(record.id, StudentId::new(1));
    assert_eq!(record.name, "Leanne Graham");
    assert_eq!(record.email, "Sincere@april.biz");
    assert_eq!(record.phone, "1-770-736-8031 x56442");
    assert_eq!(record.website, "hildegard.org");
    assert_eq!(record.city, "Gwenborough");
    assert_eq!(record.company, "Romaguera-Crona");
}

#[test]
fn raw_user_missing_nested_fields_map_to_empty() {
    let json = r#"{ "id": 7, "name": "Bo", "email": "bo@x.com" }"#;

    let raw: RawUser = serde_json::from_str(json).expect("decode raw user");
    let record = StudentRecord::from(raw);

    assert_eq!(record.phone, "");
    assert_eq!(record.website, "");
    assert_eq!(record.city, "");
    assert_eq!(record.company, "");
}

#[test]
fn raw_user_empty_nested_objects_map_to_empty() {
    let json = r#"{
        "id": 7,
        "name": "Bo",
        "email": "bo@x.com",
        "address": {},
        "company": {}
    }"#;

    let raw: RawUser = serde_json::from_str(json).expect("decode raw user");
    let record = StudentRecord::from(raw);

    assert_eq!(record.city, "");
    assert_eq!(record.company, "");
}

#[test]
fn draft_prefills_from_record() {
    let record = StudentRecord {
        id: StudentId::new(3),
        name: "Ann Lee".to_string(),
        email: "ann@x.com".to_string(),
        phone: "123".to_string(),
        website: "ann.example".to_string(),
        city: "Pune".to_string(),
        company: "XYZ College".to_string(),
    };

    let draft = StudentDraft::from_record(&record);
    assert_eq!(draft.name, "Ann Lee");
    assert_eq!(draft.email, "ann@x.com");
    assert_eq!(draft.phone, "123");
    assert_eq!(draft.website, "ann.example");
    assert_eq!(draft.city, "Pune");
    assert_eq!(draft.company, "XYZ College");
}
