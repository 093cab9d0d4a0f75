//! Tests for draft validation.

use roster_core::{Field, ValidationPolicy, validate_draft};
use roster_model::StudentDraft;

fn make_draft(name: &str, email: &str, city: &str) -> StudentDraft {
    StudentDraft {
        name: name.to_string(),
        email: email.to_string(),
        city: city.to_string(),
        ..StudentDraft::default()
    }
}

#[test]
fn test_valid_draft_passes_both_policies() {
    let draft = make_draft("Bo", "bo@x.com", "Pune");
    assert!(validate_draft(&draft, ValidationPolicy::BASIC).is_ok());
    assert!(validate_draft(&draft, ValidationPolicy::FULL).is_ok());
}

#[test]
fn test_name_and_email_are_always_required() {
    let errors = validate_draft(&make_draft("", "", ""), ValidationPolicy::BASIC)
        .expect_err("empty draft must fail");
    assert_eq!(errors.get(Field::Name), Some("Name is required"));
    assert_eq!(errors.get(Field::Email), Some("Email is required"));
    assert_eq!(errors.len(), 2);
}

#[test]
fn test_whitespace_only_fields_count_as_empty() {
    let errors = validate_draft(&make_draft("  ", " \t", ""), ValidationPolicy::BASIC)
        .expect_err("whitespace draft must fail");
    assert!(errors.get(Field::Name).is_some());
    assert!(errors.get(Field::Email).is_some());
}

#[test]
fn test_email_must_contain_at_sign() {
    let errors = validate_draft(&make_draft("Bo", "bo.x.com", ""), ValidationPolicy::BASIC)
        .expect_err("malformed email must fail");
    assert_eq!(errors.get(Field::Email), Some("Email is invalid"));
    assert_eq!(errors.get(Field::Name), None);
}

#[test]
fn test_city_requirement_depends_on_policy() {
    let draft = make_draft("Bo", "bo@x.com", "");

    assert!(validate_draft(&draft, ValidationPolicy::BASIC).is_ok());

    let errors = validate_draft(&draft, ValidationPolicy::FULL)
        .expect_err("missing city must fail the full policy");
    assert_eq!(errors.get(Field::City), Some("City is required"));
    assert_eq!(errors.len(), 1);
}

#[test]
fn test_errors_iterate_in_field_order() {
    let errors = validate_draft(&make_draft("", "bad", ""), ValidationPolicy::FULL)
        .expect_err("draft must fail");
    let fields: Vec<Field> = errors.iter().map(|(field, _)| field).collect();
    assert_eq!(fields, vec![Field::Name, Field::Email, Field::City]);
}
