//! Tests for the derived query view.

use roster_core::{CityFilter, RosterFilter, cities, city_options, filter_records};
use roster_model::{StudentId, StudentRecord};

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

fn sample() -> Vec<StudentRecord> {
    vec![
        make_record(1, "Ann Lee", "ann@x.com", "Pune"),
        make_record(2, "Bo", "bo@x.com", "Delhi"),
        make_record(3, "Carla", "carla@y.org", "Pune"),
        make_record(4, "Dev", "dev@y.org", ""),
    ]
}

#[test]
fn test_search_matches_name_or_email_case_insensitively() {
    let records = sample();

    let filter = RosterFilter {
        search: "ANN".to_string(),
        ..RosterFilter::default()
    };
    let view = filter_records(&records, &filter);
    assert_eq!(view.len(), 1);
    assert_eq!(view[0].name, "Ann Lee");

    // Matches the email of Bo and Carla and the name of Carla.
    let filter = RosterFilter {
        search: "o".to_string(),
        ..RosterFilter::default()
    };
    let view = filter_records(&records, &filter);
    for record in &view {
        let needle_in_name = record.name.to_lowercase().contains('o');
        let needle_in_email = record.email.to_lowercase().contains('o');
        assert!(needle_in_name || needle_in_email);
    }
    for record in &records {
        let in_view = view.iter().any(|r| r.id == record.id);
        let matches = record.name.to_lowercase().contains('o')
            || record.email.to_lowercase().contains('o');
        assert_eq!(in_view, matches);
    }
}

#[test]
fn test_empty_search_matches_everything() {
    let records = sample();
    let view = filter_records(&records, &RosterFilter::default());
    assert_eq!(view.len(), records.len());
}

#[test]
fn test_city_filter_restricts_to_exact_city() {
    let records = sample();

    let filter = RosterFilter {
        city: CityFilter::City("Pune".to_string()),
        ..RosterFilter::default()
    };
    let view = filter_records(&records, &filter);
    assert_eq!(view.len(), 2);
    assert!(view.iter().all(|r| r.city == "Pune"));
}

#[test]
fn test_all_cities_has_search_only_cardinality() {
    let records = sample();

    let search_only = RosterFilter {
        search: "y.org".to_string(),
        ..RosterFilter::default()
    };
    let with_all = RosterFilter {
        search: "y.org".to_string(),
        city: CityFilter::All,
    };

    assert_eq!(
        filter_records(&records, &search_only).len(),
        filter_records(&records, &with_all).len()
    );
}

#[test]
fn test_search_and_city_filter_combine() {
    let records = sample();

    let filter = RosterFilter {
        search: "a".to_string(),
        city: CityFilter::City("Pune".to_string()),
    };
    let view = filter_records(&records, &filter);
    assert_eq!(view.len(), 2);
    assert!(view.iter().all(|r| r.city == "Pune"));
}

#[test]
fn test_view_preserves_collection_order() {
    let records = sample();
    let filter = RosterFilter {
        city: CityFilter::City("Pune".to_string()),
        ..RosterFilter::default()
    };
    let ids: Vec<_> = filter_records(&records, &filter)
        .iter()
        .map(|r| r.id.value())
        .collect();
    assert_eq!(ids, vec![1, 3]);
}

#[test]
fn test_cities_are_distinct_sorted_and_skip_empty() {
    let records = sample();
    assert_eq!(cities(&records), vec!["Delhi", "Pune"]);
    assert_eq!(cities(&[]), Vec::<String>::new());
}

#[test]
fn test_city_options_lead_with_the_all_sentinel() {
    let records = sample();
    let options = city_options(&records);
    assert_eq!(options[0], CityFilter::All);
    assert_eq!(options.len(), 3);
    assert_eq!(options[0].to_string(), "All Cities");
    assert_eq!(options[1].to_string(), "Delhi");
}
