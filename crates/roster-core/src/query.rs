//! Derived views over the record collection.
//!
//! Filtering is a pure function of (collection, search, city filter): it is
//! recomputed from the current inputs on every call and never caches.

use std::fmt;

use roster_model::StudentRecord;

/// City filter choice. `All` is the "no filter" sentinel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CityFilter {
    #[default]
    All,
    City(String),
}

impl CityFilter {
    fn matches(&self, record: &StudentRecord) -> bool {
        match self {
            Self::All => true,
            Self::City(city) => record.city == *city,
        }
    }
}

impl fmt::Display for CityFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("All Cities"),
            Self::City(city) => f.write_str(city),
        }
    }
}

/// Search text plus city filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RosterFilter {
    pub search: String,
    pub city: CityFilter,
}

impl RosterFilter {
    /// Whether a record belongs to the derived view.
    ///
    /// The search string must appear case-insensitively in the name or the
    /// email, and the city filter must match.
    pub fn matches(&self, record: &StudentRecord) -> bool {
        let needle = self.search.to_lowercase();
        let matches_search = record.name.to_lowercase().contains(&needle)
            || record.email.to_lowercase().contains(&needle);

        matches_search && self.city.matches(record)
    }
}

/// The ordered subsequence of records matching the filter.
pub fn filter_records<'a>(
    records: &'a [StudentRecord],
    filter: &RosterFilter,
) -> Vec<&'a StudentRecord> {
    records.iter().filter(|r| filter.matches(r)).collect()
}

/// Distinct non-empty city values across the collection, sorted.
pub fn cities(records: &[StudentRecord]) -> Vec<String> {
    let mut cities: Vec<String> = records
        .iter()
        .filter(|r| !r.city.is_empty())
        .map(|r| r.city.clone())
        .collect();
    cities.sort();
    cities.dedup();
    cities
}

/// Filter dropdown choices: the "no filter" sentinel plus every known city.
pub fn city_options(records: &[StudentRecord]) -> Vec<CityFilter> {
    let mut options = vec![CityFilter::All];
    options.extend(cities(records).into_iter().map(CityFilter::City));
    options
}
