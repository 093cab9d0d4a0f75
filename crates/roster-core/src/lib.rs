pub mod query;
pub mod store;
pub mod validate;

pub use query::{CityFilter, RosterFilter, cities, city_options, filter_records};
pub use store::{RosterStore, StudentPatch};
pub use validate::{Field, FieldErrors, ValidationPolicy, validate_draft};
