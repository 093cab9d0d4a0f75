pub mod draft;
pub mod raw;
pub mod record;

pub use draft::StudentDraft;
pub use raw::{RawAddress, RawCompany, RawUser};
pub use record::{StudentId, StudentRecord};
