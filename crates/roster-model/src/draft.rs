//! Draft records.
//!
//! A draft is an unvalidated, user-edited candidate record awaiting
//! acceptance into the store. All fields are plain strings so a draft can
//! hold whatever the user has typed so far.

use crate::record::StudentRecord;

/// Candidate record for an add or edit form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub website: String,
    pub city: String,
    pub company: String,
}

impl StudentDraft {
    /// Pre-fill a draft from an existing record (edit flow).
    pub fn from_record(record: &StudentRecord) -> Self {
        Self {
            name: record.name.clone(),
            email: record.email.clone(),
            phone: record.phone.clone(),
            website: record.website.clone(),
            city: record.city.clone(),
            company: record.company.clone(),
        }
    }
}
