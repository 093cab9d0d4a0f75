//! Draft validation.
//!
//! Checks a candidate record against required-field rules before it is
//! allowed to mutate the store. Validation has no side effects; callers
//! must not touch the store while any error is present.
//!
//! Two rule sets exist because the two entry points in the product disagree
//! on whether a city is required: the quick-add path only needs name and
//! email, the full form also demands a city. `ValidationPolicy` keeps both
//! available instead of silently picking one.

use std::collections::BTreeMap;
use std::fmt;

use roster_model::StudentDraft;
use thiserror::Error;

/// Fields that can carry a validation error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    City,
}

impl Field {
    /// Human-readable field label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::City => "City",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Per-field validation failures for a draft.
///
/// Maps each offending field to a human-readable message. Surfacing the
/// messages is the caller's job.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("validation failed for {} field(s)", .errors.len())]
pub struct FieldErrors {
    errors: BTreeMap<Field, String>,
}

impl FieldErrors {
    fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }

    /// Message for a field, if it failed.
    pub fn get(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.errors.iter().map(|(field, msg)| (*field, msg.as_str()))
    }
}

/// Required-field rule set for draft validation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidationPolicy {
    /// Whether `city` must be non-empty.
    pub require_city: bool,
}

impl ValidationPolicy {
    /// Name and email only - the quick-add rule set.
    pub const BASIC: Self = Self { require_city: false };

    /// Name, email, and city - the full form rule set.
    pub const FULL: Self = Self { require_city: true };
}

/// Check a draft against the given policy.
///
/// Name and email must be non-empty after trimming; a non-empty email must
/// contain an `@`; city is required only when the policy says so.
pub fn validate_draft(
    draft: &StudentDraft,
    policy: ValidationPolicy,
) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::default();

    if draft.name.trim().is_empty() {
        errors.insert(Field::Name, "Name is required");
    }

    let email = draft.email.trim();
    if email.is_empty() {
        errors.insert(Field::Email, "Email is required");
    } else if !email.contains('@') {
        errors.insert(Field::Email, "Email is invalid");
    }

    if policy.require_city && draft.city.trim().is_empty() {
        errors.insert(Field::City, "City is required");
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}
