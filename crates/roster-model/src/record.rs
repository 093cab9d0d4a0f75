//! Student record types.
//!
//! A `StudentRecord` is the flat, session-local shape every part of the
//! application works with. Records loaded from the remote provider and
//! records created locally share this shape; only the id origin differs.

use std::fmt;

/// Unique identifier of a student record.
///
/// Provider-assigned for loaded records, allocated by the store for records
/// created locally. Unique within a store at all times.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StudentId(u64);

impl StudentId {
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One student's data tuple.
///
/// Optional fields hold the empty string when absent, never `None` - the
/// remote provider mapping guarantees this and the store preserves it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentRecord {
    pub id: StudentId,
    /// Display name (required, non-empty).
    pub name: String,
    /// Email address (required, contains `@`).
    pub email: String,
    pub phone: String,
    pub website: String,
    pub city: String,
    pub company: String,
}

impl StudentRecord {
    /// Avatar initials: first letter of up to two name parts, uppercased.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }

    /// Website address with a scheme, suitable for opening in a browser.
    ///
    /// Addresses without an `http` prefix are treated as `https://`.
    /// Returns `None` when no website is set.
    pub fn website_url(&self) -> Option<String> {
        if self.website.is_empty() {
            return None;
        }
        if self.website.starts_with("http") {
            Some(self.website.clone())
        } else {
            Some(format!("https://{}", self.website))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, website: &str) -> StudentRecord {
        StudentRecord {
            id: StudentId::new(1),
            name: name.to_string(),
            email: "a@b.c".to_string(),
            phone: String::new(),
            website: website.to_string(),
            city: String::new(),
            company: String::new(),
        }
    }

    #[test]
    fn initials_take_first_two_parts() {
        assert_eq!(record("Ann Lee", "").initials(), "AL");
        assert_eq!(record("Ann Lee Park", "").initials(), "AL");
        assert_eq!(record("bo", "").initials(), "B");
    }

    #[test]
    fn website_url_adds_scheme() {
        assert_eq!(
            record("A", "example.org").website_url().as_deref(),
            Some("https://example.org")
        );
        assert_eq!(
            record("A", "http://example.org").website_url().as_deref(),
            Some("http://example.org")
        );
        assert_eq!(record("A", "").website_url(), None);
    }
}
