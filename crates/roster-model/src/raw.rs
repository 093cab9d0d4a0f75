//! Raw shapes returned by the remote user provider.
//!
//! The provider returns a JSON array of user objects with nested address
//! and company objects. Only the fields the roster needs are decoded;
//! everything else in the payload is ignored.

use serde::Deserialize;

use crate::record::{StudentId, StudentRecord};

/// One user object as returned by the provider.
#[derive(Debug, Clone, Deserialize)]
pub struct RawUser {
    pub id: u64,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub address: Option<RawAddress>,
    #[serde(default)]
    pub company: Option<RawCompany>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawAddress {
    #[serde(default)]
    pub city: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawCompany {
    #[serde(default)]
    pub name: String,
}

impl From<RawUser> for StudentRecord {
    /// Flatten a raw user into the record shape.
    ///
    /// Missing nested fields become empty strings, never `None`.
    fn from(raw: RawUser) -> Self {
        Self {
            id: StudentId::new(raw.id),
            name: raw.name,
            email: raw.email,
            phone: raw.phone,
            website: raw.website,
            city: raw.address.map(|a| a.city).unwrap_or_default(),
            company: raw.company.map(|c| c.name).unwrap_or_default(),
        }
    }
}
