//! Remote provider client.
//!
//! The roster's only external interface: one HTTP GET against a public user
//! endpoint, decoded and mapped into student records. Read-only - nothing is
//! ever written back to the provider.

pub mod client;
pub mod error;

pub use client::{DEFAULT_ENDPOINT, endpoint_from_env, fetch_students};
pub use error::{IngestError, Result};
