//! Application-level state.
//!
//! This module contains `AppState` which is the root of all state.

use roster_core::{RosterFilter, RosterStore};

use super::mode::Mode;

/// Status of the one-shot initial roster fetch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadState {
    /// Fetch in flight.
    #[default]
    Loading,
    /// Roster loaded.
    Ready,
    /// Fetch failed; the roster stays empty for this session.
    Failed(String),
}

/// Top-level application state.
///
/// This is the root of all state in the application.
#[derive(Debug, Default)]
pub struct AppState {
    /// The record store.
    pub roster: RosterStore,
    /// Initial load status.
    pub load: LoadState,
    /// Search text and city filter.
    pub filter: RosterFilter,
    /// Current interaction mode (which dialog is open, if any).
    pub mode: Mode,
    /// Generation of the fetch currently awaited. A `Loaded` result whose
    /// generation differs is stale and must be discarded.
    pub load_generation: u64,
}

impl AppState {
    /// Create the initial state: empty roster, load in flight.
    pub fn new() -> Self {
        Self::default()
    }
}
