//! Application state management.
//!
//! This module contains all runtime state types for the GUI application:
//!
//! - **AppState**: Root of all state
//! - **LoadState**: Status of the one-shot initial fetch
//! - **Mode**: Current interaction mode, a single tagged variant

mod app_state;
mod mode;

pub use app_state::{AppState, LoadState};
pub use mode::Mode;
