//! Message module for Student Roster Studio.
//!
//! This module defines the message hierarchy for the Elm-style architecture.
//! All user interactions and events flow through these message types.

pub mod form;
pub mod roster;

use iced::keyboard;
use roster_model::StudentRecord;

pub use form::{FormField, FormMessage};
pub use roster::RosterMessage;

/// Root message enum for the application.
///
/// All user interactions and system events are represented as variants
/// of this enum. The `update` function processes these messages to
/// modify application state.
#[derive(Debug, Clone)]
pub enum Message {
    // =========================================================================
    // Background task results
    // =========================================================================
    /// Initial roster load completed.
    Loaded {
        /// Generation of the fetch that produced this result.
        generation: u64,
        /// The loaded records, or a display-ready error message.
        result: Result<Vec<StudentRecord>, String>,
    },

    // =========================================================================
    // View-specific messages
    // =========================================================================
    /// Roster list and dialog messages.
    Roster(RosterMessage),

    /// Add/edit form messages.
    Form(FormMessage),

    // =========================================================================
    // Global events
    // =========================================================================
    /// Keyboard event.
    KeyPressed(keyboard::Key, keyboard::Modifiers),

    /// No operation - used for ignored events.
    Noop,
}
