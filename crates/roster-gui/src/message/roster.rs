//! Roster browsing messages.
//!
//! Handles:
//! - Search and city filter inputs
//! - Opening the profile, add, and edit dialogs
//! - The delete confirmation flow

use roster_core::CityFilter;
use roster_model::StudentId;

/// Messages from the roster list and its dialogs.
#[derive(Debug, Clone)]
pub enum RosterMessage {
    /// Search text edited.
    SearchChanged(String),

    /// City filter choice changed.
    CityFilterChanged(CityFilter),

    /// Open the profile dialog for a record.
    ViewClicked(StudentId),

    /// Close the profile dialog.
    ProfileClosed,

    /// Open the edit form for a record.
    EditClicked(StudentId),

    /// Open the add form.
    AddClicked,

    /// Ask for confirmation before deleting a record.
    DeleteClicked(StudentId),

    /// Confirm the pending delete.
    DeleteConfirmed,

    /// Abandon the pending delete.
    DeleteCancelled,

    /// Open a record's website in the default browser.
    WebsiteClicked(String),
}
