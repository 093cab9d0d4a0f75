//! View functions.
//!
//! Views are pure functions of the application state. `view_app` renders the
//! roster screen and layers the dialog for the current mode on top of it.

pub mod dialog;
mod roster;

use iced::Element;

use crate::message::Message;
use crate::state::{AppState, Mode};

pub use roster::view_roster;

/// Render the whole application: roster screen plus the active dialog.
pub fn view_app(state: &AppState) -> Element<'_, Message> {
    let base = view_roster(state);

    match &state.mode {
        Mode::Idle => base,
        Mode::Viewing(id) => match state.roster.get(*id) {
            Some(record) => dialog::view_profile(base, record),
            None => base,
        },
        Mode::Editing { draft, errors, .. } => {
            dialog::view_student_form(base, draft, errors, dialog::FormKind::Edit)
        }
        Mode::Adding { draft, errors } => {
            dialog::view_student_form(base, draft, errors, dialog::FormKind::Add)
        }
        Mode::ConfirmingDelete(id) => {
            dialog::view_confirm_delete(base, state.roster.get(*id))
        }
    }
}
