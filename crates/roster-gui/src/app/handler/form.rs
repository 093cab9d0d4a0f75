//! Add/edit form message handlers.

use iced::Task;

use roster_core::{StudentPatch, ValidationPolicy, validate_draft};

use crate::app::App;
use crate::message::{FormField, FormMessage, Message};
use crate::state::Mode;

/// Rule set used by the form dialog.
///
/// The dialog serves both the add and edit flows, so both require a city.
const FORM_POLICY: ValidationPolicy = ValidationPolicy::FULL;

impl App {
    /// Handle add/edit dialog messages.
    pub fn handle_form_message(&mut self, msg: FormMessage) -> Task<Message> {
        match msg {
            FormMessage::FieldChanged(field, value) => {
                if let Some(draft) = self.state.mode.draft_mut() {
                    match field {
                        FormField::Name => draft.name = value,
                        FormField::Email => draft.email = value,
                        FormField::Phone => draft.phone = value,
                        FormField::Website => draft.website = value,
                        FormField::City => draft.city = value,
                        FormField::Company => draft.company = value,
                    }
                }
            }

            FormMessage::Submitted => self.submit_form(),

            FormMessage::Cancelled => {
                self.state.mode = Mode::Idle;
            }
        }

        Task::none()
    }

    /// Validate the open form and apply it to the store.
    ///
    /// On success the affected record becomes the selection and its profile
    /// opens; on failure the form stays open with per-field errors and the
    /// store is untouched.
    fn submit_form(&mut self) {
        let mode = std::mem::take(&mut self.state.mode);

        match mode {
            Mode::Adding { draft, .. } => match self.state.roster.add(&draft, FORM_POLICY) {
                Ok(id) => {
                    self.state.roster.select(Some(id));
                    self.state.mode = Mode::Viewing(id);
                }
                Err(errors) => {
                    self.state.mode = Mode::Adding { draft, errors };
                }
            },

            Mode::Editing { id, draft, .. } => match validate_draft(&draft, FORM_POLICY) {
                Ok(()) => {
                    let patch = StudentPatch::from(draft);
                    self.state.roster.update(id, &patch);
                    self.state.mode = Mode::Viewing(id);
                }
                Err(errors) => {
                    self.state.mode = Mode::Editing { id, draft, errors };
                }
            },

            other => {
                tracing::debug!("form submit outside a form mode ignored");
                self.state.mode = other;
            }
        }
    }
}
