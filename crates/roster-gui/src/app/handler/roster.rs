//! Roster view message handlers.
//!
//! Handles:
//! - Search and city filter edits
//! - Selection and the profile dialog
//! - The delete confirmation flow
//! - Opening website links

use iced::Task;

use roster_model::StudentDraft;

use crate::app::App;
use crate::message::{Message, RosterMessage};
use crate::state::Mode;

impl App {
    /// Handle roster view messages.
    pub fn handle_roster_message(&mut self, msg: RosterMessage) -> Task<Message> {
        match msg {
            RosterMessage::SearchChanged(search) => {
                self.state.filter.search = search;
            }

            RosterMessage::CityFilterChanged(city) => {
                self.state.filter.city = city;
            }

            RosterMessage::ViewClicked(id) => {
                self.state.roster.select(Some(id));
                self.state.mode = Mode::Viewing(id);
            }

            RosterMessage::ProfileClosed => {
                self.state.roster.select(None);
                self.state.mode = Mode::Idle;
            }

            RosterMessage::EditClicked(id) => {
                // Selecting for edit also selects for view.
                if let Some(record) = self.state.roster.get(id) {
                    let draft = StudentDraft::from_record(record);
                    self.state.roster.select(Some(id));
                    self.state.mode = Mode::editing(id, draft);
                }
            }

            RosterMessage::AddClicked => {
                self.state.roster.select(None);
                self.state.mode = Mode::adding();
            }

            RosterMessage::DeleteClicked(id) => {
                self.state.mode = Mode::ConfirmingDelete(id);
            }

            RosterMessage::DeleteConfirmed => {
                if let Mode::ConfirmingDelete(id) = self.state.mode {
                    self.state.roster.remove(id);
                }
                self.state.mode = Mode::Idle;
            }

            RosterMessage::DeleteCancelled => {
                self.state.mode = Mode::Idle;
            }

            RosterMessage::WebsiteClicked(url) => {
                if let Err(err) = open::that(&url) {
                    tracing::warn!("Failed to open {url}: {err}");
                }
            }
        }

        Task::none()
    }
}
