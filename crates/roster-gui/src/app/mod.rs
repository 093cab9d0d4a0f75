//! Main application module for Student Roster Studio.
//!
//! This module implements the Iced 0.14.0 application using the builder
//! pattern. The architecture follows the Elm pattern:
//! State → Message → Update → View.
//!
//! # Key Design Principles
//!
//! - **All state changes happen in `update()`** - Views are pure functions
//! - **No channels/polling** - `Task::perform` for the one async operation
//! - **Dialog state lives in the `Mode` enum** - Not in separate flags
//!
//! # Module Structure
//!
//! - `handler/` - Message handlers organized by category

mod handler;

use iced::keyboard;
use iced::keyboard::key::Named;
use iced::{Element, Subscription, Task, Theme};

use roster_model::StudentRecord;

use crate::constants::APP_TITLE;
use crate::message::Message;
use crate::service::load_students;
use crate::state::{AppState, LoadState, Mode};
use crate::theme::roster_theme;
use crate::view::view_app;

// =============================================================================
// APPLICATION
// =============================================================================

/// Main application struct.
///
/// This is the root of the Iced application. It holds the application state
/// and implements the Elm architecture methods.
pub struct App {
    /// All application state.
    pub state: AppState,
}

impl App {
    /// Create a new application instance.
    ///
    /// Called once at startup. Kicks off the one-shot roster fetch; the
    /// result arrives later as a `Loaded` message.
    pub fn new() -> (Self, Task<Message>) {
        let app = Self {
            state: AppState::new(),
        };

        let startup = load_students(
            roster_ingest::endpoint_from_env(),
            app.state.load_generation,
        );

        (app, startup)
    }

    /// Update application state in response to a message.
    ///
    /// This is the core of the Elm architecture - all state changes happen here.
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            // =================================================================
            // Background task results
            // =================================================================
            Message::Loaded { generation, result } => {
                self.handle_loaded(generation, result);
                Task::none()
            }

            // =================================================================
            // View-specific messages
            // =================================================================
            Message::Roster(roster_msg) => self.handle_roster_message(roster_msg),

            Message::Form(form_msg) => self.handle_form_message(form_msg),

            // =================================================================
            // Global events
            // =================================================================
            Message::KeyPressed(key, _modifiers) => {
                self.handle_key_pressed(&key);
                Task::none()
            }

            Message::Noop => Task::none(),
        }
    }

    /// Render the current view.
    pub fn view(&self) -> Element<'_, Message> {
        view_app(&self.state)
    }

    /// Window title.
    pub fn title(&self) -> String {
        APP_TITLE.to_string()
    }

    /// Application theme.
    pub fn theme(&self) -> Theme {
        roster_theme()
    }

    /// Keyboard subscription for global shortcuts.
    pub fn subscription(&self) -> Subscription<Message> {
        keyboard::listen().map(|event| match event {
            keyboard::Event::KeyPressed { key, modifiers, .. } => {
                Message::KeyPressed(key, modifiers)
            }
            _ => Message::Noop,
        })
    }

    /// Apply the result of the initial fetch.
    ///
    /// A result from a superseded fetch, or one arriving after the load has
    /// already settled, must not touch state.
    fn handle_loaded(&mut self, generation: u64, result: Result<Vec<StudentRecord>, String>) {
        if generation != self.state.load_generation {
            tracing::debug!(generation, "discarding stale roster load result");
            return;
        }
        if self.state.load != LoadState::Loading {
            tracing::debug!("discarding roster load result after load settled");
            return;
        }

        match result {
            Ok(records) => {
                tracing::info!("Roster ready with {} students", records.len());
                self.state.roster.load(records);
                self.state.load = LoadState::Ready;
            }
            Err(message) => {
                self.state.load = LoadState::Failed(message);
            }
        }
    }

    /// Escape backs out of whatever dialog is open.
    fn handle_key_pressed(&mut self, key: &keyboard::Key) {
        if *key == keyboard::Key::Named(Named::Escape) {
            match self.state.mode {
                Mode::Idle => {}
                Mode::Viewing(_) => {
                    self.state.roster.select(None);
                    self.state.mode = Mode::Idle;
                }
                _ => self.state.mode = Mode::Idle,
            }
        }
    }
}
