//! Student Roster Studio - Desktop GUI Application
//!
//! A desktop application for browsing a student roster loaded from a public
//! user directory, with local add/edit/delete against the in-memory list.
//!
//! Built with Iced 0.14.0 using the Elm architecture (State, Message, Update, View).

use iced::Size;
use iced::window;

use roster_gui::app::App;
use roster_gui::constants::{MIN_WINDOW_SIZE, WINDOW_SIZE};

/// Application entry point.
///
/// Initializes logging and runs the Iced application with the roster theme
/// and default window settings.
pub fn main() -> iced::Result {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    tracing::info!("Starting Student Roster Studio");

    // Run the Iced application using the builder pattern
    iced::application(App::new, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .subscription(App::subscription)
        .font(iced_fonts::LUCIDE_FONT_BYTES)
        .window(window::Settings {
            size: Size::new(WINDOW_SIZE.0, WINDOW_SIZE.1),
            min_size: Some(Size::new(MIN_WINDOW_SIZE.0, MIN_WINDOW_SIZE.1)),
            ..Default::default()
        })
        .run()
}
