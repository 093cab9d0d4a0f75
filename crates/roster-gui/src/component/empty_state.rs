//! Empty, loading, and error state components.
//!
//! Standardized feedback states for when there's no data to display,
//! an operation is in progress, or an error occurred.
//!
//! # Usage
//!
//! ```rust,ignore
//! use roster_gui::component::{EmptyState, LoadingState, ErrorState};
//! use iced_fonts::lucide;
//!
//! // Empty state with action
//! EmptyState::new(lucide::users().size(48), "No students found.")
//!     .description("Try a different search or city filter")
//!     .centered()
//!     .view()
//!
//! // Loading state
//! LoadingState::new("Loading students...")
//!     .centered()
//!     .view()
//!
//! // Error state
//! ErrorState::new("Could not load students")
//!     .message(&error_text)
//!     .centered()
//!     .view()
//! ```

use iced::widget::{button, column, container, text};
use iced::{Alignment, Element, Length};

use crate::theme::{ERROR, GRAY_500, GRAY_700, SPACING_MD, SPACING_SM, button_primary};

// =============================================================================
// EMPTY STATE
// =============================================================================

/// Empty state with icon, title, description, and optional action.
///
/// Use when there's no data to display or the user needs to take an action.
pub struct EmptyState<'a, M> {
    icon: Element<'a, M>,
    title: String,
    description: Option<String>,
    action: Option<(String, M)>,
    centered: bool,
}

impl<'a, M: Clone + 'a> EmptyState<'a, M> {
    /// Create a new empty state with icon and title.
    pub fn new(icon: impl Into<Element<'a, M>>, title: impl Into<String>) -> Self {
        Self {
            icon: icon.into(),
            title: title.into(),
            description: None,
            action: None,
            centered: false,
        }
    }

    /// Add a description line.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Add an action button.
    pub fn action(mut self, label: impl Into<String>, message: M) -> Self {
        self.action = Some((label.into(), message));
        self
    }

    /// Center the state in the available space.
    pub fn centered(mut self) -> Self {
        self.centered = true;
        self
    }

    /// Build the empty state element.
    pub fn view(self) -> Element<'a, M> {
        let mut content = column![self.icon, text(self.title).size(16).color(GRAY_700)]
            .spacing(SPACING_SM)
            .align_x(Alignment::Center);

        if let Some(desc) = self.description {
            content = content.push(text(desc).size(13).color(GRAY_500));
        }

        if let Some((label, message)) = self.action {
            content = content.push(
                button(text(label).size(14))
                    .on_press(message)
                    .padding([8.0, 14.0])
                    .style(button_primary),
            );
        }

        wrap(content.into(), self.centered)
    }
}

// =============================================================================
// LOADING STATE
// =============================================================================

/// Loading indicator with title and optional description.
pub struct LoadingState {
    title: String,
    description: Option<String>,
    centered: bool,
}

impl LoadingState {
    /// Create a new loading state.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            centered: false,
        }
    }

    /// Add a description line.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Center the state in the available space.
    pub fn centered(mut self) -> Self {
        self.centered = true;
        self
    }

    /// Build the loading state element.
    pub fn view<'a, M: 'a>(self) -> Element<'a, M> {
        let mut content = column![text(self.title).size(16).color(GRAY_700)]
            .spacing(SPACING_SM)
            .align_x(Alignment::Center);

        if let Some(desc) = self.description {
            content = content.push(text(desc).size(13).color(GRAY_500));
        }

        wrap(content.into(), self.centered)
    }
}

// =============================================================================
// ERROR STATE
// =============================================================================

/// Error display with title and message.
///
/// The load error is terminal for the session, so there is deliberately no
/// retry action here.
pub struct ErrorState {
    title: String,
    message: Option<String>,
    centered: bool,
}

impl ErrorState {
    /// Create a new error state.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: None,
            centered: false,
        }
    }

    /// Add the error message.
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Center the state in the available space.
    pub fn centered(mut self) -> Self {
        self.centered = true;
        self
    }

    /// Build the error state element.
    pub fn view<'a, M: 'a>(self) -> Element<'a, M> {
        let mut content = column![text(self.title).size(16).color(ERROR)]
            .spacing(SPACING_SM)
            .align_x(Alignment::Center);

        if let Some(message) = self.message {
            content = content.push(text(message).size(13).color(GRAY_700));
        }

        wrap(content.into(), self.centered)
    }
}

/// Optionally center content in the available space.
fn wrap<'a, M: 'a>(content: Element<'a, M>, centered: bool) -> Element<'a, M> {
    if centered {
        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Alignment::Center)
            .align_y(Alignment::Center)
            .padding(SPACING_MD)
            .into()
    } else {
        container(content).padding(SPACING_MD).into()
    }
}
