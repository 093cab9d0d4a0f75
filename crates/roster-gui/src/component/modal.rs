//! Modal dialog overlay component.
//!
//! Provides modal dialogs with backdrop, title, content, and action buttons.

use iced::widget::{button, center, column, container, opaque, row, space, stack, text};
use iced::{Element, Length, Theme};

use crate::theme::{
    BACKDROP, GRAY_500, MODAL_WIDTH_MD, MODAL_WIDTH_SM, SPACING_MD, SPACING_SM, button_danger,
    button_ghost, button_secondary, container_modal,
};

// =============================================================================
// MODAL DIALOG
// =============================================================================

/// Creates a modal dialog overlay.
///
/// The modal appears centered on top of the base content with a
/// semi-transparent backdrop. Clicking the backdrop does NOT close the
/// modal - use the close button or Escape.
///
/// # Arguments
///
/// * `base` - The background content (entire app view)
/// * `title` - Modal title text
/// * `content` - Modal body content
/// * `on_close` - Message to send when the close button is clicked
/// * `actions` - List of action buttons for the footer
pub fn modal<'a, M: Clone + 'a>(
    base: Element<'a, M>,
    title: &'a str,
    content: Element<'a, M>,
    on_close: M,
    actions: Vec<Element<'a, M>>,
) -> Element<'a, M> {
    // Backdrop overlay
    let backdrop = container(column![])
        .width(Length::Fill)
        .height(Length::Fill)
        .style(|_theme: &Theme| container::Style {
            background: Some(BACKDROP.into()),
            ..Default::default()
        });

    // Header with title and close button
    let header = row![
        text(title.to_string())
            .size(18)
            .style(|theme: &Theme| text::Style {
                color: Some(theme.extended_palette().background.base.text),
            }),
        space::horizontal(),
        button(
            container(iced_fonts::lucide::x().size(20)).style(|_theme: &Theme| container::Style {
                text_color: Some(GRAY_500),
                ..Default::default()
            })
        )
        .on_press(on_close)
        .padding([4.0, 8.0])
        .style(button_ghost),
    ]
    .align_y(iced::Alignment::Center);

    // Action buttons row
    let action_row = {
        let mut r = row![space::horizontal()].spacing(SPACING_SM);
        for action in actions {
            r = r.push(action);
        }
        r
    };

    // Modal dialog box
    let dialog = container(
        column![
            header,
            container(content).padding([SPACING_MD, 0.0]),
            action_row,
        ]
        .spacing(SPACING_MD),
    )
    .width(Length::Fixed(MODAL_WIDTH_MD))
    .padding(SPACING_MD)
    .style(container_modal);

    // Stack layers: base -> backdrop -> dialog
    stack![base, opaque(backdrop), center(dialog),].into()
}

/// Creates a simple confirmation modal.
///
/// A pre-built modal with a message and confirm/cancel buttons. The confirm
/// action is styled as destructive.
///
/// # Arguments
///
/// * `base` - The background content
/// * `title` - Modal title
/// * `message` - Confirmation message
/// * `confirm_label` - Label for the confirm button
/// * `on_confirm` - Message when confirmed
/// * `on_cancel` - Message when cancelled
pub fn confirm_modal<'a, M: Clone + 'a>(
    base: Element<'a, M>,
    title: &'a str,
    message: impl Into<String>,
    confirm_label: &'a str,
    on_confirm: M,
    on_cancel: M,
) -> Element<'a, M> {
    let backdrop = container(column![])
        .width(Length::Fill)
        .height(Length::Fill)
        .style(|_theme: &Theme| container::Style {
            background: Some(BACKDROP.into()),
            ..Default::default()
        });

    let body = column![
        text(title.to_string()).size(18),
        text(message.into()).size(14).color(GRAY_500),
        row![
            space::horizontal(),
            button(text("Cancel").size(14))
                .on_press(on_cancel)
                .padding([8.0, 14.0])
                .style(button_secondary),
            button(text(confirm_label.to_string()).size(14))
                .on_press(on_confirm)
                .padding([8.0, 14.0])
                .style(button_danger),
        ]
        .spacing(SPACING_SM),
    ]
    .spacing(SPACING_MD);

    let dialog = container(body)
        .width(Length::Fixed(MODAL_WIDTH_SM))
        .padding(SPACING_MD)
        .style(container_modal);

    stack![base, opaque(backdrop), center(dialog),].into()
}
