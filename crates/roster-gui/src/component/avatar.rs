//! Avatar component.
//!
//! Circular initials badge used in the student cards and the profile dialog.

use iced::widget::{container, text};
use iced::{Alignment, Element, Length, Theme};

use crate::theme::BORDER_RADIUS_FULL;

/// Circular badge showing a student's initials.
pub fn avatar<'a, M: 'a>(initials: String, size: f32) -> Element<'a, M> {
    container(
        text(initials)
            .size(size * 0.38)
            .style(|theme: &Theme| text::Style {
                color: Some(theme.extended_palette().primary.base.text),
            }),
    )
    .width(Length::Fixed(size))
    .height(Length::Fixed(size))
    .align_x(Alignment::Center)
    .align_y(Alignment::Center)
    .style(|theme: &Theme| iced::widget::container::Style {
        background: Some(theme.extended_palette().primary.base.color.into()),
        border: iced::Border {
            radius: BORDER_RADIUS_FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    })
    .into()
}
