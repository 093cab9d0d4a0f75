//! Student profile dialog.
//!
//! Read-only detail view for the selected record, with "Not provided"
//! fallbacks for optional fields and an open-in-browser action for the
//! website.

use iced::widget::{button, column, row, text};
use iced::{Alignment, Element};
use iced_fonts::lucide;

use roster_model::StudentRecord;

use crate::component::{avatar, modal};
use crate::message::{Message, RosterMessage};
use crate::theme::{GRAY_500, SPACING_MD, SPACING_SM, SPACING_XS, button_ghost, button_secondary};

/// Render the profile dialog over the base view.
pub fn view_profile<'a>(
    base: Element<'a, Message>,
    record: &'a StudentRecord,
) -> Element<'a, Message> {
    let city = if record.city.is_empty() {
        "No city"
    } else {
        record.city.as_str()
    };

    let header = row![
        avatar(record.initials(), 56.0),
        column![text(&record.name).size(18), text(city).size(13).color(GRAY_500)].spacing(2.0),
    ]
    .spacing(SPACING_MD)
    .align_y(Alignment::Center);

    let website: Element<'_, Message> = match record.website_url() {
        Some(url) => button(
            row![
                text(&record.website).size(14),
                lucide::external_link().size(14)
            ]
            .spacing(SPACING_XS)
            .align_y(Alignment::Center),
        )
        .on_press(Message::Roster(RosterMessage::WebsiteClicked(url)))
        .padding([2.0, 4.0])
        .style(button_ghost)
        .into(),
        None => text("Not provided").size(14).into(),
    };

    let details = column![
        profile_row("Email:", text(&record.email).size(14).into()),
        profile_row("Phone:", fallback_text(&record.phone)),
        profile_row("Website:", website),
        profile_row("Company / College:", fallback_text(&record.company)),
    ]
    .spacing(SPACING_SM);

    let footer = text("Local view only - provider data plus this session's edits.")
        .size(12)
        .color(GRAY_500);

    let content = column![header, details, footer].spacing(SPACING_MD);

    let close = button(text("Close").size(14))
        .on_press(Message::Roster(RosterMessage::ProfileClosed))
        .padding([8.0, 14.0])
        .style(button_secondary);

    modal(
        base,
        "Student Profile",
        content.into(),
        Message::Roster(RosterMessage::ProfileClosed),
        vec![close.into()],
    )
}

/// Label/value line in the details section.
fn profile_row<'a>(label: &'a str, value: Element<'a, Message>) -> Element<'a, Message> {
    row![text(label).size(14).color(GRAY_500).width(150.0), value]
        .spacing(SPACING_SM)
        .align_y(Alignment::Center)
        .into()
}

fn fallback_text(value: &str) -> Element<'_, Message> {
    let shown = if value.is_empty() { "Not provided" } else { value };
    text(shown).size(14).into()
}
