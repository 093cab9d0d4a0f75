//! Roster list view.
//!
//! The main screen: header with count and Add action, search/filter
//! toolbar, and the scrollable list of student cards with View/Edit/Delete
//! actions.

use iced::widget::{button, column, container, row, scrollable, space, text};
use iced::{Alignment, Element, Length, Theme};
use iced_fonts::lucide;

use roster_core::{city_options, filter_records};
use roster_model::StudentRecord;

use crate::component::{EmptyState, ErrorState, LoadingState, avatar, search_filter_bar};
use crate::constants::APP_TITLE;
use crate::message::{Message, RosterMessage};
use crate::state::{AppState, LoadState};
use crate::theme::{
    GRAY_500, PRIMARY_500, SPACING_LG, SPACING_MD, SPACING_SM, SPACING_XS, button_danger,
    button_ghost, button_primary, button_secondary, container_card,
};

/// Render the roster screen.
pub fn view_roster(state: &AppState) -> Element<'_, Message> {
    let body: Element<'_, Message> = match &state.load {
        LoadState::Loading => LoadingState::new("Loading students...")
            .description("Fetching the roster from the student provider")
            .centered()
            .view(),
        LoadState::Failed(message) => ErrorState::new("Could not load students")
            .message(message.clone())
            .centered()
            .view(),
        LoadState::Ready => view_list(state),
    };

    container(column![view_header(state), body].spacing(SPACING_MD))
        .padding(SPACING_LG)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Title, student count, and the Add action.
fn view_header(state: &AppState) -> Element<'_, Message> {
    let heading = column![
        text(APP_TITLE).size(24),
        text(format!("Students ({})", state.roster.len()))
            .size(13)
            .color(GRAY_500),
    ]
    .spacing(2.0);

    let add_button = button(
        row![lucide::plus().size(16), text("Add Student").size(14)]
            .spacing(SPACING_XS)
            .align_y(Alignment::Center),
    )
    .on_press(Message::Roster(RosterMessage::AddClicked))
    .padding([8.0, 14.0])
    .style(button_primary);

    row![heading, space::horizontal(), add_button]
        .align_y(Alignment::Center)
        .into()
}

/// Toolbar plus the filtered card list.
fn view_list(state: &AppState) -> Element<'_, Message> {
    let toolbar = search_filter_bar(
        &state.filter.search,
        "Search by name or email...",
        |s| Message::Roster(RosterMessage::SearchChanged(s)),
        city_options(state.roster.records()),
        state.filter.city.clone(),
        |c| Message::Roster(RosterMessage::CityFilterChanged(c)),
    );

    let visible = filter_records(state.roster.records(), &state.filter);

    let list: Element<'_, Message> = if visible.is_empty() {
        let description = if state.roster.is_empty() {
            "The roster is empty for this session."
        } else {
            "Try a different search or city filter."
        };
        EmptyState::new(lucide::users().size(48), "No students found.")
            .description(description)
            .centered()
            .view()
    } else {
        let mut cards = column![].spacing(SPACING_SM);
        for record in visible {
            let selected = state.roster.selected() == Some(record.id);
            cards = cards.push(view_student_card(record, selected));
        }
        scrollable(cards).height(Length::Fill).into()
    };

    column![toolbar, list]
        .spacing(SPACING_MD)
        .height(Length::Fill)
        .into()
}

/// One student card: avatar, identity lines, and row actions.
fn view_student_card(record: &StudentRecord, selected: bool) -> Element<'_, Message> {
    let city = if record.city.is_empty() {
        "Unknown city"
    } else {
        record.city.as_str()
    };
    let company = if record.company.is_empty() {
        "No company"
    } else {
        record.company.as_str()
    };

    let info = column![
        text(&record.name).size(15),
        text(&record.email).size(13).color(GRAY_500),
        text(format!("{city} • {company}")).size(12).color(GRAY_500),
    ]
    .spacing(2.0)
    .width(Length::Fill);

    let actions = row![
        button(
            row![lucide::eye().size(14), text("View").size(13)]
                .spacing(SPACING_XS)
                .align_y(Alignment::Center)
        )
        .on_press(Message::Roster(RosterMessage::ViewClicked(record.id)))
        .padding([6.0, 10.0])
        .style(button_ghost),
        button(
            row![lucide::pencil().size(14), text("Edit").size(13)]
                .spacing(SPACING_XS)
                .align_y(Alignment::Center)
        )
        .on_press(Message::Roster(RosterMessage::EditClicked(record.id)))
        .padding([6.0, 10.0])
        .style(button_secondary),
        button(
            row![lucide::trash().size(14), text("Delete").size(13)]
                .spacing(SPACING_XS)
                .align_y(Alignment::Center)
        )
        .on_press(Message::Roster(RosterMessage::DeleteClicked(record.id)))
        .padding([6.0, 10.0])
        .style(button_danger),
    ]
    .spacing(SPACING_XS);

    let content = row![avatar(record.initials(), 40.0), info, actions]
        .spacing(SPACING_MD)
        .align_y(Alignment::Center);

    container(content)
        .padding(SPACING_MD)
        .width(Length::Fill)
        .style(move |theme: &Theme| {
            let mut style = container_card(theme);
            if selected {
                style.border.color = PRIMARY_500;
            }
            style
        })
        .into()
}
