//! Search and filter bar component.
//!
//! A search input with a city filter dropdown, shown above the student list.

use iced::widget::{pick_list, row, text_input};
use iced::{Element, Length};

use roster_core::CityFilter;

use crate::theme::{SPACING_SM, text_input_default};

/// Search input plus city filter dropdown.
///
/// # Example
/// ```ignore
/// search_filter_bar(
///     &filter.search,
///     "Search by name or email...",
///     |s| Message::Roster(RosterMessage::SearchChanged(s)),
///     city_options(store.records()),
///     filter.city.clone(),
///     |c| Message::Roster(RosterMessage::CityFilterChanged(c)),
/// )
/// ```
pub fn search_filter_bar<'a, M: Clone + 'a>(
    search_value: &str,
    placeholder: &str,
    on_search: impl Fn(String) -> M + 'a,
    city_options: Vec<CityFilter>,
    selected_city: CityFilter,
    on_city: impl Fn(CityFilter) -> M + 'a,
) -> Element<'a, M> {
    let search = text_input(placeholder, search_value)
        .on_input(on_search)
        .padding(10.0)
        .width(Length::Fill)
        .style(text_input_default);

    let filter = pick_list(city_options, Some(selected_city), on_city).padding([8.0, 10.0]);

    row![search, filter].spacing(SPACING_SM).into()
}
