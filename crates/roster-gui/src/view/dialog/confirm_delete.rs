//! Delete confirmation dialog.

use iced::Element;

use roster_model::StudentRecord;

use crate::component::confirm_modal;
use crate::message::{Message, RosterMessage};

/// Render the delete confirmation over the base view.
pub fn view_confirm_delete<'a>(
    base: Element<'a, Message>,
    record: Option<&'a StudentRecord>,
) -> Element<'a, Message> {
    let message = match record {
        Some(record) => format!(
            "Delete {} from this session? Changes are local and never sent to the provider.",
            record.name
        ),
        None => "Delete this student locally?".to_string(),
    };

    confirm_modal(
        base,
        "Delete Student",
        message,
        "Delete",
        Message::Roster(RosterMessage::DeleteConfirmed),
        Message::Roster(RosterMessage::DeleteCancelled),
    )
}
