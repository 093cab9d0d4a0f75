//! Form field components.
//!
//! Input fields with labels, validation, and error display.

use iced::widget::{column, container, text, text_input};
use iced::{Element, Length, Theme};

use crate::theme::{GRAY_500, SPACING_XS, text_input_default, text_input_error};

/// Creates a form field with label and optional error message.
///
/// # Arguments
///
/// * `label` - Field label text
/// * `value` - Current field value
/// * `placeholder` - Placeholder text
/// * `on_change` - Message factory for value changes
/// * `error` - Optional error message to display
///
/// # Example
///
/// ```rust,ignore
/// use roster_gui::component::form_field;
///
/// let field = form_field(
///     "Name *",
///     &draft.name,
///     "Student Name",
///     |v| Message::Form(FormMessage::FieldChanged(FormField::Name, v)),
///     errors.get(Field::Name),
/// );
/// ```
pub fn form_field<'a, M: Clone + 'a>(
    label: &'a str,
    value: &'a str,
    placeholder: &'a str,
    on_change: impl Fn(String) -> M + 'a,
    error: Option<&'a str>,
) -> Element<'a, M> {
    let has_error = error.is_some();

    let label_text = text(label).size(13).color(GRAY_500);

    let input = text_input(placeholder, value)
        .on_input(on_change)
        .padding(10.0)
        .width(Length::Fill)
        .style(if has_error {
            text_input_error
        } else {
            text_input_default
        });

    let mut content = column![label_text, input].spacing(SPACING_XS);

    if let Some(err) = error {
        let error_text = text(err).size(12).style(|theme: &Theme| text::Style {
            color: Some(theme.extended_palette().danger.base.color),
        });
        content = content.push(error_text);
    }

    container(content).width(Length::Fill).into()
}
