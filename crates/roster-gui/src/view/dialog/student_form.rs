//! Add/edit student form dialog.
//!
//! Two-column form with per-field validation errors. The same dialog serves
//! both the add and edit flows; only the title and submit label differ.

use iced::Element;
use iced::widget::{button, column, row, text};

use roster_core::{Field, FieldErrors};
use roster_model::StudentDraft;

use crate::component::{form_field, modal};
use crate::message::{FormField, FormMessage, Message};
use crate::theme::{SPACING_MD, SPACING_SM, button_primary, button_secondary};

/// Which flow the form dialog is serving.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    Add,
    Edit,
}

impl FormKind {
    fn title(self) -> &'static str {
        match self {
            Self::Add => "Add New Student",
            Self::Edit => "Edit Student",
        }
    }

    fn submit_label(self) -> &'static str {
        match self {
            Self::Add => "Add Student",
            Self::Edit => "Save Changes",
        }
    }
}

/// Render the form dialog over the base view.
pub fn view_student_form<'a>(
    base: Element<'a, Message>,
    draft: &'a StudentDraft,
    errors: &'a FieldErrors,
    kind: FormKind,
) -> Element<'a, Message> {
    let content = column![
        row![
            field(
                FormField::Name,
                "Name *",
                &draft.name,
                "Student Name",
                errors,
                Some(Field::Name),
            ),
            field(
                FormField::Email,
                "Email *",
                &draft.email,
                "student@example.com",
                errors,
                Some(Field::Email),
            ),
        ]
        .spacing(SPACING_MD),
        row![
            field(
                FormField::Phone,
                "Phone",
                &draft.phone,
                "+91 98765 43210",
                errors,
                None,
            ),
            field(
                FormField::Website,
                "Website",
                &draft.website,
                "student-portfolio.com",
                errors,
                None,
            ),
        ]
        .spacing(SPACING_MD),
        row![
            field(
                FormField::City,
                "City *",
                &draft.city,
                "Coimbatore",
                errors,
                Some(Field::City),
            ),
            field(
                FormField::Company,
                "Company / College",
                &draft.company,
                "XYZ College",
                errors,
                None,
            ),
        ]
        .spacing(SPACING_MD),
    ]
    .spacing(SPACING_SM);

    let cancel = button(text("Cancel").size(14))
        .on_press(Message::Form(FormMessage::Cancelled))
        .padding([8.0, 14.0])
        .style(button_secondary);

    let submit = button(text(kind.submit_label()).size(14))
        .on_press(Message::Form(FormMessage::Submitted))
        .padding([8.0, 14.0])
        .style(button_primary);

    modal(
        base,
        kind.title(),
        content.into(),
        Message::Form(FormMessage::Cancelled),
        vec![cancel.into(), submit.into()],
    )
}

/// One labelled input wired to a draft field, with its validation error.
fn field<'a>(
    form_field_id: FormField,
    label: &'a str,
    value: &'a str,
    placeholder: &'a str,
    errors: &'a FieldErrors,
    error_field: Option<Field>,
) -> Element<'a, Message> {
    form_field(
        label,
        value,
        placeholder,
        move |v| Message::Form(FormMessage::FieldChanged(form_field_id, v)),
        error_field.and_then(|f| errors.get(f)),
    )
}
