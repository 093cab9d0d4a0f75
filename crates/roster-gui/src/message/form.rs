//! Add/edit form messages.

/// Editable fields of the student form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Phone,
    Website,
    City,
    Company,
}

/// Messages from the add/edit dialog.
#[derive(Debug, Clone)]
pub enum FormMessage {
    /// A field's text changed.
    FieldChanged(FormField, String),

    /// Submit button pressed.
    Submitted,

    /// Cancel button or close pressed.
    Cancelled,
}
