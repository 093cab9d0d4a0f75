//! Dialog views layered over the roster screen.

mod confirm_delete;
mod profile;
mod student_form;

pub use confirm_delete::view_confirm_delete;
pub use profile::view_profile;
pub use student_form::{FormKind, view_student_form};
