//! Interaction mode.
//!
//! # Architecture
//!
//! Instead of separate "adding"/"editing"/"viewing" flags that must be kept
//! mutually exclusive by convention, the current mode is a single tagged
//! variant. Each variant carries exactly the state its dialog needs, so
//! invalid combinations are unrepresentable and switching modes drops any
//! transient draft automatically.

use roster_core::FieldErrors;
use roster_model::{StudentDraft, StudentId};

/// Current interaction mode and its associated dialog state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Mode {
    /// Browsing the list; no dialog open.
    #[default]
    Idle,
    /// Profile dialog for a record.
    Viewing(StudentId),
    /// Edit form for an existing record.
    Editing {
        id: StudentId,
        draft: StudentDraft,
        errors: FieldErrors,
    },
    /// Add form for a new record.
    Adding {
        draft: StudentDraft,
        errors: FieldErrors,
    },
    /// Delete confirmation prompt.
    ConfirmingDelete(StudentId),
}

impl Mode {
    /// Start an add form with an empty draft.
    pub fn adding() -> Self {
        Self::Adding {
            draft: StudentDraft::default(),
            errors: FieldErrors::default(),
        }
    }

    /// Start an edit form pre-filled with a record's current values.
    pub fn editing(id: StudentId, draft: StudentDraft) -> Self {
        Self::Editing {
            id,
            draft,
            errors: FieldErrors::default(),
        }
    }

    /// Mutable access to the draft of an open form, if any.
    pub fn draft_mut(&mut self) -> Option<&mut StudentDraft> {
        match self {
            Self::Editing { draft, .. } | Self::Adding { draft, .. } => Some(draft),
            _ => None,
        }
    }
}
