//! The in-memory record store.
//!
//! `RosterStore` owns the authoritative list of student records for a
//! session plus the current selection. It is a plain owned value - consumers
//! receive a reference, and tests instantiate isolated stores.
//!
//! All mutations are synchronous and local; nothing here talks to the
//! network, and nothing is persisted. Mutations against an unknown id are
//! silent no-ops.

use roster_model::{StudentDraft, StudentId, StudentRecord};

use crate::validate::{FieldErrors, ValidationPolicy, validate_draft};

/// Field-wise merge patch for an existing record.
///
/// Only fields that are `Some` are applied; the record id is not patchable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub city: Option<String>,
    pub company: Option<String>,
}

impl StudentPatch {
    fn apply(&self, record: &mut StudentRecord) {
        if let Some(name) = &self.name {
            record.name = name.clone();
        }
        if let Some(email) = &self.email {
            record.email = email.clone();
        }
        if let Some(phone) = &self.phone {
            record.phone = phone.clone();
        }
        if let Some(website) = &self.website {
            record.website = website.clone();
        }
        if let Some(city) = &self.city {
            record.city = city.clone();
        }
        if let Some(company) = &self.company {
            record.company = company.clone();
        }
    }
}

impl From<StudentDraft> for StudentPatch {
    /// A patch that overwrites every field with the draft's values.
    fn from(draft: StudentDraft) -> Self {
        Self {
            name: Some(draft.name),
            email: Some(draft.email),
            phone: Some(draft.phone),
            website: Some(draft.website),
            city: Some(draft.city),
            company: Some(draft.company),
        }
    }
}

/// The authoritative in-memory collection of student records.
#[derive(Debug, Clone)]
pub struct RosterStore {
    records: Vec<StudentRecord>,
    selected: Option<StudentId>,
    next_local_id: u64,
}

impl Default for RosterStore {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            selected: None,
            next_local_id: 1,
        }
    }
}

impl RosterStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the store contents with freshly loaded records.
    ///
    /// Clears the selection and seeds the local id allocator past the
    /// highest loaded id so locally added records never collide.
    pub fn load(&mut self, records: Vec<StudentRecord>) {
        let max_id = records.iter().map(|r| r.id.value()).max().unwrap_or(0);
        self.next_local_id = max_id + 1;
        self.records = records;
        self.selected = None;
    }

    /// Validate a draft and insert it at the front of the collection.
    ///
    /// Returns the freshly allocated id. On validation failure the store is
    /// left untouched and the per-field errors are returned instead.
    pub fn add(
        &mut self,
        draft: &StudentDraft,
        policy: ValidationPolicy,
    ) -> Result<StudentId, FieldErrors> {
        validate_draft(draft, policy)?;

        let id = self.allocate_id();
        self.records.insert(
            0,
            StudentRecord {
                id,
                name: draft.name.clone(),
                email: draft.email.clone(),
                phone: draft.phone.clone(),
                website: draft.website.clone(),
                city: draft.city.clone(),
                company: draft.company.clone(),
            },
        );
        Ok(id)
    }

    /// Merge patch fields into the record with the given id.
    ///
    /// Returns `false` without touching anything when the id is unknown.
    pub fn update(&mut self, id: StudentId, patch: &StudentPatch) -> bool {
        match self.records.iter_mut().find(|r| r.id == id) {
            Some(record) => {
                patch.apply(record);
                true
            }
            None => {
                tracing::debug!(%id, "update for unknown record ignored");
                false
            }
        }
    }

    /// Remove the record with the given id.
    ///
    /// Idempotent: removing an unknown id is a no-op. Removing the selected
    /// record clears the selection.
    pub fn remove(&mut self, id: StudentId) -> bool {
        let before = self.records.len();
        self.records.retain(|r| r.id != id);
        let removed = self.records.len() != before;

        if removed && self.selected == Some(id) {
            self.selected = None;
        }
        if !removed {
            tracing::debug!(%id, "remove for unknown record ignored");
        }
        removed
    }

    /// Set or clear the current selection.
    ///
    /// Selecting an unknown id leaves the selection unchanged.
    pub fn select(&mut self, id: Option<StudentId>) {
        if let Some(id) = id
            && self.get(id).is_none()
        {
            tracing::debug!(%id, "select for unknown record ignored");
            return;
        }
        self.selected = id;
    }

    pub fn selected(&self) -> Option<StudentId> {
        self.selected
    }

    pub fn selected_record(&self) -> Option<&StudentRecord> {
        self.selected.and_then(|id| self.get(id))
    }

    pub fn records(&self) -> &[StudentRecord] {
        &self.records
    }

    pub fn get(&self, id: StudentId) -> Option<&StudentRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Next id that collides with no existing record.
    fn allocate_id(&mut self) -> StudentId {
        while self.records.iter().any(|r| r.id.value() == self.next_local_id) {
            self.next_local_id += 1;
        }
        let id = StudentId::new(self.next_local_id);
        self.next_local_id += 1;
        id
    }
}
