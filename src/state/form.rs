//! Registration form state

use super::field::{FieldId, FieldState};

/// The whole form: one state per field plus the submission flag.
///
/// This is a plain value. The app layer holds the current one and replaces
/// it with the reducer's output on every event; nothing else mutates it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub name: FieldState,
    pub email: FieldState,
    pub password: FieldState,
    pub confirm: FieldState,
    pub submitting: bool,
}

impl FormState {
    pub fn field(&self, id: FieldId) -> &FieldState {
        match id {
            FieldId::Name => &self.name,
            FieldId::Email => &self.email,
            FieldId::Password => &self.password,
            FieldId::Confirm => &self.confirm,
        }
    }

    pub(crate) fn field_mut(&mut self, id: FieldId) -> &mut FieldState {
        match id {
            FieldId::Name => &mut self.name,
            FieldId::Email => &mut self.email,
            FieldId::Password => &mut self.password,
            FieldId::Confirm => &mut self.confirm,
        }
    }

    /// True when no field carries an error.
    pub fn is_valid(&self) -> bool {
        FieldId::ALL.iter().all(|&id| self.field(id).error.is_none())
    }

    /// The submit control is enabled only when every field has content and
    /// no submission is underway.
    pub fn can_submit(&self) -> bool {
        !self.submitting && FieldId::ALL.iter().all(|&id| !self.field(id).is_empty())
    }
}
