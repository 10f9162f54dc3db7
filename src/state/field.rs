//! Field identity and per-field state

/// The four fields of the registration form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldId {
    Name,
    Email,
    Password,
    Confirm,
}

impl FieldId {
    /// Screen order, used for focus traversal and rendering.
    pub const ALL: [FieldId; 4] = [
        FieldId::Name,
        FieldId::Email,
        FieldId::Password,
        FieldId::Confirm,
    ];

    /// Label shown on the field's border.
    pub fn label(self) -> &'static str {
        match self {
            FieldId::Name => "Full name",
            FieldId::Email => "Email",
            FieldId::Password => "Password",
            FieldId::Confirm => "Confirm password",
        }
    }

    /// Secret fields render masked by default.
    pub fn is_secret(self) -> bool {
        matches!(self, FieldId::Password | FieldId::Confirm)
    }
}

/// A field's current value and the error derived from it.
///
/// The error is only ever written by the reducer, from the validators, so it
/// always reflects the value(s) it was computed from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldState {
    pub value: String,
    pub error: Option<&'static str>,
}

impl FieldState {
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}
