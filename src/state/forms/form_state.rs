//! Registration form focus and snapshot

use super::field::{FieldSpec, FieldState, FIELD_COUNT, REGISTRATION_FIELDS};
use crate::document::{Document, ElementId, FieldId, MessageKind};

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
}

/// Buttons below the fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormButton {
    #[default]
    Submit,
    Clear,
}

impl FormButton {
    pub fn toggle(&mut self) {
        *self = match self {
            Self::Submit => Self::Clear,
            Self::Clear => Self::Submit,
        };
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Submit => "Register",
            Self::Clear => "Clear",
        }
    }
}

/// Focus state of the registration form
#[derive(Debug, Clone, Default)]
pub struct RegistrationForm {
    /// Index into `REGISTRATION_FIELDS`; one past the end is the buttons row
    pub active_field_index: usize,
    pub selected_button: FormButton,
}

impl RegistrationForm {
    const BUTTONS_ROW: usize = FIELD_COUNT;

    pub fn new() -> Self {
        Self::default()
    }

    /// Field under focus, `None` on the buttons row
    pub fn active_spec(&self) -> Option<&'static FieldSpec> {
        REGISTRATION_FIELDS.get(self.active_field_index)
    }

    pub fn active_field_id(&self) -> Option<FieldId> {
        self.active_spec().map(|spec| spec.id)
    }

    /// Returns true if the buttons row is currently active
    pub fn is_buttons_row_active(&self) -> bool {
        self.active_field_index == Self::BUTTONS_ROW
    }

    pub fn is_active(&self, id: FieldId) -> bool {
        self.active_field_id() == Some(id)
    }

    /// Move focus to the first field
    pub fn reset_focus(&mut self) {
        self.active_field_index = 0;
        self.selected_button = FormButton::default();
    }
}

impl Form for RegistrationForm {
    fn field_count(&self) -> usize {
        FIELD_COUNT + 1 // fields, buttons
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(Self::BUTTONS_ROW);
    }
}

/// Everything the form currently shows, read in one pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSnapshot {
    pub fields: Vec<FieldState>,
    /// Empty unless the date of birth is a valid date
    pub age: Option<i32>,
    pub terms_accepted: bool,
    pub submit_enabled: bool,
    pub email_check: String,
    pub message: Option<(String, MessageKind)>,
}

impl FormSnapshot {
    pub fn capture(doc: &dyn Document) -> Self {
        let fields = REGISTRATION_FIELDS
            .iter()
            .map(|spec| FieldState::capture(doc, spec))
            .collect();

        let age = doc
            .value(ElementId::Age)
            .and_then(|v| v.trim().parse::<i32>().ok());

        let message = doc
            .text(ElementId::OutputMessage)
            .filter(|text| !text.is_empty())
            .zip(doc.message_kind(ElementId::OutputMessage));

        Self {
            fields,
            age,
            terms_accepted: doc.is_checked(FieldId::Terms.input()).unwrap_or(false),
            submit_enabled: !doc.is_disabled(ElementId::SubmitBtn).unwrap_or(true),
            email_check: doc.text(ElementId::EmailCheck).unwrap_or_default(),
            message,
        }
    }

    pub fn field(&self, id: FieldId) -> Option<&FieldState> {
        self.fields.iter().find(|f| f.id == id)
    }
}
