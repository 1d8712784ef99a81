//! Form field value objects

use crate::document::{Document, FieldId, InputMode};

/// Static description of a registration field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub id: FieldId,
    pub label: &'static str,
    pub mode: InputMode,
}

pub const FIELD_COUNT: usize = 6;

/// Registration fields in display order
pub static REGISTRATION_FIELDS: [FieldSpec; FIELD_COUNT] = [
    FieldSpec {
        id: FieldId::Name,
        label: "Name",
        mode: InputMode::Text,
    },
    FieldSpec {
        id: FieldId::Email,
        label: "Email",
        mode: InputMode::Text,
    },
    FieldSpec {
        id: FieldId::Dob,
        label: "Date of Birth (YYYY-MM-DD)",
        mode: InputMode::Date,
    },
    FieldSpec {
        id: FieldId::Password,
        label: "Password",
        mode: InputMode::Password,
    },
    FieldSpec {
        id: FieldId::ConfirmPassword,
        label: "Confirm Password",
        mode: InputMode::Password,
    },
    FieldSpec {
        id: FieldId::Terms,
        label: "I accept the terms and conditions",
        mode: InputMode::Checkbox,
    },
];

impl FieldSpec {
    /// Password inputs can be revealed
    pub fn is_secret(&self) -> bool {
        self.mode == InputMode::Password
    }
}

/// Current state of one field as read from the document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldState {
    pub id: FieldId,
    pub value: String,
    pub has_error: bool,
    pub error_message: String,
    /// Present mode of the input, which differs from the spec once toggled
    pub mode: InputMode,
}

impl FieldState {
    pub fn capture(doc: &dyn Document, spec: &FieldSpec) -> Self {
        let input = spec.id.input();
        let value = if spec.id == FieldId::Terms {
            String::new()
        } else {
            doc.value(input).unwrap_or_default()
        };

        Self {
            id: spec.id,
            value,
            has_error: doc.has_error_marker(input),
            error_message: doc.text(spec.id.error_node()).unwrap_or_default(),
            mode: doc.input_mode(input).unwrap_or(spec.mode),
        }
    }

    /// Value as it should be drawn, masked while in password mode
    pub fn display_value(&self) -> String {
        match self.mode {
            InputMode::Password => "•".repeat(self.value.chars().count()),
            _ => self.value.clone(),
        }
    }
}
