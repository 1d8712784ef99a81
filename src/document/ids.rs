//! Element and field identifiers

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One of the validated registration fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    Name,
    Email,
    Dob,
    Password,
    ConfirmPassword,
    Terms,
}

impl FieldId {
    /// All fields in form order
    pub const ALL: [FieldId; 6] = [
        FieldId::Name,
        FieldId::Email,
        FieldId::Dob,
        FieldId::Password,
        FieldId::ConfirmPassword,
        FieldId::Terms,
    ];

    /// Fields validated individually on submit (terms is checked separately)
    pub const TEXT: [FieldId; 5] = [
        FieldId::Name,
        FieldId::Email,
        FieldId::Dob,
        FieldId::Password,
        FieldId::ConfirmPassword,
    ];

    /// Document identifier of the field's input
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Dob => "dob",
            Self::Password => "password",
            Self::ConfirmPassword => "confirmPassword",
            Self::Terms => "terms",
        }
    }

    /// Element holding the field's value
    pub fn input(self) -> ElementId {
        ElementId::Field(self)
    }

    /// Element holding the field's inline error text
    pub fn error_node(self) -> ElementId {
        ElementId::Error(self)
    }

    pub fn is_text(&self) -> bool {
        !matches!(self, Self::Terms)
    }
}

/// Address of an element in the registration document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementId {
    Form,
    Field(FieldId),
    Error(FieldId),
    EmailCheck,
    Age,
    OutputMessage,
    SubmitBtn,
}

impl ElementId {
    /// Every element of the full registration markup
    pub fn all() -> Vec<ElementId> {
        let mut ids = vec![ElementId::Form];
        ids.extend(FieldId::ALL.iter().map(|f| f.input()));
        ids.extend(FieldId::ALL.iter().map(|f| f.error_node()));
        ids.extend([
            ElementId::EmailCheck,
            ElementId::Age,
            ElementId::OutputMessage,
            ElementId::SubmitBtn,
        ]);
        ids
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Form => f.write_str("registerForm"),
            Self::Field(field) => f.write_str(field.as_str()),
            Self::Error(field) => write!(f, "{}Error", field.as_str()),
            Self::EmailCheck => f.write_str("emailCheck"),
            Self::Age => f.write_str("age"),
            Self::OutputMessage => f.write_str("outputMessage"),
            Self::SubmitBtn => f.write_str("submitBtn"),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown element id '{0}'")]
pub struct ParseElementIdError(pub String);

impl FromStr for ElementId {
    type Err = ParseElementIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let field = |name: &str| FieldId::ALL.into_iter().find(|f| f.as_str() == name);

        match s {
            "registerForm" => return Ok(Self::Form),
            "emailCheck" => return Ok(Self::EmailCheck),
            "age" => return Ok(Self::Age),
            "outputMessage" => return Ok(Self::OutputMessage),
            "submitBtn" => return Ok(Self::SubmitBtn),
            _ => {}
        }

        if let Some(f) = field(s) {
            return Ok(Self::Field(f));
        }
        s.strip_suffix("Error")
            .and_then(field)
            .map(Self::Error)
            .ok_or_else(|| ParseElementIdError(s.to_string()))
    }
}

/// How an input presents its value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Text,
    Password,
    Date,
    Checkbox,
}

impl InputMode {
    /// Masking flip used by the visibility toggle; other modes are left alone
    pub fn toggled(self) -> Self {
        match self {
            Self::Password => Self::Text,
            Self::Text => Self::Password,
            other => other,
        }
    }
}

/// Class applied to the aggregate message after a submit attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}
