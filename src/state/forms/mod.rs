//! Form domain layer
//!
//! Field layout, per-field state read from the document, and focus
//! handling for the registration form.

mod field;
mod form_state;

pub use field::{FieldSpec, FieldState, REGISTRATION_FIELDS};
pub use form_state::{Form, FormButton, FormSnapshot, RegistrationForm};
