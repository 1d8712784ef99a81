//! Registration form validation
//!
//! - `rules`: per-field predicates and messages
//! - `age`: date of birth parsing and age arithmetic
//! - `validator`: `FormValidator`, which applies both to a `Document`

mod age;
pub mod rules;
mod validator;

pub use age::Age;
pub use rules::Rules;
pub use validator::{FormEvent, FormValidator, ValidationResult};
