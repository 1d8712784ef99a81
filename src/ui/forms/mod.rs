//! Form rendering module
//!
//! - `field_renderer`: field, checkbox and error line rendering
//! - `registration_form`: the registration form screen

mod field_renderer;
mod registration_form;

pub use registration_form::draw_registration;
