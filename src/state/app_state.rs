//! Application state definitions

use super::forms::{FormSnapshot, RegistrationForm};
use crate::document::MemoryDocument;

/// State shared between key handling and rendering
#[derive(Debug, Clone)]
pub struct AppState {
    /// Document the form lives in
    pub document: MemoryDocument,
    /// Focus within the form
    pub form: RegistrationForm,
    /// One-line feedback for the status bar
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            document: MemoryDocument::registration(),
            form: RegistrationForm::new(),
            status_message: None,
        }
    }
}

impl AppState {
    pub fn snapshot(&self) -> FormSnapshot {
        FormSnapshot::capture(&self.document)
    }
}
