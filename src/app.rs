//! Application state and core logic
//!
//! Translates key presses into form events and hands them to the
//! validator.

use crate::config::RegFormConfig;
use crate::document::{Document, ElementId, FieldId};
use crate::platform;
use crate::state::{AppState, Form, FormButton, FormSnapshot};
use crate::validation::{FormEvent, FormValidator, ValidationResult};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Rules applied to the document on every event
    validator: FormValidator,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance with a freshly loaded form
    pub fn new(config: &RegFormConfig) -> Self {
        let validator = FormValidator::new(config.rules());
        let mut state = AppState::default();

        if config.reveal_passwords() {
            for field in [FieldId::Password, FieldId::ConfirmPassword] {
                FormValidator::toggle_visibility(&mut state.document, field.input());
            }
        }

        validator.init(&mut state.document);

        Self {
            state,
            validator,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn snapshot(&self) -> FormSnapshot {
        self.state.snapshot()
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Clear any status messages on key press
        self.state.status_message = None;

        if key.code == KeyCode::Esc {
            self.quit = true;
            return Ok(());
        }

        if platform::is_shortcut(key.modifiers) {
            match key.code {
                KeyCode::Char('s') => {
                    self.submit();
                }
                KeyCode::Char('t') => self.toggle_active_visibility(),
                KeyCode::Char('r') => self.clear(),
                _ => {}
            }
            return Ok(());
        }

        match key.code {
            KeyCode::Tab | KeyCode::Down => self.focus_next(),
            KeyCode::BackTab | KeyCode::Up => self.focus_prev(),
            _ if self.state.form.is_buttons_row_active() => self.handle_buttons_key(key),
            _ => self.handle_field_key(key),
        }

        Ok(())
    }

    fn dispatch(&mut self, event: FormEvent) -> Option<ValidationResult> {
        self.validator
            .handle_event(&mut self.state.document, event)
    }

    /// Blur the field focus is leaving
    fn leave(&mut self, field: Option<FieldId>) {
        if let Some(field) = field.filter(FieldId::is_text) {
            self.dispatch(FormEvent::Blur(field));
        }
    }

    fn focus_next(&mut self) {
        let leaving = self.state.form.active_field_id();
        self.state.form.next_field();
        self.leave(leaving);
    }

    fn focus_prev(&mut self) {
        let leaving = self.state.form.active_field_id();
        self.state.form.prev_field();
        self.leave(leaving);
    }

    fn handle_field_key(&mut self, key: KeyEvent) {
        let Some(field) = self.state.form.active_field_id() else {
            return;
        };

        if field == FieldId::Terms {
            match key.code {
                KeyCode::Char(' ') => {
                    let checked = self.state.document.is_checked(field.input());
                    self.state
                        .document
                        .set_checked(field.input(), !checked.unwrap_or(false));
                    self.dispatch(FormEvent::Change(field));
                }
                KeyCode::Enter => self.focus_next(),
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Char(c) => {
                if self.state.document.push_char(field.input(), c) {
                    self.dispatch(FormEvent::Input(field));
                }
            }
            KeyCode::Backspace => {
                if self.state.document.pop_char(field.input()) {
                    self.dispatch(FormEvent::Input(field));
                }
            }
            KeyCode::Enter => self.focus_next(),
            _ => {}
        }
    }

    fn handle_buttons_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Left | KeyCode::Right => self.state.form.selected_button.toggle(),
            KeyCode::Enter | KeyCode::Char(' ') => match self.state.form.selected_button {
                FormButton::Submit => {
                    let disabled = self
                        .state
                        .document
                        .is_disabled(ElementId::SubmitBtn)
                        .unwrap_or(true);
                    if disabled {
                        self.state.status_message =
                            Some("Complete every field to register".to_string());
                    } else {
                        self.submit();
                    }
                }
                FormButton::Clear => self.clear(),
            },
            _ => {}
        }
    }

    /// Fire the form's submit event
    fn submit(&mut self) -> Option<ValidationResult> {
        let result = self.dispatch(FormEvent::Submit);
        if let Some(result) = &result {
            tracing::debug!("Submit handled: valid={}", result.is_valid);
        }
        result
    }

    fn clear(&mut self) {
        self.validator.clear_form(&mut self.state.document);
        self.state.form.reset_focus();
        self.state.status_message = Some("Form cleared".to_string());
    }

    fn toggle_active_visibility(&mut self) {
        match self.state.form.active_spec() {
            Some(spec) if spec.is_secret() => {
                FormValidator::toggle_visibility(&mut self.state.document, spec.id.input());
            }
            _ => {
                self.state.status_message =
                    Some("Only password fields can be revealed".to_string());
            }
        }
    }
}
