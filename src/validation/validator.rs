//! Form validator
//!
//! Applies the field rules to values read from a `Document` and writes
//! the derived state back: inline error annotations, the submit button's
//! disabled flag, the computed age and the aggregate message.

use super::age::{calculate_age, Age};
use super::rules::{self, Rules};
use crate::document::{Document, ElementId, FieldId, MessageKind};
use chrono::NaiveDate;

/// Events the validator reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormEvent {
    Input(FieldId),
    Blur(FieldId),
    Change(FieldId),
    Submit,
}

/// Outcome of a submit attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub message: &'static str,
}

impl ValidationResult {
    fn new(is_valid: bool) -> Self {
        let message = if is_valid {
            rules::REGISTRATION_SUCCESS
        } else {
            rules::REGISTRATION_FAILED
        };
        Self { is_valid, message }
    }

    pub fn kind(&self) -> MessageKind {
        if self.is_valid {
            MessageKind::Success
        } else {
            MessageKind::Error
        }
    }
}

fn local_today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub struct FormValidator {
    rules: Rules,
    today: fn() -> NaiveDate,
}

impl Default for FormValidator {
    fn default() -> Self {
        Self::new(Rules::default())
    }
}

impl FormValidator {
    pub fn new(rules: Rules) -> Self {
        Self {
            rules,
            today: local_today,
        }
    }

    /// Replace the clock used for age calculation
    pub fn with_today(mut self, today: fn() -> NaiveDate) -> Self {
        self.today = today;
        self
    }

    /// Prepare a freshly loaded form: submit starts disabled
    pub fn init(&self, doc: &mut dyn Document) {
        self.update_submit_state(doc);
    }

    /// Message shown when `field` is invalid, `None` when it is valid.
    ///
    /// Text values are trimmed before every rule. Confirm-password compares
    /// its trimmed value against the password exactly as typed, so a
    /// password with surrounding whitespace can never be confirmed.
    fn field_error(&self, doc: &dyn Document, field: FieldId) -> Option<&'static str> {
        let text = |id: FieldId| doc.value(id.input()).unwrap_or_default();

        let (valid, message) = match field {
            FieldId::Name => (rules::is_present(&text(field)), rules::NAME_REQUIRED),
            FieldId::Email => (rules::is_email(text(field).trim()), rules::INVALID_EMAIL),
            FieldId::Dob => (rules::is_present(&text(field)), rules::DOB_REQUIRED),
            FieldId::Password => (
                rules::is_strong_password(text(field).trim()),
                rules::WEAK_PASSWORD,
            ),
            FieldId::ConfirmPassword => (
                text(field).trim() == text(FieldId::Password),
                rules::PASSWORDS_MISMATCH,
            ),
            FieldId::Terms => (
                doc.is_checked(field.input()).unwrap_or(false),
                rules::TERMS_REQUIRED,
            ),
        };

        (!valid).then_some(message)
    }

    fn show_field_error(doc: &mut dyn Document, field: FieldId, message: &str) {
        if doc.contains(field.error_node()) {
            doc.set_text(field.error_node(), message);
            doc.set_error_marker(field.input(), true);
        }
    }

    fn clear_field_error(doc: &mut dyn Document, field: FieldId) {
        if doc.contains(field.error_node()) {
            doc.set_text(field.error_node(), "");
            doc.set_error_marker(field.input(), false);
        }
    }

    /// Evaluate one field's rule and set or clear its error annotation
    pub fn validate_field(&self, doc: &mut dyn Document, field: FieldId) {
        if !doc.contains(field.input()) {
            return;
        }

        match self.field_error(doc, field) {
            Some(message) => {
                tracing::debug!("Field {} invalid: {message}", field.as_str());
                Self::show_field_error(doc, field, message);
            }
            None => Self::clear_field_error(doc, field),
        }
    }

    /// Re-evaluate every rule from the raw values, ignoring any annotation
    pub fn is_form_completely_valid(&self, doc: &dyn Document) -> bool {
        FieldId::ALL
            .iter()
            .all(|&field| self.field_error(doc, field).is_none())
    }

    pub fn update_submit_state(&self, doc: &mut dyn Document) {
        let valid = self.is_form_completely_valid(doc);
        doc.set_disabled(ElementId::SubmitBtn, !valid);
    }

    /// Submit handler.
    ///
    /// Annotates every field, sets the aggregate message and refreshes the
    /// submit button. Never submits anything anywhere.
    pub fn validate_form(&self, doc: &mut dyn Document) -> ValidationResult {
        for field in FieldId::TEXT {
            self.validate_field(doc, field);
        }

        let has_error = FieldId::TEXT
            .iter()
            .any(|f| doc.has_error_marker(f.input()));

        self.validate_field(doc, FieldId::Terms);
        let terms_checked = doc.is_checked(FieldId::Terms.input()).unwrap_or(false);

        let result = ValidationResult::new(!has_error && terms_checked);
        doc.set_text(ElementId::OutputMessage, result.message);
        doc.set_message_kind(ElementId::OutputMessage, Some(result.kind()));

        if result.is_valid {
            tracing::info!("Registration form accepted");
        } else {
            tracing::info!(has_error, terms_checked, "Registration form rejected");
        }

        self.update_submit_state(doc);
        result
    }

    /// Write the age derived from the date of birth into the age field
    pub fn calculate_age(&self, doc: &mut dyn Document) -> Age {
        let dob = doc.value(FieldId::Dob.input()).unwrap_or_default();
        let age = calculate_age(&dob, (self.today)(), &self.rules.dob_formats);
        doc.set_value(ElementId::Age, &age.to_string());
        age
    }

    /// Flip an input between masked and plain text
    pub fn toggle_visibility(doc: &mut dyn Document, id: ElementId) {
        if let Some(mode) = doc.input_mode(id) {
            doc.set_input_mode(id, mode.toggled());
        }
    }

    /// Show the checkmark while the email, as typed, matches the pattern
    pub fn update_email_check(doc: &mut dyn Document) {
        let email = doc.value(FieldId::Email.input()).unwrap_or_default();
        let mark = if rules::is_email(&email) {
            rules::EMAIL_OK_MARK
        } else {
            ""
        };
        doc.set_text(ElementId::EmailCheck, mark);
    }

    /// Return the form to its freshly loaded state
    pub fn clear_form(&self, doc: &mut dyn Document) {
        doc.reset_form();
        doc.set_value(ElementId::Age, "");
        doc.set_text(ElementId::OutputMessage, "");
        doc.set_message_kind(ElementId::OutputMessage, None);
        doc.set_text(ElementId::EmailCheck, "");
        doc.set_disabled(ElementId::SubmitBtn, true);

        for field in FieldId::ALL {
            doc.set_text(field.error_node(), "");
            doc.set_error_marker(field.input(), false);
        }

        tracing::debug!("Registration form cleared");
    }

    /// Dispatch a single form event.
    ///
    /// Returns the validation result for submit events.
    pub fn handle_event(
        &self,
        doc: &mut dyn Document,
        event: FormEvent,
    ) -> Option<ValidationResult> {
        match event {
            FormEvent::Input(field) => {
                self.validate_field(doc, field);
                self.update_submit_state(doc);
                if field == FieldId::Email {
                    Self::update_email_check(doc);
                }
            }
            FormEvent::Blur(field) => {
                self.validate_field(doc, field);
                self.update_submit_state(doc);
                if field == FieldId::Dob {
                    self.calculate_age(doc);
                }
            }
            FormEvent::Change(field) => {
                self.validate_field(doc, field);
                self.update_submit_state(doc);
            }
            FormEvent::Submit => return Some(self.validate_form(doc)),
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{InputMode, MemoryDocument, MockDocument};
    use chrono::Months;

    fn fixed_today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
    }

    fn validator() -> FormValidator {
        FormValidator::default().with_today(fixed_today)
    }

    fn filled_document() -> MemoryDocument {
        let mut doc = MemoryDocument::registration();
        doc.set_value(FieldId::Name.input(), "Ada Lovelace");
        doc.set_value(FieldId::Email.input(), "ada@example.com");
        doc.set_value(FieldId::Dob.input(), "1990-12-10");
        doc.set_value(FieldId::Password.input(), "abc!23");
        doc.set_value(FieldId::ConfirmPassword.input(), "abc!23");
        doc.set_checked(FieldId::Terms.input(), true);
        doc
    }

    fn error_text(doc: &MemoryDocument, field: FieldId) -> String {
        doc.text(field.error_node()).unwrap_or_default()
    }

    mod validate_field {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_empty_name_is_flagged() {
            let mut doc = MemoryDocument::registration();
            doc.set_value(FieldId::Name.input(), "   ");
            validator().validate_field(&mut doc, FieldId::Name);

            assert_eq!(error_text(&doc, FieldId::Name), "Name is required");
            assert!(doc.has_error_marker(FieldId::Name.input()));
        }

        #[test]
        fn test_non_empty_name_clears_error() {
            let mut doc = MemoryDocument::registration();
            let v = validator();
            v.validate_field(&mut doc, FieldId::Name);
            doc.set_value(FieldId::Name.input(), "Ada");
            v.validate_field(&mut doc, FieldId::Name);

            assert_eq!(error_text(&doc, FieldId::Name), "");
            assert!(!doc.has_error_marker(FieldId::Name.input()));
        }

        #[test]
        fn test_empty_dob_is_flagged() {
            let mut doc = MemoryDocument::registration();
            validator().validate_field(&mut doc, FieldId::Dob);
            assert_eq!(error_text(&doc, FieldId::Dob), "Date of birth is required");
        }

        #[test]
        fn test_email_rule() {
            let v = validator();
            for (email, valid) in [
                ("a@b.co", true),
                ("a@b", false),
                ("a.com", false),
                ("a b@c.com", false),
            ] {
                let mut doc = MemoryDocument::registration();
                doc.set_value(FieldId::Email.input(), email);
                v.validate_field(&mut doc, FieldId::Email);
                assert_eq!(doc.has_error_marker(FieldId::Email.input()), !valid, "{email}");
            }
        }

        #[test]
        fn test_email_is_trimmed_before_matching() {
            let mut doc = MemoryDocument::registration();
            doc.set_value(FieldId::Email.input(), "  a@b.co ");
            validator().validate_field(&mut doc, FieldId::Email);
            assert_eq!(error_text(&doc, FieldId::Email), "");
        }

        #[test]
        fn test_password_rule() {
            let v = validator();
            for (password, valid) in [("abc123", false), ("abc!23", true), ("ab!", false)] {
                let mut doc = MemoryDocument::registration();
                doc.set_value(FieldId::Password.input(), password);
                v.validate_field(&mut doc, FieldId::Password);
                let expected = if valid {
                    ""
                } else {
                    "Password must be 6+ chars and include a special character"
                };
                assert_eq!(error_text(&doc, FieldId::Password), expected, "{password}");
            }
        }

        #[test]
        fn test_confirm_matches_password() {
            let mut doc = filled_document();
            validator().validate_field(&mut doc, FieldId::ConfirmPassword);
            assert_eq!(error_text(&doc, FieldId::ConfirmPassword), "");
        }

        #[test]
        fn test_confirm_mismatch() {
            let mut doc = filled_document();
            doc.set_value(FieldId::ConfirmPassword.input(), "abc!24");
            validator().validate_field(&mut doc, FieldId::ConfirmPassword);
            assert_eq!(
                error_text(&doc, FieldId::ConfirmPassword),
                "Passwords do not match"
            );
        }

        #[test]
        fn test_confirm_trim_quirk() {
            let mut doc = filled_document();
            doc.set_value(FieldId::ConfirmPassword.input(), "abc!23 ");
            // Confirm is trimmed, so this still matches
            validator().validate_field(&mut doc, FieldId::ConfirmPassword);
            assert_eq!(error_text(&doc, FieldId::ConfirmPassword), "");

            // The password is compared as typed
            doc.set_value(FieldId::Password.input(), "abc!23 ");
            validator().validate_field(&mut doc, FieldId::ConfirmPassword);
            assert_eq!(
                error_text(&doc, FieldId::ConfirmPassword),
                "Passwords do not match"
            );
        }

        #[test]
        fn test_terms_unchecked_is_flagged() {
            let mut doc = MemoryDocument::registration();
            validator().validate_field(&mut doc, FieldId::Terms);
            assert_eq!(error_text(&doc, FieldId::Terms), "You must accept terms");

            doc.set_checked(FieldId::Terms.input(), true);
            validator().validate_field(&mut doc, FieldId::Terms);
            assert_eq!(error_text(&doc, FieldId::Terms), "");
        }

        #[test]
        fn test_missing_error_node_is_skipped() {
            let mut doc = MemoryDocument::with_elements([FieldId::Name.input()]);
            validator().validate_field(&mut doc, FieldId::Name);
            assert!(!doc.has_error_marker(FieldId::Name.input()));
        }

        #[test]
        fn test_missing_input_touches_nothing() {
            let mut doc = MockDocument::new();
            doc.expect_contains()
                .withf(|id| *id == FieldId::Email.input())
                .return_const(false);
            doc.expect_set_text().never();
            doc.expect_set_error_marker().never();

            validator().validate_field(&mut doc, FieldId::Email);
        }

        #[test]
        fn test_error_written_through_document() {
            let mut doc = MockDocument::new();
            doc.expect_contains().return_const(true);
            doc.expect_value().returning(|_| Some(String::new()));
            doc.expect_set_text()
                .withf(|id, text| *id == FieldId::Name.error_node() && text == "Name is required")
                .times(1)
                .return_const(());
            doc.expect_set_error_marker()
                .withf(|id, marked| *id == FieldId::Name.input() && *marked)
                .times(1)
                .return_const(());

            validator().validate_field(&mut doc, FieldId::Name);
        }
    }

    mod submit_state {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_init_disables_submit() {
            let mut doc = MemoryDocument::registration();
            validator().init(&mut doc);
            assert_eq!(doc.is_disabled(ElementId::SubmitBtn), Some(true));
        }

        #[test]
        fn test_enabled_only_when_all_valid() {
            let v = validator();
            let mut doc = filled_document();
            v.update_submit_state(&mut doc);
            assert_eq!(doc.is_disabled(ElementId::SubmitBtn), Some(false));

            let breakers: [(FieldId, &str); 5] = [
                (FieldId::Name, " "),
                (FieldId::Email, "ada@example"),
                (FieldId::Dob, ""),
                (FieldId::Password, "abcdef"),
                (FieldId::ConfirmPassword, "abc!2"),
            ];
            for (field, value) in breakers {
                let mut doc = filled_document();
                doc.set_value(field.input(), value);
                v.update_submit_state(&mut doc);
                assert_eq!(
                    doc.is_disabled(ElementId::SubmitBtn),
                    Some(true),
                    "{}",
                    field.as_str()
                );
            }

            let mut doc = filled_document();
            doc.set_checked(FieldId::Terms.input(), false);
            v.update_submit_state(&mut doc);
            assert_eq!(doc.is_disabled(ElementId::SubmitBtn), Some(true));
        }

        #[test]
        fn test_complete_validity_ignores_stale_annotations() {
            let v = validator();
            let mut doc = filled_document();
            doc.set_text(FieldId::Name.error_node(), "Name is required");
            doc.set_error_marker(FieldId::Name.input(), true);
            assert!(v.is_form_completely_valid(&doc));
        }

        #[test]
        fn test_complete_validity_has_no_side_effects() {
            let mut doc = MockDocument::new();
            doc.expect_is_checked().returning(|_| Some(true));
            doc.expect_value().returning(|_| Some(String::new()));
            doc.expect_set_text().never();
            doc.expect_set_disabled().never();

            assert!(!validator().is_form_completely_valid(&doc));
        }
    }

    mod validate_form {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_empty_form_reports_errors() {
            let mut doc = MemoryDocument::registration();
            let result = validator().validate_form(&mut doc);

            assert_eq!(
                result,
                ValidationResult {
                    is_valid: false,
                    message: "Please fix the errors above."
                }
            );
            assert_eq!(error_text(&doc, FieldId::Name), "Name is required");
            assert_eq!(error_text(&doc, FieldId::Terms), "You must accept terms");
            assert_eq!(
                doc.text(ElementId::OutputMessage).as_deref(),
                Some("Please fix the errors above.")
            );
            assert_eq!(
                doc.message_kind(ElementId::OutputMessage),
                Some(MessageKind::Error)
            );
            assert_eq!(doc.is_disabled(ElementId::SubmitBtn), Some(true));
        }

        #[test]
        fn test_valid_form_succeeds() {
            let mut doc = filled_document();
            let result = validator().validate_form(&mut doc);

            assert!(result.is_valid);
            assert_eq!(
                doc.text(ElementId::OutputMessage).as_deref(),
                Some("Registration successful!")
            );
            assert_eq!(
                doc.message_kind(ElementId::OutputMessage),
                Some(MessageKind::Success)
            );
            assert_eq!(doc.is_disabled(ElementId::SubmitBtn), Some(false));
            // Submitting does not reset or otherwise move away from the form
            assert_eq!(
                doc.value(FieldId::Name.input()).as_deref(),
                Some("Ada Lovelace")
            );
        }

        #[test]
        fn test_unchecked_terms_fails_without_field_errors() {
            let mut doc = filled_document();
            doc.set_checked(FieldId::Terms.input(), false);
            let result = validator().validate_form(&mut doc);

            assert!(!result.is_valid);
            assert!(FieldId::TEXT
                .iter()
                .all(|f| !doc.has_error_marker(f.input())));
            assert_eq!(error_text(&doc, FieldId::Terms), "You must accept terms");
        }

        #[test]
        fn test_resubmit_after_fix_clears_errors() {
            let v = validator();
            let mut doc = filled_document();
            doc.set_value(FieldId::Email.input(), "nope");
            assert!(!v.validate_form(&mut doc).is_valid);

            doc.set_value(FieldId::Email.input(), "ada@example.com");
            assert!(v.validate_form(&mut doc).is_valid);
            assert_eq!(error_text(&doc, FieldId::Email), "");
        }

        #[test]
        fn test_tolerates_partial_document() {
            let mut doc = MemoryDocument::with_elements([
                ElementId::Form,
                FieldId::Name.input(),
                FieldId::Name.error_node(),
                ElementId::OutputMessage,
            ]);
            let result = validator().validate_form(&mut doc);

            assert!(!result.is_valid);
            assert_eq!(error_text(&doc, FieldId::Name), "Name is required");
        }
    }

    mod age {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_age_written_to_document() {
            let mut doc = MemoryDocument::registration();
            let dob = fixed_today().checked_sub_months(Months::new(240)).unwrap();
            doc.set_value(FieldId::Dob.input(), &dob.format("%Y-%m-%d").to_string());

            assert_eq!(validator().calculate_age(&mut doc), Age::Years(20));
            assert_eq!(doc.value(ElementId::Age).as_deref(), Some("20"));
        }

        #[test]
        fn test_day_before_birthday() {
            let mut doc = MemoryDocument::registration();
            doc.set_value(FieldId::Dob.input(), "2006-10-17");
            assert_eq!(validator().calculate_age(&mut doc), Age::Years(19));
        }

        #[test]
        fn test_invalid_dob_leaves_age_empty() {
            let mut doc = MemoryDocument::registration();
            doc.set_value(ElementId::Age, "42");
            doc.set_value(FieldId::Dob.input(), "yesterday");

            assert_eq!(validator().calculate_age(&mut doc), Age::Invalid);
            assert_eq!(doc.value(ElementId::Age).as_deref(), Some(""));
        }

        #[test]
        fn test_configured_formats_are_used() {
            let v = FormValidator::new(Rules {
                dob_formats: vec!["%d/%m/%Y".to_string()],
            })
            .with_today(fixed_today);
            let mut doc = MemoryDocument::registration();
            doc.set_value(FieldId::Dob.input(), "16/10/2000");

            assert_eq!(v.calculate_age(&mut doc), Age::Years(26));
        }
    }

    mod events {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_input_validates_and_updates_submit() {
            let v = validator();
            let mut doc = filled_document();
            doc.set_value(FieldId::Name.input(), "");

            assert_eq!(v.handle_event(&mut doc, FormEvent::Input(FieldId::Name)), None);
            assert_eq!(error_text(&doc, FieldId::Name), "Name is required");
            assert_eq!(doc.is_disabled(ElementId::SubmitBtn), Some(true));
        }

        #[test]
        fn test_email_input_sets_checkmark_on_raw_value() {
            let v = validator();
            let mut doc = MemoryDocument::registration();

            doc.set_value(FieldId::Email.input(), "a@b.co");
            v.handle_event(&mut doc, FormEvent::Input(FieldId::Email));
            assert_eq!(doc.text(ElementId::EmailCheck).as_deref(), Some("✓"));

            // Trailing space passes the trimmed rule but loses the checkmark
            doc.set_value(FieldId::Email.input(), "a@b.co ");
            v.handle_event(&mut doc, FormEvent::Input(FieldId::Email));
            assert_eq!(doc.text(ElementId::EmailCheck).as_deref(), Some(""));
            assert_eq!(error_text(&doc, FieldId::Email), "");
        }

        #[test]
        fn test_dob_blur_computes_age() {
            let v = validator();
            let mut doc = MemoryDocument::registration();
            doc.set_value(FieldId::Dob.input(), "2000-01-01");

            v.handle_event(&mut doc, FormEvent::Blur(FieldId::Dob));
            assert_eq!(doc.value(ElementId::Age).as_deref(), Some("26"));
            assert_eq!(error_text(&doc, FieldId::Dob), "");
        }

        #[test]
        fn test_dob_input_does_not_compute_age() {
            let v = validator();
            let mut doc = MemoryDocument::registration();
            doc.set_value(FieldId::Dob.input(), "2000-01-01");

            v.handle_event(&mut doc, FormEvent::Input(FieldId::Dob));
            assert_eq!(doc.value(ElementId::Age).as_deref(), Some(""));
        }

        #[test]
        fn test_terms_change_enables_submit() {
            let v = validator();
            let mut doc = filled_document();
            doc.set_checked(FieldId::Terms.input(), false);
            v.init(&mut doc);
            assert_eq!(doc.is_disabled(ElementId::SubmitBtn), Some(true));

            doc.set_checked(FieldId::Terms.input(), true);
            v.handle_event(&mut doc, FormEvent::Change(FieldId::Terms));
            assert_eq!(doc.is_disabled(ElementId::SubmitBtn), Some(false));
        }

        #[test]
        fn test_submit_returns_result() {
            let v = validator();
            let mut doc = filled_document();
            let result = v.handle_event(&mut doc, FormEvent::Submit);
            assert_eq!(result.map(|r| r.message), Some("Registration successful!"));
        }
    }

    mod clear_and_toggle {
        use super::*;
        use pretty_assertions::assert_eq;

        fn dirty_document() -> MemoryDocument {
            let v = validator();
            let mut doc = filled_document();
            doc.set_value(FieldId::Email.input(), "bad");
            v.handle_event(&mut doc, FormEvent::Blur(FieldId::Dob));
            v.handle_event(&mut doc, FormEvent::Input(FieldId::Email));
            v.validate_form(&mut doc);
            doc
        }

        fn assert_cleared(doc: &MemoryDocument) {
            for field in FieldId::TEXT {
                assert_eq!(doc.value(field.input()).as_deref(), Some(""));
            }
            for field in FieldId::ALL {
                assert_eq!(error_text(doc, field), "");
                assert!(!doc.has_error_marker(field.input()));
            }
            assert_eq!(doc.is_checked(FieldId::Terms.input()), Some(false));
            assert_eq!(doc.value(ElementId::Age).as_deref(), Some(""));
            assert_eq!(doc.text(ElementId::OutputMessage).as_deref(), Some(""));
            assert_eq!(doc.message_kind(ElementId::OutputMessage), None);
            assert_eq!(doc.text(ElementId::EmailCheck).as_deref(), Some(""));
            assert_eq!(doc.is_disabled(ElementId::SubmitBtn), Some(true));
        }

        #[test]
        fn test_clear_form_resets_everything() {
            let mut doc = dirty_document();
            assert_eq!(doc.value(ElementId::Age).as_deref(), Some("35"));
            validator().clear_form(&mut doc);
            assert_cleared(&doc);
        }

        #[test]
        fn test_clear_form_is_idempotent() {
            let v = validator();
            let mut doc = dirty_document();
            v.clear_form(&mut doc);
            v.clear_form(&mut doc);
            assert_cleared(&doc);
        }

        #[test]
        fn test_clear_form_on_partial_document() {
            let mut doc = MemoryDocument::with_elements([
                ElementId::Form,
                FieldId::Name.input(),
                FieldId::Name.error_node(),
                ElementId::Age,
                ElementId::EmailCheck,
                ElementId::SubmitBtn,
                ElementId::OutputMessage,
            ])
            .with_default_value(FieldId::Name.input(), "");
            doc.set_value(FieldId::Name.input(), "John");
            doc.set_error_marker(FieldId::Name.input(), true);
            doc.set_text(FieldId::Name.error_node(), "Name error");
            doc.set_value(ElementId::Age, "30");
            doc.set_text(ElementId::OutputMessage, "Old message");

            validator().clear_form(&mut doc);

            assert_eq!(doc.value(FieldId::Name.input()).as_deref(), Some(""));
            assert_eq!(error_text(&doc, FieldId::Name), "");
            assert_eq!(doc.value(ElementId::Age).as_deref(), Some(""));
            assert_eq!(doc.text(ElementId::OutputMessage).as_deref(), Some(""));
            assert_eq!(doc.is_disabled(ElementId::SubmitBtn), Some(true));
        }

        #[test]
        fn test_toggle_visibility_round_trips() {
            let mut doc = MemoryDocument::registration();
            let id = FieldId::Password.input();
            FormValidator::toggle_visibility(&mut doc, id);
            assert_eq!(doc.input_mode(id), Some(InputMode::Text));
            FormValidator::toggle_visibility(&mut doc, id);
            assert_eq!(doc.input_mode(id), Some(InputMode::Password));
        }

        #[test]
        fn test_toggle_visibility_does_not_validate() {
            let mut doc = MemoryDocument::registration();
            FormValidator::toggle_visibility(&mut doc, FieldId::ConfirmPassword.input());
            assert_eq!(error_text(&doc, FieldId::ConfirmPassword), "");
            assert_eq!(doc.is_disabled(ElementId::SubmitBtn), Some(false));
        }

        #[test]
        fn test_toggle_visibility_missing_element() {
            let mut doc = MemoryDocument::with_elements(std::iter::empty());
            FormValidator::toggle_visibility(&mut doc, FieldId::Password.input());
            assert_eq!(doc.input_mode(FieldId::Password.input()), None);
        }
    }
}
