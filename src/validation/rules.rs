//! Field rules and user-facing messages

use regex::Regex;
use std::sync::LazyLock;

pub const NAME_REQUIRED: &str = "Name is required";
pub const INVALID_EMAIL: &str = "Invalid email";
pub const DOB_REQUIRED: &str = "Date of birth is required";
pub const WEAK_PASSWORD: &str = "Password must be 6+ chars and include a special character";
pub const PASSWORDS_MISMATCH: &str = "Passwords do not match";
pub const TERMS_REQUIRED: &str = "You must accept terms";

pub const REGISTRATION_SUCCESS: &str = "Registration successful!";
pub const REGISTRATION_FAILED: &str = "Please fix the errors above.";

/// Shown next to the email field while the typed value matches
pub const EMAIL_OK_MARK: &str = "✓";

/// ISO date, as produced by an HTML date input
pub const DEFAULT_DOB_FORMAT: &str = "%Y-%m-%d";

pub const MIN_PASSWORD_LEN: usize = 6;
pub const PASSWORD_SPECIALS: &[char] = &['!', '@', '#', '$', '%', '^', '&', '*'];

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

/// `local@domain.tld` with a single `@` and no whitespace
pub fn is_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

/// Line terminators a password may not contain
const LINE_BREAKS: [char; 4] = ['\n', '\r', '\u{2028}', '\u{2029}'];

/// At least six UTF-16 units on one line, one of them from `PASSWORD_SPECIALS`
pub fn is_strong_password(value: &str) -> bool {
    !value.contains(LINE_BREAKS)
        && value.encode_utf16().count() >= MIN_PASSWORD_LEN
        && value.contains(PASSWORD_SPECIALS)
}

pub fn is_present(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Tunable part of the rule set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rules {
    /// `chrono` formats a date of birth may be typed in, tried in order
    pub dob_formats: Vec<String>,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            dob_formats: vec![DEFAULT_DOB_FORMAT.to_string()],
        }
    }
}
