//! Age derived from the date of birth

use chrono::{Datelike, NaiveDate};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DobError {
    #[error("date of birth is empty")]
    Empty,
    #[error("date of birth '{0}' does not match any accepted format")]
    Unparseable(String),
}

/// Parse a date of birth with the first matching format
pub fn parse_dob<S: AsRef<str>>(value: &str, formats: &[S]) -> Result<NaiveDate, DobError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(DobError::Empty);
    }

    formats
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(value, fmt.as_ref()).ok())
        .ok_or_else(|| DobError::Unparseable(value.to_string()))
}

/// Full years between `dob` and `today`.
///
/// Negative when `dob` lies in the future.
pub fn age_on(dob: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - dob.year();
    if (today.month(), today.day()) < (dob.month(), dob.day()) {
        age -= 1;
    }
    age
}

/// Result of computing the age field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Age {
    /// No date of birth entered
    Empty,
    Years(i32),
    /// Date of birth entered but not a calendar date
    Invalid,
}

/// Empty unless a valid date produced a number
impl fmt::Display for Age {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Years(n) => write!(f, "{n}"),
            Self::Empty | Self::Invalid => Ok(()),
        }
    }
}

pub fn calculate_age<S: AsRef<str>>(value: &str, today: NaiveDate, formats: &[S]) -> Age {
    match parse_dob(value, formats) {
        Ok(dob) => Age::Years(age_on(dob, today)),
        Err(DobError::Empty) => Age::Empty,
        Err(err @ DobError::Unparseable(_)) => {
            tracing::debug!("Age not computed: {err}");
            Age::Invalid
        }
    }
}
