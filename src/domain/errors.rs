//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The phone number could not be rewritten into canonical form.
    ///
    /// Carries the cleaned input (digits and `+` only).
    InvalidPhoneNumber(String),

    /// The birthday is not a real calendar date in `DD.MM.YYYY` form.
    InvalidDateFormat(String),

    /// The contact record cannot be stored (e.g. empty name).
    InvalidRecord(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPhoneNumber(phone) => write!(
                f,
                "Invalid phone number: {}. Expected a Ukrainian number of at least 10 digits",
                phone
            ),
            Self::InvalidDateFormat(date) => {
                write!(f, "Invalid date format: {}. Use DD.MM.YYYY", date)
            }
            Self::InvalidRecord(reason) => write!(f, "Invalid record: {}", reason),
        }
    }
}

impl std::error::Error for ValidationError {}
