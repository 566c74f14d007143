//! PhoneNumber value object and the normalization rules behind it.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Country prefix every canonical number starts with.
pub const COUNTRY_PREFIX: &str = "+380";

/// Subscriber digits following [`COUNTRY_PREFIX`].
pub const SUBSCRIBER_DIGITS: usize = 9;

/// Minimum number of digit-or-`+` characters accepted before classification.
const MIN_CLEANED_LEN: usize = 10;

static NOT_PHONE_CHAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^0-9+]").unwrap());

static CANONICAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\+380[0-9]{9}$").unwrap());

fn is_numeric(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Normalize a raw phone string into the canonical `+380XXXXXXXXX` form.
///
/// Every character other than an ASCII digit or `+` is dropped first. The
/// cleaned string is then rewritten by the first matching rule:
///
/// | cleaned input                  | rewrite          |
/// |--------------------------------|------------------|
/// | 10 digits                      | `+38` + input    |
/// | `+0` + 9 digits                | `+380` + digits  |
/// | `+` + 9 digits                 | `+380` + digits  |
/// | 12 digits                      | `+` + input      |
/// | `+` + 12 digits                | unchanged        |
/// | `+38` + 10 digits              | unchanged        |
/// | `380` + 9 digits               | `+` + input      |
/// | `0` + 10 digits                | `+38` + digits   |
///
/// The `+38` row never fires on its own: any input it accepts already
/// matched the `+` + 12 digits row above it. The rewritten value must still
/// be `+380` followed by nine digits.
///
/// # Errors
///
/// Returns `ValidationError::InvalidPhoneNumber` with the cleaned input when
/// fewer than 10 characters survive cleaning or no rule yields a canonical
/// number.
///
/// # Example
///
/// ```
/// use contact_book::domain::normalize_phone;
///
/// assert_eq!(normalize_phone("099 123-45-67").unwrap(), "+380991234567");
/// assert!(normalize_phone("12345").is_err());
/// ```
pub fn normalize_phone(raw: &str) -> Result<String, ValidationError> {
    let cleaned = NOT_PHONE_CHAR.replace_all(raw, "").into_owned();
    let len = cleaned.len();

    if len < MIN_CLEANED_LEN {
        return Err(ValidationError::InvalidPhoneNumber(cleaned));
    }

    let rewritten = if len == 10 && is_numeric(&cleaned) {
        Some(format!("+38{}", cleaned))
    } else if len == 11 && cleaned.starts_with("+0") && is_numeric(&cleaned[2..]) {
        Some(format!("{}{}", COUNTRY_PREFIX, &cleaned[2..]))
    } else if len == 10 && cleaned.starts_with('+') && is_numeric(&cleaned[1..]) {
        Some(format!("{}{}", COUNTRY_PREFIX, &cleaned[1..]))
    } else if len == 12 && is_numeric(&cleaned) {
        Some(format!("+{}", cleaned))
    } else if len == 13 && cleaned.starts_with('+') && is_numeric(&cleaned[1..]) {
        // Also covers `+38` followed by 10 digits.
        Some(cleaned.clone())
    } else if len == 12 && cleaned.starts_with("380") && is_numeric(&cleaned[3..]) {
        Some(format!("+{}", cleaned))
    } else if len == 11 && cleaned.starts_with('0') && is_numeric(&cleaned[1..]) {
        Some(format!("+38{}", &cleaned[1..]))
    } else {
        None
    };

    match rewritten {
        Some(phone) if CANONICAL.is_match(&phone) => Ok(phone),
        _ => Err(ValidationError::InvalidPhoneNumber(cleaned)),
    }
}

/// Returns true when a lookup query should be treated as a phone number
/// rather than a contact name.
pub fn looks_like_phone(query: &str) -> bool {
    query.starts_with('+') || is_numeric(query)
}

/// A canonical phone number (`+380` followed by nine digits).
///
/// The only way to build one is through [`normalize_phone`], so a
/// `PhoneNumber` is never stored in raw form.
///
/// # Example
///
/// ```
/// use contact_book::domain::PhoneNumber;
///
/// let phone = PhoneNumber::new("(099) 123 45 67").unwrap();
/// assert_eq!(phone.as_str(), "+380991234567");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Normalize `raw` into a canonical phone number.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhoneNumber` if the input cannot be
    /// normalized.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, ValidationError> {
        normalize_phone(raw.as_ref()).map(Self)
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// The nine subscriber digits after the country prefix.
    pub fn subscriber(&self) -> &str {
        &self.0[COUNTRY_PREFIX.len()..]
    }
}

// Serde support - serialize as string
impl Serialize for PhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string, re-normalizing on the way in
impl<'de> Deserialize<'de> for PhoneNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PhoneNumber::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
