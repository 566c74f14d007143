//! Birthday value object.

use super::errors::ValidationError;
use chrono::{Datelike, Duration, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Display and storage format for dates.
pub const DATE_FORMAT: &str = "%d.%m.%Y";

static DATE_SHAPE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{2}\.\d{2}\.\d{4}$").unwrap());

/// Format a date as `DD.MM.YYYY`.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// A validated birth date.
///
/// # Example
///
/// ```
/// use contact_book::domain::Birthday;
///
/// let birthday = Birthday::new("29.02.2000").unwrap();
/// assert_eq!(birthday.to_string(), "29.02.2000");
/// assert!(Birthday::new("31.04.2020").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parse a `DD.MM.YYYY` string.
    ///
    /// Both the shape (two-digit day and month, four-digit year) and the
    /// calendar are checked, so `1.1.2000` and `31.04.2020` are both rejected.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidDateFormat` with the raw input.
    pub fn new(value: &str) -> Result<Self, ValidationError> {
        if !DATE_SHAPE.is_match(value) {
            return Err(ValidationError::InvalidDateFormat(value.to_string()));
        }
        NaiveDate::parse_from_str(value, DATE_FORMAT)
            .map(Self)
            .map_err(|_| ValidationError::InvalidDateFormat(value.to_string()))
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// The anniversary in `year`. Feb 29 falls on Mar 1 in common years.
    fn anniversary_in(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.0.month(), self.0.day())
            .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
    }

    /// The first anniversary on or after `today`.
    ///
    /// Returns `None` only when the year would leave chrono's range.
    pub fn next_occurrence(&self, today: NaiveDate) -> Option<NaiveDate> {
        let this_year = self.anniversary_in(today.year())?;
        if this_year >= today {
            return Some(this_year);
        }
        self.anniversary_in(today.year() + 1)
    }

    /// True when the next anniversary lies in `[today, today + window_days]`.
    pub fn is_within_days(&self, today: NaiveDate, window_days: u32) -> bool {
        let Some(occurrence) = self.next_occurrence(today) else {
            return false;
        };
        occurrence <= today + Duration::days(i64::from(window_days))
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

// Serde support - stored as DD.MM.YYYY
impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(&s).map_err(serde::de::Error::custom)
    }
}
