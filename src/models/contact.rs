//! Contact record: one named person with phones, birthday and email.

use crate::domain::{Birthday, ContactName, PhoneNumberSet, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A contact in the address book.
///
/// The name is the identity of the record; everything else can change.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactRecord {
    /// Unique key in the address book
    name: ContactName,

    /// Canonical phone numbers, possibly empty
    #[serde(default)]
    phones: PhoneNumberSet,

    /// Birth date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,

    /// Free-form email, not validated
    #[serde(default, skip_serializing_if = "Option::is_none")]
    email: Option<String>,
}

impl ContactRecord {
    /// Create a new contact with only a name.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self {
            name: ContactName::new(name)?,
            phones: PhoneNumberSet::new(),
            birthday: None,
            email: None,
        })
    }

    /// Create a contact with every field at once.
    ///
    /// Phones are normalized and the birthday parsed; the first failure
    /// aborts construction.
    pub fn with_details<I>(
        name: impl Into<String>,
        phones: I,
        birthday: Option<&str>,
        email: Option<&str>,
    ) -> Result<Self, ValidationError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        Ok(Self {
            name: ContactName::new(name)?,
            phones: PhoneNumberSet::from_raw(phones)?,
            birthday: birthday.map(Birthday::new).transpose()?,
            email: email.map(str::to_string),
        })
    }

    pub fn name(&self) -> &ContactName {
        &self.name
    }

    pub fn phones(&self) -> &PhoneNumberSet {
        &self.phones
    }

    pub fn phones_mut(&mut self) -> &mut PhoneNumberSet {
        &mut self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    /// Normalize and add a phone number. Returns `false` if already present.
    pub fn add_phone(&mut self, raw: &str) -> Result<bool, ValidationError> {
        self.phones.add(raw)
    }

    /// Replace the birthday. The old value is kept if `value` is invalid.
    pub fn set_birthday(&mut self, value: &str) -> Result<(), ValidationError> {
        self.birthday = Some(Birthday::new(value)?);
        Ok(())
    }

    pub fn clear_birthday(&mut self) {
        self.birthday = None;
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = Some(email.into());
    }

    pub fn clear_email(&mut self) {
        self.email = None;
    }
}

impl fmt::Display for ContactRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Contact name: {}, phones: {}", self.name, self.phones)?;
        if let Some(birthday) = &self.birthday {
            write!(f, ", birthday: {}", birthday)?;
        }
        if let Some(email) = &self.email {
            write!(f, ", email: {}", email)?;
        }
        Ok(())
    }
}
