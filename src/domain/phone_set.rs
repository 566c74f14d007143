//! Per-contact collection of canonical phone numbers.

use super::errors::ValidationError;
use super::phone::PhoneNumber;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Ordered, duplicate-free list of canonical phone numbers.
///
/// Insertion order is kept for display. Every entry went through
/// [`PhoneNumber::new`], so nothing raw is ever stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhoneNumberSet {
    numbers: Vec<PhoneNumber>,
}

impl PhoneNumberSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from raw numbers, normalizing each one.
    ///
    /// Duplicates (after normalization) collapse into the first occurrence.
    ///
    /// # Errors
    ///
    /// Returns the first `ValidationError::InvalidPhoneNumber` encountered;
    /// no partial set is returned.
    pub fn from_raw<I>(raw: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut set = Self::new();
        for number in raw {
            set.add(number.as_ref())?;
        }
        Ok(set)
    }

    /// Normalize and append a number.
    ///
    /// Returns `false` when the canonical form is already present.
    pub fn add(&mut self, raw: &str) -> Result<bool, ValidationError> {
        let phone = PhoneNumber::new(raw)?;
        Ok(self.insert(phone))
    }

    /// Append an already canonical number unless it is present.
    pub fn insert(&mut self, phone: PhoneNumber) -> bool {
        if self.numbers.contains(&phone) {
            return false;
        }
        self.numbers.push(phone);
        true
    }

    /// Membership by canonical equality. Unparseable queries are never members.
    pub fn contains(&self, raw: &str) -> bool {
        PhoneNumber::new(raw)
            .map(|phone| self.contains_phone(&phone))
            .unwrap_or(false)
    }

    /// Membership test for an already canonical number.
    pub fn contains_phone(&self, phone: &PhoneNumber) -> bool {
        self.numbers.contains(phone)
    }

    /// Replace `old_raw` with `new_raw` in place.
    ///
    /// The whole set is searched for `old_raw`. Returns `Ok(false)` without
    /// touching the set when it is not found. If the new number is already
    /// stored elsewhere the old entry is dropped instead, keeping the set free
    /// of duplicates.
    ///
    /// # Errors
    ///
    /// Fails if either number cannot be normalized. Nothing is mutated then.
    pub fn edit(&mut self, old_raw: &str, new_raw: &str) -> Result<bool, ValidationError> {
        let old = PhoneNumber::new(old_raw)?;
        let new = PhoneNumber::new(new_raw)?;

        let Some(index) = self.numbers.iter().position(|p| *p == old) else {
            return Ok(false);
        };

        if old != new && self.numbers.contains(&new) {
            self.numbers.remove(index);
        } else {
            self.numbers[index] = new;
        }
        Ok(true)
    }

    /// Remove a single number. Returns `false` if it was not present.
    pub fn remove(&mut self, raw: &str) -> Result<bool, ValidationError> {
        let phone = PhoneNumber::new(raw)?;
        let before = self.numbers.len();
        self.numbers.retain(|p| *p != phone);
        Ok(self.numbers.len() != before)
    }

    /// Drop every number.
    pub fn remove_all(&mut self) {
        self.numbers.clear();
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PhoneNumber> {
        self.numbers.iter()
    }

    pub fn len(&self) -> usize {
        self.numbers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
    }
}

impl<'a> IntoIterator for &'a PhoneNumberSet {
    type Item = &'a PhoneNumber;
    type IntoIter = std::slice::Iter<'a, PhoneNumber>;

    fn into_iter(self) -> Self::IntoIter {
        self.numbers.iter()
    }
}

// Comma-joined canonical numbers, empty string for an empty set
impl fmt::Display for PhoneNumberSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, phone) in self.numbers.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", phone)?;
        }
        Ok(())
    }
}

// Serde support - serialize as a plain list of canonical strings
impl Serialize for PhoneNumberSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.numbers.serialize(serializer)
    }
}

// Serde support - each entry is re-normalized and duplicates collapse
impl<'de> Deserialize<'de> for PhoneNumberSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let numbers: Vec<PhoneNumber> = Vec::deserialize(deserializer)?;
        let mut set = Self::new();
        for phone in numbers {
            set.insert(phone);
        }
        Ok(set)
    }
}
