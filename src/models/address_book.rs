//! The address book: every contact of one session, keyed by name.

use crate::domain::{format_date, looks_like_phone, PhoneNumber};
use crate::models::ContactRecord;
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use tracing::debug;

/// Default look-ahead for [`AddressBook::upcoming_birthdays`].
pub const DEFAULT_BIRTHDAY_WINDOW_DAYS: u32 = 7;

/// A contact whose birthday falls inside the look-ahead window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpcomingBirthday {
    /// Contact name
    pub name: String,

    /// Date of the upcoming anniversary, `DD.MM.YYYY`
    pub congratulation_date: String,
}

impl fmt::Display for UpcomingBirthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} on {}", self.name, self.congratulation_date)
    }
}

/// Mapping from contact name to [`ContactRecord`].
///
/// Names are unique; adding a record under an existing name replaces it in
/// its original position. Iteration follows insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: Vec<ContactRecord>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.records.iter().position(|r| r.name().as_str() == name)
    }

    /// Insert a record, overwriting any record with the same name.
    ///
    /// Returns the replaced record, if there was one.
    pub fn add(&mut self, record: ContactRecord) -> Option<ContactRecord> {
        match self.position(record.name().as_str()) {
            Some(index) => {
                debug!(name = %record.name(), "Replacing contact");
                Some(std::mem::replace(&mut self.records[index], record))
            }
            None => {
                debug!(name = %record.name(), "Adding contact");
                self.records.push(record);
                None
            }
        }
    }

    /// Exact name lookup.
    pub fn get(&self, name: &str) -> Option<&ContactRecord> {
        self.records.iter().find(|r| r.name().as_str() == name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut ContactRecord> {
        self.records.iter_mut().find(|r| r.name().as_str() == name)
    }

    /// Resolve a query that is either a name or a phone number.
    ///
    /// Queries made only of digits, or starting with `+`, are normalized and
    /// matched against every record's phones; the first record in book order
    /// wins. A phone-shaped query that fails normalization matches nothing.
    /// Anything else is an exact name lookup.
    pub fn find(&self, query: &str) -> Option<&ContactRecord> {
        self.find_index(query).map(|index| &self.records[index])
    }

    /// Mutable variant of [`AddressBook::find`].
    pub fn find_mut(&mut self, query: &str) -> Option<&mut ContactRecord> {
        let index = self.find_index(query)?;
        Some(&mut self.records[index])
    }

    fn find_index(&self, query: &str) -> Option<usize> {
        if !looks_like_phone(query) {
            return self.position(query);
        }

        let phone = match PhoneNumber::new(query) {
            Ok(phone) => phone,
            Err(e) => {
                debug!(query = %query, error = %e, "Phone lookup with invalid number");
                return None;
            }
        };

        self.records
            .iter()
            .position(|r| r.phones().contains_phone(&phone))
    }

    /// Remove a record by name. Missing names are a no-op.
    pub fn remove(&mut self, name: &str) -> Option<ContactRecord> {
        let index = self.position(name)?;
        debug!(name = %name, "Removing contact");
        Some(self.records.remove(index))
    }

    /// Contacts whose next birthday falls in `[today, today + window_days]`.
    ///
    /// Results follow book order, not date order.
    pub fn upcoming_birthdays(
        &self,
        today: NaiveDate,
        window_days: u32,
    ) -> Vec<UpcomingBirthday> {
        self.records
            .iter()
            .filter_map(|record| {
                let birthday = record.birthday()?;
                if !birthday.is_within_days(today, window_days) {
                    return None;
                }
                let occurrence = birthday.next_occurrence(today)?;
                Some(UpcomingBirthday {
                    name: record.name().to_string(),
                    congratulation_date: format_date(occurrence),
                })
            })
            .collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ContactRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = &'a ContactRecord;
    type IntoIter = std::slice::Iter<'a, ContactRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl FromIterator<ContactRecord> for AddressBook {
    fn from_iter<T: IntoIterator<Item = ContactRecord>>(iter: T) -> Self {
        let mut book = Self::new();
        for record in iter {
            book.add(record);
        }
        book
    }
}

// Serde support - a list of records in book order
impl Serialize for AddressBook {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.records.serialize(serializer)
    }
}

// Serde support - later duplicates overwrite earlier ones, as with `add`
impl<'de> Deserialize<'de> for AddressBook {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let records: Vec<ContactRecord> = Vec::deserialize(deserializer)?;
        Ok(records.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(d: u32, m: u32, y: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn record(name: &str, phones: &[&str], birthday: Option<&str>) -> ContactRecord {
        ContactRecord::with_details(name, phones, birthday, None).unwrap()
    }

    #[test]
    fn test_add_and_get() {
        let mut book = AddressBook::new();
        assert!(book.add(record("Olena", &["0991234567"], None)).is_none());
        assert_eq!(book.len(), 1);
        assert!(book.get("Olena").is_some());
        assert!(book.get("olena").is_none());
    }

    #[test]
    fn test_add_overwrites_in_place() {
        let mut book = AddressBook::new();
        book.add(record("Olena", &["0991234567"], None));
        book.add(record("Taras", &["0501112233"], None));

        let replaced = book.add(record("Olena", &["0671234567"], None)).unwrap();
        assert!(replaced.phones().contains("0991234567"));

        let names: Vec<&str> = book.iter().map(|r| r.name().as_str()).collect();
        assert_eq!(names, vec!["Olena", "Taras"]);
        assert!(book.get("Olena").unwrap().phones().contains("0671234567"));
    }

    #[test]
    fn test_find_by_name_or_phone() {
        let mut book = AddressBook::new();
        book.add(record("Olena", &["0991234567"], None));

        let by_name = book.find("Olena").unwrap();
        for query in ["0991234567", "380991234567", "+380991234567"] {
            assert_eq!(book.find(query), Some(by_name), "query: {}", query);
        }
    }

    #[test]
    fn test_find_phone_returns_first_in_book_order() {
        let mut book = AddressBook::new();
        book.add(record("Olena", &["0991234567"], None));
        book.add(record("Taras", &["0991234567"], None));

        assert_eq!(book.find("0991234567").unwrap().name().as_str(), "Olena");
    }

    #[test]
    fn test_find_misses() {
        let mut book = AddressBook::new();
        book.add(record("Olena", &["0991234567"], None));

        assert!(book.find("Taras").is_none());
        assert!(book.find("0501112233").is_none());
        assert!(book.find("12345").is_none());
        assert!(book.find("+").is_none());
    }

    #[test]
    fn test_find_mut_allows_editing() {
        let mut book = AddressBook::new();
        book.add(record("Olena", &["0991234567"], None));

        book.find_mut("+380991234567")
            .unwrap()
            .set_email("olena@example.com");
        assert_eq!(book.get("Olena").unwrap().email(), Some("olena@example.com"));
    }

    #[test]
    fn test_remove() {
        let mut book = AddressBook::new();
        book.add(record("Olena", &[], None));

        assert!(book.remove("Taras").is_none());
        assert!(book.remove("Olena").is_some());
        assert!(book.is_empty());
    }

    #[test]
    fn test_upcoming_birthdays_window() {
        let mut book = AddressBook::new();
        book.add(record("Soon", &[], Some("03.01.1990")));
        book.add(record("Later", &[], Some("15.01.1990")));
        book.add(record("NoBirthday", &[], None));

        let upcoming = book.upcoming_birthdays(date(1, 1, 2024), DEFAULT_BIRTHDAY_WINDOW_DAYS);
        assert_eq!(
            upcoming,
            vec![UpcomingBirthday {
                name: "Soon".to_string(),
                congratulation_date: "03.01.2024".to_string(),
            }]
        );
    }

    #[test]
    fn test_upcoming_birthdays_keep_book_order() {
        let mut book = AddressBook::new();
        book.add(record("Second", &[], Some("05.01.1990")));
        book.add(record("First", &[], Some("02.01.1980")));

        let upcoming = book.upcoming_birthdays(date(1, 1, 2024), 7);
        let names: Vec<&str> = upcoming.iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, vec!["Second", "First"]);
    }

    #[test]
    fn test_upcoming_birthdays_across_new_year() {
        let mut book = AddressBook::new();
        book.add(record("Olena", &[], Some("02.01.1990")));

        let upcoming = book.upcoming_birthdays(date(29, 12, 2023), 7);
        assert_eq!(upcoming[0].congratulation_date, "02.01.2024");
        assert_eq!(upcoming[0].to_string(), "Olena on 02.01.2024");
    }

    #[test]
    fn test_serde_roundtrip_preserves_order() {
        let mut book = AddressBook::new();
        book.add(record("Taras", &["0501112233"], Some("15.01.1990")));
        book.add(record("Olena", &["0991234567", "0671234567"], None));

        let json = serde_json::to_string(&book).unwrap();
        let back: AddressBook = serde_json::from_str(&json).unwrap();
        assert_eq!(back, book);
    }

    #[test]
    fn test_deserialize_duplicate_names_overwrite() {
        let json = r#"[
            {"name":"Olena","phones":["0991234567"]},
            {"name":"Olena","phones":["0501112233"]}
        ]"#;
        let book: AddressBook = serde_json::from_str(json).unwrap();
        assert_eq!(book.len(), 1);
        assert!(book.get("Olena").unwrap().phones().contains("0501112233"));
    }
}
