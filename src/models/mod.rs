//! Data models for the contact book.
//!
//! A [`ContactRecord`] aggregates the domain value objects for one person;
//! an [`AddressBook`] owns every record of a session.

pub mod address_book;
pub mod contact;

pub use address_book::{AddressBook, UpcomingBirthday, DEFAULT_BIRTHDAY_WINDOW_DAYS};
pub use contact::ContactRecord;
