//! Contact Book - a command-line contact manager.
//!
//! Stores contacts with one or more phone numbers, an optional birthday and
//! an optional email. Phone numbers are normalized into the canonical
//! Ukrainian `+380XXXXXXXXX` form before they are stored, and the book can
//! report whose birthday falls within the next few days.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (phone numbers, birthdays, names)
//! - **models**: Contact records and the address book
//! - **repositories**: Loading and saving the book
//! - **commands**: Console command parsing and execution
//! - **config**: Configuration management from environment variables
//! - **error**: Error types for the storage, config and command boundaries

pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repositories;

pub use commands::{Command, CommandHandler, Reply, Session};
pub use config::Config;
pub use domain::{
    normalize_phone, Birthday, ContactName, PhoneNumber, PhoneNumberSet, ValidationError,
};
pub use error::{CommandError, ConfigError, StorageError};
pub use models::{AddressBook, ContactRecord, UpcomingBirthday};
pub use repositories::{AddressBookRepository, JsonFileRepository};
