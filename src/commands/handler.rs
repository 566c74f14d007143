//! Executing parsed commands against an address book.

use crate::commands::parser::Command;
use crate::domain::{Birthday, PhoneNumber};
use crate::error::{CommandError, CommandResult};
use crate::models::{AddressBook, ContactRecord, DEFAULT_BIRTHDAY_WINDOW_DAYS};
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, warn};

static PHONE_ARG: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{10,13}$").unwrap());
static DATE_ARG: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{2}\.\d{2}\.\d{4}$").unwrap());
static EMAIL_ARG: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^@]+@[^@]+\.[^@]+$").unwrap());

/// What an optional `add` argument looks like.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ExtraArg {
    Phone,
    Birthday,
    Email,
    Unknown,
}

fn classify(arg: &str) -> ExtraArg {
    if PHONE_ARG.is_match(arg) {
        ExtraArg::Phone
    } else if DATE_ARG.is_match(arg) {
        ExtraArg::Birthday
    } else if EMAIL_ARG.is_match(arg) {
        ExtraArg::Email
    } else {
        ExtraArg::Unknown
    }
}

/// Outcome of a successfully executed command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Text to show; the session continues
    Message(String),

    /// Text to show; the session should save and end
    Exit(String),
}

/// Runs commands against a caller-owned [`AddressBook`].
#[derive(Debug, Clone)]
pub struct CommandHandler {
    birthday_window_days: u32,
}

impl Default for CommandHandler {
    fn default() -> Self {
        Self::new(DEFAULT_BIRTHDAY_WINDOW_DAYS)
    }
}

impl CommandHandler {
    pub fn new(birthday_window_days: u32) -> Self {
        Self {
            birthday_window_days,
        }
    }

    /// Execute one command.
    ///
    /// `today` anchors the `birthdays` command. Validation failures leave the
    /// book unchanged.
    pub fn execute(
        &self,
        book: &mut AddressBook,
        command: Command,
        today: NaiveDate,
    ) -> CommandResult<Reply> {
        debug!(?command, "Executing command");

        let message = match command {
            Command::Hello => "How can I help you?".to_string(),
            Command::Exit => return Ok(Reply::Exit("Good bye!".to_string())),
            Command::Add {
                name,
                phone,
                extras,
            } => self.add(book, &name, &phone, &extras)?,
            Command::Change {
                contact,
                old_phone,
                new_phone,
            } => {
                let record = find_mut(book, &contact)?;
                if record.phones_mut().edit(&old_phone, &new_phone)? {
                    format!(
                        "Phone number changed from {} to {} for {}.",
                        old_phone,
                        new_phone,
                        record.name()
                    )
                } else {
                    format!("Phone number {} not found for {}.", old_phone, record.name())
                }
            }
            Command::Phone { contact } => {
                let record = find(book, &contact)?;
                format!("{}'s phone numbers: {}", record.name(), record.phones())
            }
            Command::All => {
                if book.is_empty() {
                    "No contacts found.".to_string()
                } else {
                    book.iter()
                        .map(ToString::to_string)
                        .collect::<Vec<_>>()
                        .join("\n")
                }
            }
            Command::AddBirthday { contact, birthday } => {
                let record = find_mut(book, &contact)?;
                record.set_birthday(&birthday)?;
                format!("Birthday {} added to {}.", birthday, record.name())
            }
            Command::ShowBirthday { contact } => {
                let record = find(book, &contact)?;
                match record.birthday() {
                    Some(birthday) => format!("{}'s birthday is {}.", record.name(), birthday),
                    None => format!("{} does not have a birthday set.", record.name()),
                }
            }
            Command::ClearBirthday { contact } => {
                let record = find_mut(book, &contact)?;
                record.clear_birthday();
                format!("Birthday removed for {}.", record.name())
            }
            Command::AddEmail { contact, email } => {
                let record = find_mut(book, &contact)?;
                record.set_email(email.as_str());
                format!("Email {} added to {}.", email, record.name())
            }
            Command::RemovePhone { contact, phone } => {
                let record = find_mut(book, &contact)?;
                if record.phones_mut().remove(&phone)? {
                    format!("Phone number {} removed from {}.", phone, record.name())
                } else {
                    format!("Phone number {} not found for {}.", phone, record.name())
                }
            }
            Command::RemovePhones { contact } => {
                let record = find_mut(book, &contact)?;
                record.phones_mut().remove_all();
                format!("All phone numbers removed from {}.", record.name())
            }
            Command::Find { query } => find(book, &query)?.to_string(),
            Command::Delete { name } => {
                let found = find(book, &name)?.name().to_string();
                book.remove(&found);
                format!("Contact {} deleted.", found)
            }
            Command::Birthdays => {
                let upcoming = book.upcoming_birthdays(today, self.birthday_window_days);
                if upcoming.is_empty() {
                    "There are no upcoming birthdays.".to_string()
                } else {
                    let mut lines = vec!["Upcoming birthdays:".to_string()];
                    lines.extend(upcoming.iter().map(|u| format!("{}.", u)));
                    lines.join("\n")
                }
            }
        };

        Ok(Reply::Message(message))
    }

    /// `add`: create a contact or extend an existing one.
    ///
    /// Everything that can fail is validated before the book is touched.
    fn add(
        &self,
        book: &mut AddressBook,
        name: &str,
        phone: &str,
        extras: &[String],
    ) -> CommandResult<String> {
        let mut lines = Vec::new();
        let mut extra_phone: Option<&str> = None;
        let mut birthday: Option<&str> = None;
        let mut email: Option<&str> = None;

        for arg in extras.iter().map(String::as_str) {
            match classify(arg) {
                ExtraArg::Phone if extra_phone.is_none() => extra_phone = Some(arg),
                ExtraArg::Phone => {
                    warn!(arg = %arg, "Ignoring additional phone number");
                    lines.push(format!("Warning: Ignoring additional phone number {}.", arg));
                }
                ExtraArg::Birthday => birthday = Some(arg),
                ExtraArg::Email => email = Some(arg),
                ExtraArg::Unknown => {
                    warn!(arg = %arg, "Ignoring unrecognised argument");
                    lines.push(format!("Warning: Ignoring invalid argument '{}'.", arg));
                }
            }
        }

        let primary = PhoneNumber::new(phone)?;
        let secondary = match extra_phone.map(PhoneNumber::new).transpose() {
            Ok(secondary) => secondary,
            Err(e) => {
                warn!(error = %e, "Ignoring invalid additional phone number");
                lines.push(format!("Warning: Ignoring additional phone number: {}.", e));
                None
            }
        };
        if let Some(birthday) = birthday {
            Birthday::new(birthday)?;
        }

        match book.find_mut(name) {
            Some(record) => {
                let name = record.name().to_string();
                for phone in [Some(primary), secondary].into_iter().flatten() {
                    let added = phone.to_string();
                    if record.phones_mut().insert(phone) {
                        lines.push(format!("Phone number {} added to {}.", added, name));
                    } else {
                        lines.push(format!("Phone number {} already saved for {}.", added, name));
                    }
                }
                if let Some(birthday) = birthday {
                    record.set_birthday(birthday)?;
                    lines.push(format!("Birthday {} added to {}.", birthday, name));
                }
                if let Some(email) = email {
                    record.set_email(email);
                    lines.push(format!("Email {} added to {}.", email, name));
                }
            }
            None => {
                let mut record = ContactRecord::new(name)?;
                let secondary_text = secondary.as_ref().map(ToString::to_string);
                let primary_text = primary.to_string();
                record.phones_mut().insert(primary);
                if let Some(secondary) = secondary {
                    record.phones_mut().insert(secondary);
                }
                if let Some(birthday) = birthday {
                    record.set_birthday(birthday)?;
                }
                if let Some(email) = email {
                    record.set_email(email);
                }
                book.add(record);
                lines.push(format!(
                    "New contact {} added with phone number {}, second phone number {}, \
                     birthday {}, and email {}.",
                    name,
                    primary_text,
                    secondary_text.as_deref().unwrap_or("N/A"),
                    birthday.unwrap_or("N/A"),
                    email.unwrap_or("N/A"),
                ));
            }
        }

        Ok(lines.join("\n"))
    }
}

fn find<'a>(book: &'a AddressBook, query: &str) -> CommandResult<&'a ContactRecord> {
    book.find(query)
        .ok_or_else(|| CommandError::ContactNotFound(query.to_string()))
}

fn find_mut<'a>(book: &'a mut AddressBook, query: &str) -> CommandResult<&'a mut ContactRecord> {
    book.find_mut(query)
        .ok_or_else(|| CommandError::ContactNotFound(query.to_string()))
}
