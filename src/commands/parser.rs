//! Turning a console line into a [`Command`].

use crate::error::{CommandError, CommandResult};

/// Split a line into a lower-cased command word and its arguments.
///
/// Returns `None` for blank input.
pub fn parse_input(line: &str) -> Option<(String, Vec<String>)> {
    let mut parts = line.split_whitespace();
    let command = parts.next()?.to_lowercase();
    let args = parts.map(str::to_string).collect();
    Some((command, args))
}

/// A console command with its arguments checked for count.
///
/// Wherever a contact is named, either a name or one of its phone numbers
/// may be given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add {
        name: String,
        phone: String,
        extras: Vec<String>,
    },
    Change {
        contact: String,
        old_phone: String,
        new_phone: String,
    },
    Phone {
        contact: String,
    },
    All,
    AddBirthday {
        contact: String,
        birthday: String,
    },
    ShowBirthday {
        contact: String,
    },
    ClearBirthday {
        contact: String,
    },
    AddEmail {
        contact: String,
        email: String,
    },
    RemovePhone {
        contact: String,
        phone: String,
    },
    RemovePhones {
        contact: String,
    },
    Find {
        query: String,
    },
    Delete {
        name: String,
    },
    Birthdays,
    Exit,
}

/// Take exactly `N` leading arguments or fail with the usage line.
fn take<const N: usize>(args: &[String], usage: &'static str) -> CommandResult<[String; N]> {
    if args.len() < N {
        return Err(CommandError::MissingArguments(usage));
    }
    Ok(std::array::from_fn(|i| args[i].clone()))
}

impl Command {
    /// Parse a console line.
    ///
    /// # Errors
    ///
    /// - `CommandError::Empty` for a blank line
    /// - `CommandError::UnknownCommand` for an unrecognised command word
    /// - `CommandError::MissingArguments` when arguments are missing
    pub fn parse(line: &str) -> CommandResult<Self> {
        let (command, args) = parse_input(line).ok_or(CommandError::Empty)?;

        let parsed = match command.as_str() {
            "hello" => Command::Hello,
            "add" => {
                let [name, phone] =
                    take::<2>(&args, "add <name> <phone> [phone] [DD.MM.YYYY] [email]")?;
                Command::Add {
                    name,
                    phone,
                    extras: args[2..].to_vec(),
                }
            }
            "change" => {
                let [contact, old_phone, new_phone] =
                    take::<3>(&args, "change <name> <old phone> <new phone>")?;
                Command::Change {
                    contact,
                    old_phone,
                    new_phone,
                }
            }
            "phone" => {
                let [contact] = take::<1>(&args, "phone <name>")?;
                Command::Phone { contact }
            }
            "all" => Command::All,
            "add_birthday" => {
                let [contact, birthday] =
                    take::<2>(&args, "add_birthday <name> <DD.MM.YYYY>")?;
                Command::AddBirthday { contact, birthday }
            }
            "show_birthday" => {
                let [contact] = take::<1>(&args, "show_birthday <name>")?;
                Command::ShowBirthday { contact }
            }
            "clear_birthday" => {
                let [contact] = take::<1>(&args, "clear_birthday <name>")?;
                Command::ClearBirthday { contact }
            }
            "add_email" => {
                let [contact, email] = take::<2>(&args, "add_email <name> <email>")?;
                Command::AddEmail { contact, email }
            }
            "remove_phone" => {
                let [contact, phone] = take::<2>(&args, "remove_phone <name> <phone>")?;
                Command::RemovePhone { contact, phone }
            }
            "remove_phones" => {
                let [contact] = take::<1>(&args, "remove_phones <name>")?;
                Command::RemovePhones { contact }
            }
            "find" => {
                let [query] = take::<1>(&args, "find <name or phone>")?;
                Command::Find { query }
            }
            "delete" => {
                let [name] = take::<1>(&args, "delete <name>")?;
                Command::Delete { name }
            }
            "birthdays" => Command::Birthdays,
            "close" | "exit" => Command::Exit,
            _ => return Err(CommandError::UnknownCommand(command)),
        };

        Ok(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_input_splits_and_lowercases() {
        let (command, args) = parse_input("  ADD  Olena   0991234567 ").unwrap();
        assert_eq!(command, "add");
        assert_eq!(args, vec!["Olena", "0991234567"]);
        assert!(parse_input("   ").is_none());
    }

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!(Command::parse("hello").unwrap(), Command::Hello);
        assert_eq!(Command::parse("all").unwrap(), Command::All);
        assert_eq!(Command::parse("Birthdays").unwrap(), Command::Birthdays);
        assert_eq!(Command::parse("close").unwrap(), Command::Exit);
        assert_eq!(Command::parse("exit").unwrap(), Command::Exit);
    }

    #[test]
    fn test_parse_add_collects_extras() {
        let command =
            Command::parse("add Olena 0991234567 0501112233 03.01.1990 o@ex.com").unwrap();
        assert_eq!(
            command,
            Command::Add {
                name: "Olena".to_string(),
                phone: "0991234567".to_string(),
                extras: vec![
                    "0501112233".to_string(),
                    "03.01.1990".to_string(),
                    "o@ex.com".to_string()
                ],
            }
        );
    }

    #[test]
    fn test_parse_change_ignores_surplus_arguments() {
        let command = Command::parse("change Olena 0991234567 0501112233 extra").unwrap();
        assert_eq!(
            command,
            Command::Change {
                contact: "Olena".to_string(),
                old_phone: "0991234567".to_string(),
                new_phone: "0501112233".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_missing_arguments() {
        assert_eq!(
            Command::parse("add Olena"),
            Err(CommandError::MissingArguments(
                "add <name> <phone> [phone] [DD.MM.YYYY] [email]"
            ))
        );
        assert!(matches!(
            Command::parse("change Olena 0991234567"),
            Err(CommandError::MissingArguments(_))
        ));
        assert!(matches!(
            Command::parse("phone"),
            Err(CommandError::MissingArguments(_))
        ));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(Command::parse(""), Err(CommandError::Empty));
        assert_eq!(
            Command::parse("fly away"),
            Err(CommandError::UnknownCommand("fly".to_string()))
        );
    }
}
