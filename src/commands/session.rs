//! Interactive console session: load, read-eval-print, save.

use crate::commands::handler::{CommandHandler, Reply};
use crate::commands::parser::Command;
use crate::error::CommandError;
use crate::models::AddressBook;
use crate::repositories::AddressBookRepository;
use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::io::{self, BufRead, Write};
use tracing::{info, warn};

const PROMPT: &str = "Enter a command: ";

/// Drives one console session over arbitrary input and output streams.
///
/// The book is loaded from the repository before the first prompt and
/// saved once when the user exits or input ends. `today` is asked for on
/// every command so long sessions see the date change.
pub struct Session<'a, R: AddressBookRepository + ?Sized> {
    repository: &'a R,
    handler: CommandHandler,
}

impl<'a, R: AddressBookRepository + ?Sized> Session<'a, R> {
    pub fn new(repository: &'a R, handler: CommandHandler) -> Self {
        Self {
            repository,
            handler,
        }
    }

    /// Run until `exit`/`close` or end of input, then save.
    ///
    /// The book is saved even when reading input or writing output fails;
    /// that I/O error is returned after the save. Returns the book as it
    /// was saved.
    pub fn run<I, O, T>(&self, input: I, mut output: O, today: T) -> Result<AddressBook>
    where
        I: BufRead,
        O: Write,
        T: Fn() -> NaiveDate,
    {
        let mut book = self
            .repository
            .load()
            .context("Failed to load address book")?;
        info!(contacts = book.len(), "Session started");

        let outcome = self.read_eval_print(&mut book, input, &mut output, today);

        self.repository
            .save(&book)
            .context("Failed to save address book")?;
        info!(contacts = book.len(), "Session ended");

        outcome.context("Console I/O failed")?;
        Ok(book)
    }

    fn read_eval_print<I, O, T>(
        &self,
        book: &mut AddressBook,
        mut input: I,
        output: &mut O,
        today: T,
    ) -> io::Result<()>
    where
        I: BufRead,
        O: Write,
        T: Fn() -> NaiveDate,
    {
        writeln!(output, "Welcome to the assistant bot!")?;
        let mut buf = Vec::new();

        loop {
            write!(output, "{}", PROMPT)?;
            output.flush()?;

            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                writeln!(output)?;
                return Ok(());
            }

            let line = decode_line(&buf);
            let command = match Command::parse(&line) {
                Ok(command) => command,
                Err(CommandError::Empty) => continue,
                Err(e) => {
                    writeln!(output, "Error: {}", e)?;
                    continue;
                }
            };

            match self.handler.execute(book, command, today()) {
                Ok(Reply::Message(message)) => writeln!(output, "{}", message)?,
                Ok(Reply::Exit(message)) => {
                    writeln!(output, "{}", message)?;
                    return Ok(());
                }
                Err(e) => {
                    warn!(error = %e, "Command failed");
                    writeln!(output, "Error: {}", e)?;
                }
            }
        }
    }
}

/// Decode one input line, replacing invalid UTF-8 rather than failing.
fn decode_line(buf: &[u8]) -> String {
    if std::str::from_utf8(buf).is_err() {
        warn!("Input line is not valid UTF-8");
    }
    String::from_utf8_lossy(buf)
        .trim_end_matches(['\r', '\n'])
        .to_string()
}
