//! Error types for the contact book.
//!
//! Domain validation failures live in [`crate::domain::ValidationError`];
//! this module defines the errors raised at the storage, configuration and
//! command boundaries using `thiserror`.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur while loading or saving the address book.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Reading or writing the book file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The book file is not valid JSON or contains invalid records
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The book file was written by an incompatible version
    #[error("Unsupported storage format version: {0}")]
    UnsupportedVersion(u32),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Failed to load .env file
    #[error("Failed to load .env file: {0}")]
    DotenvError(String),
}

/// Errors that can occur while running a console command.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CommandError {
    /// Input line was blank
    #[error("Empty command")]
    Empty,

    /// Command name not recognised
    #[error("Unknown command '{0}'")]
    UnknownCommand(String),

    /// Too few arguments; carries the usage line
    #[error("Missing arguments. Usage: {0}")]
    MissingArguments(&'static str),

    /// No contact matches the given name or phone
    #[error("Contact '{0}' not found")]
    ContactNotFound(String),

    /// Domain validation failed
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;
