//! Console command layer.
//!
//! Parses user input, runs it against an explicitly owned address book and
//! renders the replies. All contact logic lives in the domain and models;
//! this layer only wires arguments to it.

pub mod handler;
pub mod parser;
pub mod session;

pub use handler::{CommandHandler, Reply};
pub use parser::{parse_input, Command};
pub use session::Session;
