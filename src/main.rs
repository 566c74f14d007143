//! Contact Book - Main entry point
//!
//! Runs the interactive assistant on stdin/stdout. Logs go to stderr.

use anyhow::{Context, Result};
use contact_book::{CommandHandler, Config, JsonFileRepository, Session};
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration first: it provides the default log level
    let config = Config::from_env().context("Failed to load configuration")?;

    // Initialize logging (stderr only to keep the console clean)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!(
        "Starting contact book with storage at {}",
        config.book_path.display()
    );

    let repository = JsonFileRepository::new(config.book_path.clone());
    let handler = CommandHandler::new(config.birthday_window_days);
    let session = Session::new(&repository, handler);

    let stdin = io::stdin();
    if let Err(e) = session.run(stdin.lock(), io::stdout(), || {
        chrono::Local::now().date_naive()
    }) {
        error!("Session failed: {:#}", e);
        return Err(e);
    }

    info!("Contact book shutdown complete");
    Ok(())
}
