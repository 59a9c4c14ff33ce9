//! Output formatting for CLI display
//!
//! All user-facing rendering goes through here: item lines with their
//! emoji accents, quiet-aware informational output, and the confirmation
//! prompt.

use colored::Colorize;
use dialoguer::{Confirm, theme::ColorfulTheme};

use crate::models::{Book, Game};

/// Format a book for display
#[must_use]
pub fn book_line(book: &Book) -> String {
    format!("📚  {book}")
}

/// Format a game for display
#[must_use]
pub fn game_line(game: &Game) -> String {
    format!("🎮  {game}")
}

/// Print an informational line unless quiet mode is on
pub fn info(message: &str, quiet: bool) {
    if !quiet {
        println!("{message}");
    }
}

/// Print a warning line
pub fn warn(message: &str) {
    eprintln!("{}", message.yellow());
}

/// Print an error line
pub fn error(message: &str) {
    eprintln!("{}", format!("Error: {message}").red());
}

/// Ask the user for yes/no confirmation
///
/// Quiet mode auto-confirms without prompting, so scripted runs never
/// block on a terminal.
///
/// # Errors
///
/// Returns `dialoguer::Error` if the prompt cannot be displayed or read.
pub fn confirm(prompt: &str, quiet: bool) -> Result<bool, dialoguer::Error> {
    if quiet {
        return Ok(true);
    }
    Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .default(false)
        .interact()
}
