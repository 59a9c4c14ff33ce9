//! Command implementations
//!
//! Each domain is a module with execute functions that take parsed CLI args
//! and run the operation against the loaded backlog.

pub mod book;
pub mod game;

use std::io;
use std::path::Path;

use clap::CommandFactory;
use clap_complete::{Shell, generate};

use crate::{BacklogError, cli::Cli, output, store::Backlog, store::StoreError};

type Result<T> = std::result::Result<T, BacklogError>;

/// Open the backlog file, offering to create it when it does not exist
///
/// Quiet mode auto-confirms the creation, so scripted first runs work.
///
/// # Errors
///
/// Returns `BacklogError` if the file cannot be loaded, the user declines
/// to create a missing file, or creation fails.
pub fn open_backlog(path: &Path, quiet: bool) -> Result<Backlog> {
    if path.exists() {
        return Ok(Backlog::load(path)?);
    }
    let prompt = format!(
        "Backlog file {} does not exist. Would you like to create it?",
        path.display()
    );
    if output::confirm(&prompt, quiet)? {
        Ok(Backlog::init(path)?)
    } else {
        Err(StoreError::Missing(path.to_path_buf()).into())
    }
}

/// Generate shell completions on stdout
pub fn completions(shell: Shell) {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "backlogr", &mut io::stdout());
}
