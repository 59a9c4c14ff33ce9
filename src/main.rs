//! Backlogr CLI application entry point
//!
//! This is the main executable for the backlogr backlog tracker. It keeps
//! books and games you intend to get to in a single JSON file and answers
//! the only question that matters: what next?
//!
//! # Features
//!
//! - **Add**: Record books and games with authors, tags, genres, platforms
//! - **Choose**: A repeated-sampling picker selects the next item, honoring
//!   any combination of fuzzy filters
//! - **Show**: List the backlog with filtering and stable sorting
//! - **Edit**: Round-trip one item through `$EDITOR` as JSON
//! - **Quiet Mode**: Suppress informational output for scripting
//!
//! # Usage
//!
//! ```bash
//! # Add a book
//! backlogr book add --title "Dune" --author "Frank Herbert" --tag sf
//!
//! # Pick an unread book with a given tag
//! backlogr book choose --tag sf
//!
//! # Pick a PlayStation-family game, voting over 100 draws
//! backlogr game choose -n 100 --platform ps
//!
//! # List the game backlog, longest first
//! backlogr game show --sort-by time-to-beat --direction desc
//!
//! # Edit an entry
//! backlogr book edit --title "Dune"
//! ```
//!
//! # Configuration
//!
//! The backlog location is read from the user's config directory
//! (`~/.config/backlogr/config.toml` on Linux) and can be overridden per
//! invocation with `--backlog`.

use backlogr::{
    BacklogError,
    cli::{Cli, Commands},
    commands, config, output,
};

type Result<T> = std::result::Result<T, BacklogError>;

fn main() {
    if let Err(err) = run() {
        output::error(&err.to_string());
        std::process::exit(1);
    }
}

/// Load configuration, parse arguments, and dispatch to a command handler
fn run() -> Result<()> {
    let cli = Cli::parse_args();

    // Completions need no config and no backlog file
    if let Commands::Completions { shell } = &cli.command {
        commands::completions(*shell);
        return Ok(());
    }

    let config = config::BacklogrConfig::load()?;
    let quiet = cli.quiet || config.quiet;

    let path = config.resolve_backlog_path(cli.backlog)?;
    let mut backlog = commands::open_backlog(&path, quiet)?;

    match cli.command {
        Commands::Book { command } => commands::book::execute(&mut backlog, command, quiet),
        Commands::Game { command } => commands::game::execute(&mut backlog, command, quiet),
        Commands::Completions { .. } => unreachable!(),
    }
}
