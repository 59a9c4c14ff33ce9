//! Command-line interface definitions and parsing
//!
//! This module defines the complete CLI structure for backlogr using the
//! `clap` crate. The surface is split per domain: a `book` and a `game`
//! subcommand, each with `add`, `choose`, `show`, and `edit` below it.
//!
//! # Commands
//!
//! - **book add / game add**: Add an item to the backlog
//! - **book choose / game choose**: Let the picker select an item
//! - **book show / game show**: List items with optional filter and sort
//! - **book edit / game edit**: Round-trip one item through `$EDITOR`
//! - **completions**: Generate shell completions
//!
//! # Design Features
//!
//! - Filter criteria are shared arg structs flattened into both `choose`
//!   and `show`, so the two commands always accept the same filters
//! - Global `--backlog` and `--quiet` flags
//! - Paired on/off flags (`--started`/`--not-started`) where an item field
//!   is being set, presence-only flags where the backlog is being filtered
//!
//! # Examples
//!
//! ```bash
//! backlogr book add --title "Dune" --author "Frank Herbert" --tag sf
//! backlogr book choose --tag sf
//! backlogr game choose -n 100 --platform ps
//! backlogr game show --sort-by time-to-beat --direction desc
//! ```

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use crate::filters::book::BookCriteria;
use crate::filters::game::{GameCriteria, PlatformQuery};
use crate::lister::Direction;
use crate::models::Platform;

#[derive(Parser, Debug)]
#[command(name = "backlogr")]
#[command(about = "A backlog tracker for books and games", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to the backlog file (overrides the configured location)
    #[arg(long = "backlog", value_name = "PATH", global = true)]
    pub backlog: Option<PathBuf>,

    /// Suppress informational output
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage the book backlog
    #[command(visible_alias = "b")]
    Book {
        #[command(subcommand)]
        command: BookCommands,
    },

    /// Manage the game backlog
    #[command(visible_alias = "g")]
    Game {
        #[command(subcommand)]
        command: GameCommands,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_name = "SHELL")]
        shell: Shell,
    },
}

/// Sort keys for the book show command
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookSortKey {
    Title,
    Pages,
}

/// Sort keys for the game show command
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameSortKey {
    Name,
    TimeToBeat,
    MetacriticScore,
}

/// Platform selector for filters, including the PlayStation family wildcard
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformArg {
    Ps5,
    Ps4,
    Ps3,
    Switch,
    Pc,
    /// Any PlayStation-family platform
    Ps,
}

impl From<PlatformArg> for PlatformQuery {
    fn from(arg: PlatformArg) -> Self {
        match arg {
            PlatformArg::Ps5 => Self::Exact(Platform::Ps5),
            PlatformArg::Ps4 => Self::Exact(Platform::Ps4),
            PlatformArg::Ps3 => Self::Exact(Platform::Ps3),
            PlatformArg::Switch => Self::Exact(Platform::Switch),
            PlatformArg::Pc => Self::Exact(Platform::Pc),
            PlatformArg::Ps => Self::PlaystationFamily,
        }
    }
}

/// Filter criteria shared by the book choose and show commands
#[derive(Args, Debug, Clone)]
pub struct BookCriteriaArgs {
    /// Only match books that have been read before
    #[arg(long = "read", overrides_with = "not_read")]
    pub read: bool,

    /// Only match books that have not been read yet (default)
    #[arg(long = "not-read")]
    pub not_read: bool,

    /// Only match books by the given author
    #[arg(long, value_name = "NAME")]
    pub author: Option<String>,

    /// Only match books with the given tag (can be passed multiple times)
    #[arg(long = "tag", value_name = "TAG")]
    pub tags: Vec<String>,

    /// Only match books in the given series
    #[arg(long, value_name = "TITLE")]
    pub series: Option<String>,
}

impl From<&BookCriteriaArgs> for BookCriteria {
    fn from(args: &BookCriteriaArgs) -> Self {
        Self {
            read: args.read,
            author: args.author.clone(),
            tags: args.tags.clone(),
            series: args.series.clone(),
        }
    }
}

/// Filter criteria shared by the game choose and show commands
#[derive(Args, Debug, Clone)]
pub struct GameCriteriaArgs {
    /// Platform to match games on ("ps" matches the whole PlayStation family)
    #[arg(long, value_name = "PLATFORM")]
    pub platform: Option<PlatformArg>,

    /// Only match games that have been completed before
    #[arg(long)]
    pub completed: bool,

    /// Only match games that have been played before
    #[arg(long)]
    pub played: bool,

    /// Only match games whose achievements have all been completed
    #[arg(long = "achievements-complete")]
    pub achievements_complete: bool,

    /// Only match games with the given tag (can be passed multiple times)
    #[arg(long = "tag", value_name = "TAG")]
    pub tags: Vec<String>,

    /// Only match games in the given genre
    #[arg(long, value_name = "GENRE")]
    pub genre: Option<String>,

    /// Only match games from the given developer
    #[arg(long, value_name = "NAME")]
    pub developer: Option<String>,
}

impl From<&GameCriteriaArgs> for GameCriteria {
    fn from(args: &GameCriteriaArgs) -> Self {
        Self {
            platform: args.platform.map(PlatformQuery::from),
            completed: args.completed,
            played: args.played,
            achievements_complete: args.achievements_complete,
            tags: args.tags.clone(),
            genre: args.genre.clone(),
            developer: args.developer.clone(),
        }
    }
}

/// Book subcommands
#[derive(Subcommand, Debug)]
pub enum BookCommands {
    /// Add a book to the backlog
    Add {
        /// Title of the book
        #[arg(long, value_name = "TITLE")]
        title: String,

        /// Number of pages in the book
        #[arg(long, value_name = "N", default_value_t = 0)]
        pages: u32,

        /// Mark the book as started
        #[arg(long, overrides_with = "not_started")]
        started: bool,

        /// Mark the book as not started (default)
        #[arg(long = "not-started")]
        not_started: bool,

        /// Mark the book as completed
        #[arg(long, overrides_with = "not_completed")]
        completed: bool,

        /// Mark the book as not completed (default)
        #[arg(long = "not-completed")]
        not_completed: bool,

        /// Author who wrote the book (can be passed multiple times)
        #[arg(long = "author", value_name = "NAME")]
        authors: Vec<String>,

        /// Genre associated with the book (can be passed multiple times)
        #[arg(long = "genre", value_name = "GENRE")]
        genres: Vec<String>,

        /// Tag to associate with the book (can be passed multiple times)
        #[arg(long = "tag", value_name = "TAG")]
        tags: Vec<String>,

        /// Title of the book's associated series
        #[arg(long = "series-title", value_name = "TITLE", default_value = "")]
        series_title: String,

        /// Index in the associated series for the given book
        #[arg(long = "series-index", value_name = "N", default_value_t = 0)]
        series_index: u32,
    },

    /// Pick a book from the backlog
    Choose {
        /// Number of random draws per voting round
        #[arg(
            short = 'n',
            long = "num-runs",
            value_name = "N",
            default_value_t = 50,
            value_parser = clap::value_parser!(u32).range(1..)
        )]
        num_runs: u32,

        #[command(flatten)]
        criteria: BookCriteriaArgs,
    },

    /// List books in the backlog
    Show {
        /// Field to sort by (input order when omitted)
        #[arg(long = "sort-by", value_name = "KEY")]
        sort_by: Option<BookSortKey>,

        /// Sort direction
        #[arg(long, value_name = "DIR", default_value = "asc")]
        direction: Direction,

        #[command(flatten)]
        criteria: BookCriteriaArgs,
    },

    /// Edit a book in an external editor
    Edit {
        /// Title of the book
        #[arg(long, value_name = "TITLE")]
        title: String,
    },
}

/// Game subcommands
#[derive(Subcommand, Debug)]
pub enum GameCommands {
    /// Add a game to the backlog
    Add {
        /// Name of the game
        #[arg(long, value_name = "NAME")]
        name: String,

        /// Platform on which to play the game
        #[arg(long, value_name = "PLATFORM")]
        platform: Platform,

        /// Score as given on Metacritic (out of 100)
        #[arg(long = "metacritic-score", value_name = "SCORE", default_value_t = 0.0)]
        metacritic_score: f32,

        /// Mark the game as played
        #[arg(long, overrides_with = "not_played")]
        played: bool,

        /// Mark the game as not played (default)
        #[arg(long = "not-played")]
        not_played: bool,

        /// Mark the game as completed
        #[arg(long, overrides_with = "not_completed")]
        completed: bool,

        /// Mark the game as not completed (default)
        #[arg(long = "not-completed")]
        not_completed: bool,

        /// Mark every achievement of the game as completed
        #[arg(long = "achievements-complete", overrides_with = "achievements_not_complete")]
        achievements_complete: bool,

        /// Mark the achievements as not all completed (default)
        #[arg(long = "achievements-not-complete")]
        achievements_not_complete: bool,

        /// Difficulty of completing the achievements
        #[arg(long = "achievements-difficulty", value_name = "SCORE", default_value_t = 10.0)]
        achievements_difficulty: f32,

        /// Hours it takes to complete the game (completionist or main
        /// story alone, whichever you track)
        #[arg(long = "time-to-beat", value_name = "HOURS", default_value_t = 0.0)]
        time_to_beat: f32,

        /// Tag to associate with the game (can be passed multiple times)
        #[arg(long = "tag", value_name = "TAG")]
        tags: Vec<String>,

        /// Developer of the game
        #[arg(long, value_name = "NAME", default_value = "")]
        developer: String,

        /// Genre associated with the game (can be passed multiple times)
        #[arg(long = "genre", value_name = "GENRE")]
        genres: Vec<String>,
    },

    /// Pick a game from the backlog
    Choose {
        /// Number of random draws per voting round
        #[arg(
            short = 'n',
            long = "num-runs",
            value_name = "N",
            default_value_t = 50,
            value_parser = clap::value_parser!(u32).range(1..)
        )]
        num_runs: u32,

        #[command(flatten)]
        criteria: GameCriteriaArgs,
    },

    /// List games in the backlog
    Show {
        /// Field to sort by (input order when omitted)
        #[arg(long = "sort-by", value_name = "KEY")]
        sort_by: Option<GameSortKey>,

        /// Sort direction
        #[arg(long, value_name = "DIR", default_value = "asc")]
        direction: Direction,

        #[command(flatten)]
        criteria: GameCriteriaArgs,
    },

    /// Edit a game in an external editor
    Edit {
        /// Name of the game
        #[arg(long, value_name = "NAME")]
        name: String,

        /// Platform on which the game is played (disambiguates same-name
        /// entries)
        #[arg(long, value_name = "PLATFORM")]
        platform: Option<Platform>,
    },
}
