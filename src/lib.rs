//! Backlogr - a personal backlog tracker for books and games
//!
//! This library keeps a backlog of books and games in a JSON file, filters it
//! with composable fuzzy predicates, and lets a repeated-sampling picker
//! decide what to read or play next.

use thiserror::Error;

pub mod cli;
pub mod commands;
pub mod config;
pub mod editor;
pub mod filters;
pub mod lister;
pub mod matcher;
pub mod models;
pub mod output;
pub mod picker;
pub mod store;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum BacklogError {
    /// Backlog store error
    #[error("Store error: {0}")]
    StoreError(#[from] store::StoreError),
    /// Picker error
    #[error("Pick error: {0}")]
    PickError(#[from] picker::PickError),
    /// External editor error
    #[error("Editor error: {0}")]
    EditorError(#[from] editor::EditorError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Interactive prompt error
    #[error("Prompt error: {0}")]
    PromptError(#[from] dialoguer::Error),
}
