//! Store-specific error types

use std::path::PathBuf;

use thiserror::Error;

/// Errors from loading or saving the backlog file
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backlog file does not exist and the user declined to create it
    #[error("Backlog file {} does not exist", .0.display())]
    Missing(PathBuf),

    /// The backlog file is not a `.json` file
    #[error("As of now, the only supported backlog format is JSON. Got file {}", .0.display())]
    UnsupportedFormat(PathBuf),

    /// The backlog file does not contain a JSON object at the top level
    #[error("Expected {} to parse into a mapping", .0.display())]
    NotAnObject(PathBuf),

    /// The backlog file could not be parsed
    #[error("Failed to parse backlog: {0}")]
    Json(#[from] serde_json::Error),

    /// Represents an I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
