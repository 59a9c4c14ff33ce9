//! External-editor round-trip for item editing
//!
//! Editing an item means serializing it to a temporary JSON file, handing
//! that file to the user's `$EDITOR`, and parsing whatever they saved back
//! into a fresh value. The caller replaces the stored item with the
//! returned one; nothing is mutated in place.
//!
//! Only editors on a small allowlist are launched. `$EDITOR` is an
//! arbitrary command line to execute, and this flow runs it with a
//! predictable file argument.

use std::env;
use std::fs;
use std::io::Write;
use std::process::Command;

use dialoguer::{Select, theme::ColorfulTheme};
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Editors the edit flow is allowed to launch
const ALLOWED_EDITORS: &[&str] = &["vim", "/usr/bin/vim"];

/// Errors from the editing flow
#[derive(Debug, Error)]
pub enum EditorError {
    /// `$EDITOR` is set to something outside the allowlist
    #[error("Unsupported editor {0}")]
    UnsupportedEditor(String),

    /// The editor process did not exit cleanly
    #[error("Editor exited with {0}")]
    EditorFailed(std::process::ExitStatus),

    /// The item could not be serialized for editing
    #[error("Failed to encode {description} as JSON: {source}")]
    Encode {
        description: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// The edited contents could not be parsed back into an item
    #[error("Failed to parse edited {description} as JSON: {source}")]
    Decode {
        description: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// No stored item matched the query, not even fuzzily
    #[error("Could not find {description} matching {query}")]
    NoMatch {
        description: &'static str,
        query: String,
    },

    /// Interactive candidate selection failed
    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    /// Represents an I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

type Result<T> = std::result::Result<T, EditorError>;

/// Run one item through the external editor and return the edited value
///
/// `description` names the item kind ("book", "game") in error messages.
///
/// # Errors
///
/// Returns `EditorError` if the editor is not allowlisted, fails to run,
/// exits non-zero, or the edited contents do not parse back into the item
/// type.
pub fn edit_item<T>(item: &T, description: &'static str) -> Result<T>
where
    T: Serialize + DeserializeOwned,
{
    let editor = resolve_editor()?;

    let mut file = tempfile::Builder::new()
        .prefix("backlogr-")
        .suffix(".json")
        .tempfile()?;
    let encoded = serde_json::to_string_pretty(item)
        .map_err(|source| EditorError::Encode { description, source })?;
    file.write_all(encoded.as_bytes())?;
    file.flush()?;

    let status = Command::new(&editor).arg(file.path()).status()?;
    if !status.success() {
        return Err(EditorError::EditorFailed(status));
    }

    // Re-read through the path: the editor may have replaced the file
    let contents = fs::read_to_string(file.path())?;
    serde_json::from_str(&contents).map_err(|source| EditorError::Decode { description, source })
}

/// Prompt the user to pick one of several fuzzy candidates
///
/// `labels` are rendered one per row; the returned index is into `labels`.
///
/// # Errors
///
/// Returns [`EditorError::NoMatch`] when there are no candidates, and a
/// prompt error when the selection is cancelled or fails.
pub fn choose_candidate(
    labels: &[String],
    description: &'static str,
    query: &str,
) -> Result<usize> {
    if labels.is_empty() {
        return Err(EditorError::NoMatch {
            description,
            query: query.to_string(),
        });
    }
    let choice = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(format!("Choose a {description} to edit"))
        .items(labels)
        .default(0)
        .interact()?;
    Ok(choice)
}

/// Resolve `$EDITOR` against the allowlist (defaults to `vim`)
fn resolve_editor() -> Result<String> {
    let editor = env::var("EDITOR").unwrap_or_else(|_| String::from("vim"));
    let editor = editor.trim();
    if !ALLOWED_EDITORS.contains(&editor) {
        return Err(EditorError::UnsupportedEditor(editor.to_string()));
    }
    Ok(editor.to_string())
}
