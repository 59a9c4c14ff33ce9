//! Backlog persistence
//!
//! The whole backlog lives in one JSON file of the shape
//! `{ "books": [...], "games": [...] }`. It is read fully into memory at
//! startup, mutated there, and written back wholesale - there is no
//! database and no partial update. Items are schema-checked by the typed
//! serde decoding in [`crate::models`].

pub mod error;

pub use error::StoreError;

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::models::{Book, Game};

type Result<T> = std::result::Result<T, StoreError>;

/// Outcome of adding an item to the backlog
#[derive(Debug)]
pub enum AddOutcome<T> {
    /// The item was appended
    Added,
    /// An item with the same identity already exists at `index`; the
    /// rejected item is handed back so the caller can offer an overwrite
    Duplicate { index: usize, item: T },
}

/// The in-memory backlog, bound to the file it was loaded from
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Backlog {
    #[serde(skip)]
    path: PathBuf,

    /// Books in the backlog
    #[serde(default)]
    pub books: Vec<Book>,

    /// Games in the backlog
    #[serde(default)]
    pub games: Vec<Game>,
}

impl Backlog {
    /// Load the backlog from an existing JSON file
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the file is missing, is not a `.json` file,
    /// cannot be read, or does not hold a JSON object of backlog shape.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if !path.exists() {
            return Err(StoreError::Missing(path));
        }
        check_extension(&path)?;
        let contents = fs::read_to_string(&path)?;
        let value: serde_json::Value = serde_json::from_str(&contents)?;
        if !value.is_object() {
            return Err(StoreError::NotAnObject(path));
        }
        let mut backlog: Self = serde_json::from_value(value)?;
        backlog.path = path;
        Ok(backlog)
    }

    /// Create an empty backlog file at `path` and return the backlog
    ///
    /// Parent directories are created as needed.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the path is not a `.json` file or the file
    /// cannot be written.
    pub fn init(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        check_extension(&path)?;
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        let backlog = Self {
            path,
            ..Self::default()
        };
        backlog.save()?;
        Ok(backlog)
    }

    /// Write the backlog back to its file as pretty-printed JSON
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if serialization or the write fails.
    pub fn save(&self) -> Result<()> {
        let mut contents = serde_json::to_string_pretty(self)?;
        contents.push('\n');
        fs::write(&self.path, contents)?;
        Ok(())
    }

    /// The file this backlog is bound to
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Index of the book with the same identity, if present
    #[must_use]
    pub fn find_book(&self, book: &Book) -> Option<usize> {
        self.books.iter().position(|existing| existing == book)
    }

    /// Index of the game with the same identity, if present
    #[must_use]
    pub fn find_game(&self, game: &Game) -> Option<usize> {
        self.games.iter().position(|existing| existing == game)
    }

    /// Add a book, detecting duplicates by identity (title + authors)
    pub fn add_book(&mut self, book: Book) -> AddOutcome<Book> {
        if let Some(index) = self.find_book(&book) {
            return AddOutcome::Duplicate { index, item: book };
        }
        self.books.push(book);
        AddOutcome::Added
    }

    /// Add a game, detecting duplicates by identity (name + platform)
    pub fn add_game(&mut self, game: Game) -> AddOutcome<Game> {
        if let Some(index) = self.find_game(&game) {
            return AddOutcome::Duplicate { index, item: game };
        }
        self.games.push(game);
        AddOutcome::Added
    }

    /// Replace the book at `index` with a new value
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds; callers obtain indices from
    /// [`Backlog::find_book`] or [`Backlog::add_book`].
    pub fn replace_book(&mut self, index: usize, book: Book) {
        self.books[index] = book;
    }

    /// Replace the game at `index` with a new value
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds; callers obtain indices from
    /// [`Backlog::find_game`] or [`Backlog::add_game`].
    pub fn replace_game(&mut self, index: usize, game: Game) {
        self.games[index] = game;
    }
}

/// Reject any path that is not a `.json` file
fn check_extension(path: &Path) -> Result<()> {
    if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
        return Err(StoreError::UnsupportedFormat(path.to_path_buf()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing;

    fn temp_backlog_path(dir: &tempfile::TempDir) -> PathBuf {
        dir.path().join("backlog.json")
    }

    #[test]
    fn test_init_creates_an_empty_backlog_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = temp_backlog_path(&dir);

        let backlog = Backlog::init(&path).unwrap();
        assert!(path.exists());
        assert!(backlog.books.is_empty());
        assert!(backlog.games.is_empty());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = temp_backlog_path(&dir);

        let mut backlog = Backlog::init(&path).unwrap();
        backlog.books = testing::sample_books();
        backlog.games = testing::sample_games();
        backlog.save().unwrap();

        let reloaded = Backlog::load(&path).unwrap();
        assert_eq!(
            serde_json::to_value(&reloaded).unwrap(),
            serde_json::to_value(&backlog).unwrap()
        );
    }

    #[test]
    fn test_load_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = Backlog::load(temp_backlog_path(&dir));
        assert!(matches!(result, Err(StoreError::Missing(_))));
    }

    #[test]
    fn test_load_rejects_non_json_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("backlog.yaml");
        fs::write(&path, "{}").unwrap();

        let result = Backlog::load(&path);
        assert!(matches!(result, Err(StoreError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_load_rejects_non_object_top_level() {
        let dir = tempfile::tempdir().unwrap();
        let path = temp_backlog_path(&dir);
        fs::write(&path, "[1, 2, 3]").unwrap();

        let result = Backlog::load(&path);
        assert!(matches!(result, Err(StoreError::NotAnObject(_))));
    }

    #[test]
    fn test_load_tolerates_missing_sections() {
        let dir = tempfile::tempdir().unwrap();
        let path = temp_backlog_path(&dir);
        fs::write(&path, "{}").unwrap();

        let backlog = Backlog::load(&path).unwrap();
        assert!(backlog.books.is_empty());
        assert!(backlog.games.is_empty());
    }

    #[test]
    fn test_add_book_detects_duplicates_by_identity() {
        let mut backlog = Backlog::default();
        let book = testing::book("Dune", &["Frank Herbert"]);
        assert!(matches!(backlog.add_book(book.clone()), AddOutcome::Added));

        let mut updated = book;
        updated.pages = 412;
        match backlog.add_book(updated) {
            AddOutcome::Duplicate { index, item } => {
                assert_eq!(index, 0);
                backlog.replace_book(index, item);
                assert_eq!(backlog.books[0].pages, 412);
            }
            AddOutcome::Added => panic!("expected a duplicate"),
        }
    }

    #[test]
    fn test_add_game_same_name_other_platform_is_not_a_duplicate() {
        let mut backlog = Backlog::default();
        backlog.add_game(testing::game("Hades", crate::models::Platform::Switch));
        assert!(matches!(
            backlog.add_game(testing::game("Hades", crate::models::Platform::Pc)),
            AddOutcome::Added
        ));
        assert_eq!(backlog.games.len(), 2);
    }
}
