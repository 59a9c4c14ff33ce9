//! Book records

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// A book's position in a series
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Series {
    /// Title of the series
    #[serde(default)]
    pub title: String,
    /// Index of the book within the series
    #[serde(default)]
    pub index: u32,
}

/// A book in the backlog
///
/// Identity (equality and hashing) is title + authors; the remaining fields
/// are detail that may change without making it a different entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "BookRepr")]
pub struct Book {
    /// Title of the book
    pub title: String,
    /// Number of pages
    pub pages: u32,
    /// Whether the book has been started
    pub started: bool,
    /// Whether the book has been completed
    pub completed: bool,
    /// Author(s) who wrote the book
    pub authors: Vec<String>,
    /// Genres associated with the book
    pub genres: Vec<String>,
    /// Tags associated with the book
    pub tags: Vec<String>,
    /// The book's position in its series
    pub series: Series,
}

impl Book {
    /// Create a book with the given title and all other fields defaulted
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            pages: 0,
            started: false,
            completed: false,
            authors: Vec::new(),
            genres: Vec::new(),
            tags: Vec::new(),
            series: Series::default(),
        }
    }
}

impl PartialEq for Book {
    fn eq(&self, other: &Self) -> bool {
        self.title == other.title && self.authors == other.authors
    }
}

impl Eq for Book {}

impl Hash for Book {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.title.hash(state);
        self.authors.hash(state);
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)?;
        if !self.authors.is_empty() {
            write!(f, " by {}", self.authors.join(", "))?;
        }
        if !self.series.title.is_empty() && self.series.title != self.title {
            write!(f, " ({} #{})", self.series.title, self.series.index)?;
        }
        Ok(())
    }
}

/// Raw JSON shape of a book, with the backlog file's field defaults
#[derive(Deserialize)]
struct BookRepr {
    title: String,
    #[serde(default)]
    pages: u32,
    #[serde(default)]
    started: bool,
    #[serde(default)]
    completed: bool,
    #[serde(default)]
    authors: Vec<String>,
    #[serde(default)]
    genres: Vec<String>,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    series: Option<SeriesRepr>,
}

#[derive(Deserialize)]
struct SeriesRepr {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    index: u32,
}

impl From<BookRepr> for Book {
    fn from(repr: BookRepr) -> Self {
        // A missing series title falls back to the book's own title
        let series = match repr.series {
            Some(series) => Series {
                title: series.title.unwrap_or_else(|| repr.title.clone()),
                index: series.index,
            },
            None => Series {
                title: repr.title.clone(),
                index: 0,
            },
        };
        Self {
            title: repr.title,
            pages: repr.pages,
            started: repr.started,
            completed: repr.completed,
            authors: repr.authors,
            genres: repr.genres,
            tags: repr.tags,
            series,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_ignores_detail_fields() {
        let mut one = Book::new("Dune");
        one.authors = vec!["Frank Herbert".into()];
        let mut two = one.clone();
        two.pages = 412;
        two.completed = true;
        assert_eq!(one, two);
    }

    #[test]
    fn test_identity_differs_on_authors() {
        let mut one = Book::new("Dune");
        one.authors = vec!["Frank Herbert".into()];
        let two = Book::new("Dune");
        assert_ne!(one, two);
    }

    #[test]
    fn test_json_defaults() {
        let book: Book = serde_json::from_str(r#"{"title": "Dune"}"#).unwrap();
        assert_eq!(book.pages, 0);
        assert!(!book.started);
        assert!(!book.completed);
        assert!(book.authors.is_empty());
        assert_eq!(book.series.index, 0);
    }

    #[test]
    fn test_missing_series_title_falls_back_to_book_title() {
        let book: Book = serde_json::from_str(r#"{"title": "Dune"}"#).unwrap();
        assert_eq!(book.series.title, "Dune");

        let book: Book =
            serde_json::from_str(r#"{"title": "Dune", "series": {"index": 2}}"#).unwrap();
        assert_eq!(book.series.title, "Dune");
        assert_eq!(book.series.index, 2);
    }

    #[test]
    fn test_explicit_series_title_is_kept() {
        let book: Book = serde_json::from_str(
            r#"{"title": "The Fellowship of the Ring", "series": {"title": "The Lord of the Rings", "index": 1}}"#,
        )
        .unwrap();
        assert_eq!(book.series.title, "The Lord of the Rings");
        assert_eq!(book.series.index, 1);
    }

    #[test]
    fn test_display_includes_authors_and_series() {
        let mut book = Book::new("The Fellowship of the Ring");
        book.authors = vec!["J. R. R. Tolkien".into()];
        book.series = Series {
            title: "The Lord of the Rings".into(),
            index: 1,
        };
        assert_eq!(
            book.to_string(),
            "The Fellowship of the Ring by J. R. R. Tolkien (The Lord of the Rings #1)"
        );
    }
}
