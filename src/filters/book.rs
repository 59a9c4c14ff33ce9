//! Filters over books

use crate::filters::{AndFilter, Filter};
use crate::matcher::is_close;
use crate::models::Book;

/// Filter criteria for books, as collected from the command line
#[derive(Debug, Clone, Default)]
pub struct BookCriteria {
    /// Match books that have (or have not) been read
    pub read: bool,
    /// Match books by the given author
    pub author: Option<String>,
    /// Match books carrying any of the given tags
    pub tags: Vec<String>,
    /// Match books in the given series
    pub series: Option<String>,
}

/// Compose the book filter for the given criteria
///
/// The read filter is always applied (its default matches the unread
/// backlog); the others only when a value was supplied.
#[must_use]
pub fn create_filter(criteria: &BookCriteria) -> AndFilter<Book> {
    let mut filter = AndFilter::new();
    filter.add(ReadFilter::new(criteria.read));
    if let Some(author) = &criteria.author {
        filter.add(AuthorFilter::new(author));
    }
    if !criteria.tags.is_empty() {
        filter.add(TagsFilter::new(criteria.tags.clone()));
    }
    if let Some(series) = &criteria.series {
        filter.add(SeriesFilter::new(series));
    }
    filter
}

/// Filter based on having read the book
#[derive(Debug, Clone, Copy)]
pub struct ReadFilter {
    read: bool,
}

impl ReadFilter {
    #[must_use]
    pub const fn new(read: bool) -> Self {
        Self { read }
    }
}

impl Filter<Book> for ReadFilter {
    fn matches(&self, item: &Book) -> bool {
        item.completed == self.read
    }
}

/// Filter based on author
///
/// Matches when any whitespace-separated part of any author name is close
/// to the configured name, so `--author tolkien` finds "J. R. R. Tolkien".
#[derive(Debug, Clone)]
pub struct AuthorFilter {
    author: String,
}

impl AuthorFilter {
    pub fn new(author: impl Into<String>) -> Self {
        Self {
            author: author.into(),
        }
    }
}

impl Filter<Book> for AuthorFilter {
    fn matches(&self, item: &Book) -> bool {
        item.authors.iter().any(|author| {
            author
                .split_whitespace()
                .any(|name| is_close(name, &self.author))
        })
    }
}

/// Filter based on tags: any of the book's tags close to any configured tag
#[derive(Debug, Clone)]
pub struct TagsFilter {
    tags: Vec<String>,
}

impl TagsFilter {
    #[must_use]
    pub const fn new(tags: Vec<String>) -> Self {
        Self { tags }
    }
}

impl Filter<Book> for TagsFilter {
    fn matches(&self, item: &Book) -> bool {
        item.tags
            .iter()
            .any(|tag| self.tags.iter().any(|target| is_close(tag, target)))
    }
}

/// Filter based on series title
#[derive(Debug, Clone)]
pub struct SeriesFilter {
    series: String,
}

impl SeriesFilter {
    pub fn new(series: impl Into<String>) -> Self {
        Self {
            series: series.into(),
        }
    }
}

impl Filter<Book> for SeriesFilter {
    fn matches(&self, item: &Book) -> bool {
        is_close(&self.series, &item.series.title)
    }
}
