//! Ordered book collection and its query operations.

use crate::catalog::stats::CatalogStats;
use crate::model::book::{Book, BookValidationError};

/// Insertion-ordered collection of books for one session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    books: Vec<Book>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps already-persisted books without re-validating them.
    pub fn from_books(books: Vec<Book>) -> Self {
        Self { books }
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Validates and appends `book`.
    ///
    /// On validation failure the catalog is left unchanged.
    pub fn add(&mut self, book: Book) -> Result<(), BookValidationError> {
        book.validate()?;
        self.books.push(book);
        Ok(())
    }

    /// Removes every book whose title equals `title` case-insensitively.
    ///
    /// Returns the number of removed books.
    pub fn remove(&mut self, title: &str) -> usize {
        let before = self.books.len();
        self.books.retain(|book| !book.has_title(title));
        before - self.books.len()
    }

    /// Lazily yields books whose title or author contains `query`,
    /// case-insensitively. An empty query yields every book.
    pub fn search<'a>(&'a self, query: &str) -> impl Iterator<Item = &'a Book> + 'a {
        let needle = query.to_lowercase();
        self.books
            .iter()
            .filter(move |book| book.contains_lowercase(&needle))
    }

    /// All books in insertion order.
    pub fn list(&self) -> &[Book] {
        &self.books
    }

    /// Tallies read/unread and per-genre counts.
    pub fn statistics(&self) -> CatalogStats {
        CatalogStats::from_books(&self.books)
    }
}
