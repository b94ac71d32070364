//! Catalog statistics projection.

use crate::model::book::Book;

/// Number of books sharing one genre value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenreCount {
    pub genre: String,
    pub count: usize,
}

/// Aggregate counts over a catalog.
///
/// `read + unread == total` and the genre counts sum to `total`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogStats {
    pub total: usize,
    pub read: usize,
    pub unread: usize,
    /// Genres in first-seen order. The empty string is its own group.
    pub genres: Vec<GenreCount>,
}

impl CatalogStats {
    pub(crate) fn from_books(books: &[Book]) -> Self {
        let total = books.len();
        let read = books.iter().filter(|book| book.read).count();

        // Why: a linear scan keeps genres in first-seen order, so repeated
        // runs over the same file print the same listing.
        let mut genres: Vec<GenreCount> = Vec::new();
        for book in books {
            match genres.iter_mut().find(|entry| entry.genre == book.genre) {
                Some(entry) => entry.count += 1,
                None => genres.push(GenreCount {
                    genre: book.genre.clone(),
                    count: 1,
                }),
            }
        }

        Self {
            total,
            read,
            unread: total - read,
            genres,
        }
    }

    /// Count for an exact genre value, if present.
    pub fn genre_count(&self, genre: &str) -> Option<usize> {
        self.genres
            .iter()
            .find(|entry| entry.genre == genre)
            .map(|entry| entry.count)
    }
}
