//! Library use-case service.
//!
//! # Responsibility
//! - Own the session catalog and its backing store.
//! - Persist the full catalog after every successful mutation.
//!
//! # Invariants
//! - A failed save never rolls back the in-memory catalog.
//! - Rejected or no-op mutations never write to the store.
//! - A failed load starts the session with an empty catalog.

use crate::catalog::book_catalog::Catalog;
use crate::catalog::stats::CatalogStats;
use crate::model::book::{Book, BookDraft, BookValidationError};
use crate::store::{BookStore, StoreError};
use log::{info, warn};

/// How the initial load went.
#[derive(Debug)]
pub enum LoadStatus {
    /// Nothing stored yet; catalog starts empty.
    Missing,
    /// Stored books were loaded.
    Loaded { count: usize },
    /// Stored data was unreadable; catalog starts empty.
    Failed(StoreError),
}

/// Result of persisting after a mutation.
#[derive(Debug)]
pub enum SaveStatus {
    Saved,
    /// Mutation stays applied in memory.
    Failed(StoreError),
}

impl SaveStatus {
    pub fn is_saved(&self) -> bool {
        matches!(self, Self::Saved)
    }
}

/// Result of removing books by title.
#[derive(Debug)]
pub enum RemoveOutcome {
    NotFound,
    Removed { count: usize, save: SaveStatus },
}

/// Session facade over a [`Catalog`] and a [`BookStore`].
pub struct LibraryService<S: BookStore> {
    store: S,
    catalog: Catalog,
}

impl<S: BookStore> LibraryService<S> {
    /// Loads the catalog from `store` and returns the service with the
    /// load outcome.
    pub fn open(store: S) -> (Self, LoadStatus) {
        let (catalog, status) = match store.load() {
            Ok(Some(books)) => {
                let count = books.len();
                (Catalog::from_books(books), LoadStatus::Loaded { count })
            }
            Ok(None) => (Catalog::new(), LoadStatus::Missing),
            Err(err) => {
                warn!("event=library_open module=service status=error fallback=empty");
                (Catalog::new(), LoadStatus::Failed(err))
            }
        };
        (Self { store, catalog }, status)
    }

    /// Creates a service around an existing catalog without loading.
    pub fn with_catalog(store: S, catalog: Catalog) -> Self {
        Self { store, catalog }
    }

    /// Validates `draft`, appends it and saves.
    ///
    /// Returns the added book and the save outcome.
    pub fn add_book(
        &mut self,
        draft: BookDraft,
    ) -> Result<(Book, SaveStatus), BookValidationError> {
        let book = match draft.into_book() {
            Ok(book) => book,
            Err(err) => {
                info!("event=book_add module=service status=rejected reason={err:?}");
                return Err(err);
            }
        };
        self.catalog.add(book.clone())?;
        info!(
            "event=book_add module=service status=ok total={}",
            self.catalog.len()
        );
        Ok((book, self.persist()))
    }

    /// Removes all books titled `title` (case-insensitive) and saves when
    /// anything was removed.
    pub fn remove_book(&mut self, title: &str) -> RemoveOutcome {
        let count = self.catalog.remove(title.trim());
        if count == 0 {
            info!("event=book_remove module=service status=not_found");
            return RemoveOutcome::NotFound;
        }
        info!(
            "event=book_remove module=service status=ok removed={} total={}",
            count,
            self.catalog.len()
        );
        RemoveOutcome::Removed {
            count,
            save: self.persist(),
        }
    }

    /// Books whose title or author contains `query`, case-insensitively.
    pub fn search<'a>(&'a self, query: &str) -> impl Iterator<Item = &'a Book> + 'a {
        self.catalog.search(query.trim())
    }

    pub fn list(&self) -> &[Book] {
        self.catalog.list()
    }

    pub fn statistics(&self) -> CatalogStats {
        self.catalog.statistics()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn persist(&self) -> SaveStatus {
        match self.store.save(self.catalog.list()) {
            Ok(()) => SaveStatus::Saved,
            Err(err) => {
                warn!(
                    "event=library_persist module=service status=error diverged=true total={}",
                    self.catalog.len()
                );
                SaveStatus::Failed(err)
            }
        }
    }
}
