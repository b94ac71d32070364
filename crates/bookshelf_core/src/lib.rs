//! Core domain logic for the bookshelf catalog.
//! This crate is the single source of truth for catalog invariants.

pub mod catalog;
pub mod logging;
pub mod model;
pub mod service;
pub mod store;

pub use catalog::book_catalog::Catalog;
pub use catalog::stats::{CatalogStats, GenreCount};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::book::{
    current_year, parse_read_answer, parse_year, Book, BookDraft, BookValidationError,
};
pub use service::library_service::{LibraryService, LoadStatus, RemoveOutcome, SaveStatus};
pub use store::json_file::DEFAULT_LIBRARY_FILE;
pub use store::{BookStore, JsonFileStore, StoreError, StoreResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
