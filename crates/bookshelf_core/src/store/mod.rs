//! Persistence boundary between the catalog and durable storage.
//!
//! # Responsibility
//! - Define the load/save contract used by the library service.
//! - Keep file format and I/O details out of catalog logic.
//!
//! # Invariants
//! - `save` always writes the full collection; there is no append path.
//! - A missing backing file is not an error; it loads as `None`.

use crate::model::book::Book;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub mod json_file;

pub use json_file::JsonFileStore;

pub type StoreResult<T> = Result<T, StoreError>;

/// Storage-layer error for reading, decoding and writing the catalog.
#[derive(Debug)]
pub enum StoreError {
    /// Reading or writing the backing file failed.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Backing file exists but does not hold a valid book array.
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    /// Catalog could not be encoded.
    Serialize(serde_json::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "{}: {source}", path.display()),
            Self::Parse { path, source } => {
                write!(f, "invalid library file `{}`: {source}", path.display())
            }
            Self::Serialize(err) => write!(f, "failed to encode library: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
            Self::Serialize(err) => Some(err),
        }
    }
}

/// Whole-collection storage contract.
pub trait BookStore {
    /// Loads all books in stored order.
    ///
    /// Returns `Ok(None)` when nothing has been stored yet.
    fn load(&self) -> StoreResult<Option<Vec<Book>>>;

    /// Replaces the stored collection with `books`.
    fn save(&self, books: &[Book]) -> StoreResult<()>;
}
