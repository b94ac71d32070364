//! JSON file implementation of [`BookStore`].
//!
//! # Responsibility
//! - Read and write the catalog as a pretty-printed JSON array.
//! - Replace the target file atomically on save.
//!
//! # Invariants
//! - Saves go through a temporary file next to the resolved target that is
//!   renamed over it; a failed save leaves the old file intact.
//! - An existing target keeps its permissions, and a symlinked target is
//!   written through to the file it points at.
//! - The temporary file is removed on every error path.

use super::{BookStore, StoreError, StoreResult};
use crate::model::book::Book;
use log::{error, info};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs::{self, Permissions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tempfile::NamedTempFile;

/// Default catalog file name.
pub const DEFAULT_LIBRARY_FILE: &str = "library.json";

const JSON_INDENT: &[u8] = b"    ";

/// File-backed book store.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }

    /// Resolves the file a save must land on, following symlinks, along
    /// with the permissions to carry over. A missing target resolves to the
    /// configured path with default permissions.
    fn resolve_target(&self) -> std::io::Result<(PathBuf, Option<Permissions>)> {
        match fs::canonicalize(&self.path) {
            Ok(target) => {
                let permissions = fs::metadata(&target)?.permissions();
                Ok((target, Some(permissions)))
            }
            Err(err) if err.kind() == ErrorKind::NotFound => Ok((self.path.clone(), None)),
            Err(err) => Err(err),
        }
    }

    fn write_replace(&self, payload: &[u8]) -> StoreResult<()> {
        // Why: renaming over the configured path would swap a symlink for a
        // regular file and reset the mode; write next to the real file instead.
        let (target, permissions) = self.resolve_target().map_err(|e| self.io_error(e))?;
        let mut tmp = NamedTempFile::new_in(parent_dir(&target)).map_err(|e| self.io_error(e))?;
        tmp.write_all(payload).map_err(|e| self.io_error(e))?;
        tmp.flush().map_err(|e| self.io_error(e))?;
        if let Some(permissions) = permissions {
            tmp.as_file()
                .set_permissions(permissions)
                .map_err(|e| self.io_error(e))?;
        }
        tmp.persist(&target).map_err(|e| self.io_error(e.error))?;
        Ok(())
    }
}

fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    }
}

impl BookStore for JsonFileStore {
    fn load(&self) -> StoreResult<Option<Vec<Book>>> {
        let started_at = Instant::now();
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!("event=library_load module=store status=missing");
                return Ok(None);
            }
            Err(err) => {
                error!(
                    "event=library_load module=store status=error error_code=read_failed error={}",
                    err
                );
                return Err(self.io_error(err));
            }
        };

        let books: Vec<Book> = serde_json::from_str(&raw).map_err(|source| {
            error!(
                "event=library_load module=store status=error error_code=parse_failed line={} column={}",
                source.line(),
                source.column()
            );
            StoreError::Parse {
                path: self.path.clone(),
                source,
            }
        })?;

        info!(
            "event=library_load module=store status=ok count={} duration_ms={}",
            books.len(),
            started_at.elapsed().as_millis()
        );
        Ok(Some(books))
    }

    fn save(&self, books: &[Book]) -> StoreResult<()> {
        let started_at = Instant::now();
        let payload = encode_pretty(books)?;

        match self.write_replace(&payload) {
            Ok(()) => {
                info!(
                    "event=library_save module=store status=ok count={} bytes={} duration_ms={}",
                    books.len(),
                    payload.len(),
                    started_at.elapsed().as_millis()
                );
                Ok(())
            }
            Err(err) => {
                error!(
                    "event=library_save module=store status=error error_code=write_failed duration_ms={} error={}",
                    started_at.elapsed().as_millis(),
                    err
                );
                Err(err)
            }
        }
    }
}

fn encode_pretty(books: &[Book]) -> StoreResult<Vec<u8>> {
    let mut out = Vec::new();
    let formatter = PrettyFormatter::with_indent(JSON_INDENT);
    let mut ser = serde_json::Serializer::with_formatter(&mut out, formatter);
    books.serialize(&mut ser).map_err(StoreError::Serialize)?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::{encode_pretty, parent_dir};
    use crate::model::book::Book;
    use std::path::Path;

    #[test]
    fn bare_file_name_writes_next_to_working_directory() {
        assert_eq!(parent_dir(Path::new("library.json")), Path::new("."));
        assert_eq!(parent_dir(Path::new("/data/library.json")), Path::new("/data"));
    }

    #[test]
    fn encode_uses_four_space_indent() {
        let books = vec![Book {
            title: "Dune".to_string(),
            author: "Herbert".to_string(),
            year: 1965,
            genre: "SciFi".to_string(),
            read: true,
        }];
        let encoded = encode_pretty(&books).expect("books should encode");
        let text = String::from_utf8(encoded).expect("encoded JSON should be UTF-8");
        assert!(text.contains("\n        \"title\": \"Dune\""), "{text}");
    }
}
