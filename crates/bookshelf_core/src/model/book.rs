//! Book domain model.
//!
//! # Responsibility
//! - Define the record shape stored in `library.json`.
//! - Turn raw user input ([`BookDraft`]) into a validated [`Book`].
//!
//! # Invariants
//! - `title` and `author` are non-empty after trimming.
//! - `year` is positive and not later than the current calendar year at
//!   creation time.
//! - Title comparison for matching/removal is case-insensitive.

use chrono::{Datelike, Local};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Validation error raised when creating a book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookValidationError {
    /// Title is empty or whitespace only.
    EmptyTitle,
    /// Author is empty or whitespace only.
    EmptyAuthor,
    /// Year text is not a plain unsigned integer.
    InvalidYear(String),
    /// Year is zero or negative.
    NonPositiveYear(i64),
    /// Year is later than the current calendar year.
    FutureYear { year: i64, current_year: i64 },
}

impl BookValidationError {
    /// Returns true for the title/author group of failures.
    pub fn is_missing_field(&self) -> bool {
        matches!(self, Self::EmptyTitle | Self::EmptyAuthor)
    }
}

impl Display for BookValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "title must not be empty"),
            Self::EmptyAuthor => write!(f, "author must not be empty"),
            Self::InvalidYear(raw) => write!(f, "year `{raw}` is not a valid number"),
            Self::NonPositiveYear(year) => write!(f, "year ({year}) must be positive"),
            Self::FutureYear { year, current_year } => {
                write!(f, "year ({year}) must be <= current year ({current_year})")
            }
        }
    }
}

impl Error for BookValidationError {}

/// One catalog entry.
///
/// Field names match the on-disk JSON keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub title: String,
    pub author: String,
    pub year: i64,
    /// Free text; empty is a valid genre.
    pub genre: String,
    pub read: bool,
}

impl Book {
    /// Creates a validated book against the current calendar year.
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        year: i64,
        genre: impl Into<String>,
        read: bool,
    ) -> Result<Self, BookValidationError> {
        Self::new_as_of(title, author, year, genre, read, current_year())
    }

    /// Creates a validated book against an explicit `current_year`.
    pub fn new_as_of(
        title: impl Into<String>,
        author: impl Into<String>,
        year: i64,
        genre: impl Into<String>,
        read: bool,
        current_year: i64,
    ) -> Result<Self, BookValidationError> {
        let book = Self {
            title: title.into(),
            author: author.into(),
            year,
            genre: genre.into(),
            read,
        };
        book.validate_as_of(current_year)?;
        Ok(book)
    }

    /// Validates creation invariants against the current calendar year.
    pub fn validate(&self) -> Result<(), BookValidationError> {
        self.validate_as_of(current_year())
    }

    /// Validates creation invariants against `current_year`.
    ///
    /// Field checks run in a fixed order: title, author, year.
    pub fn validate_as_of(&self, current_year: i64) -> Result<(), BookValidationError> {
        if self.title.trim().is_empty() {
            return Err(BookValidationError::EmptyTitle);
        }
        if self.author.trim().is_empty() {
            return Err(BookValidationError::EmptyAuthor);
        }
        if self.year <= 0 {
            return Err(BookValidationError::NonPositiveYear(self.year));
        }
        if self.year > current_year {
            return Err(BookValidationError::FutureYear {
                year: self.year,
                current_year,
            });
        }
        Ok(())
    }

    /// Case-insensitive title equality.
    pub fn has_title(&self, title: &str) -> bool {
        self.title.to_lowercase() == title.to_lowercase()
    }

    /// Returns whether `needle` occurs in title or author.
    ///
    /// `needle` must already be lowercased.
    pub(crate) fn contains_lowercase(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle) || self.author.to_lowercase().contains(needle)
    }
}

/// Raw add-book input as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookDraft {
    pub title: String,
    pub author: String,
    /// Unparsed year text.
    pub year: String,
    pub genre: String,
    pub read: bool,
}

impl BookDraft {
    /// Trims and validates the draft against the current calendar year.
    pub fn into_book(self) -> Result<Book, BookValidationError> {
        self.into_book_as_of(current_year())
    }

    /// Trims and validates the draft against `current_year`.
    ///
    /// Title/author emptiness is reported before any year problem.
    pub fn into_book_as_of(self, current_year: i64) -> Result<Book, BookValidationError> {
        let title = self.title.trim();
        let author = self.author.trim();
        if title.is_empty() {
            return Err(BookValidationError::EmptyTitle);
        }
        if author.is_empty() {
            return Err(BookValidationError::EmptyAuthor);
        }
        let year = parse_year(&self.year)?;
        Book::new_as_of(
            title,
            author,
            year,
            self.genre.trim(),
            self.read,
            current_year,
        )
    }
}

/// Parses year text made of ASCII digits only.
pub fn parse_year(raw: &str) -> Result<i64, BookValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(BookValidationError::InvalidYear(trimmed.to_string()));
    }
    trimmed
        .parse::<i64>()
        .map_err(|_| BookValidationError::InvalidYear(trimmed.to_string()))
}

/// Interprets a yes/no answer; only `yes` (any case) means read.
pub fn parse_read_answer(raw: &str) -> bool {
    raw.trim().eq_ignore_ascii_case("yes")
}

/// Current calendar year in local time.
pub fn current_year() -> i64 {
    i64::from(Local::now().year())
}
