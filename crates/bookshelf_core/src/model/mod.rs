//! Book catalog domain model.
//!
//! # Responsibility
//! - Define the canonical book record persisted in the library file.
//! - Own the validation rules applied when a book is created.
//!
//! # Invariants
//! - Validation runs at creation time only; persisted records are trusted
//!   as-is when loaded back.

pub mod book;
