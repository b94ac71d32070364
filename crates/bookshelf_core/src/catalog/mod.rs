//! In-memory book catalog.
//!
//! # Responsibility
//! - Hold the session's ordered book collection.
//! - Provide add/remove/search/list/statistics over that collection.
//!
//! # Invariants
//! - Order is insertion order; only `add` (append) and `remove` (filter)
//!   mutate it.
//! - Catalog operations never touch storage; persistence is the service's job.

pub mod book_catalog;
pub mod stats;
