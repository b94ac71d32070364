//! Console rendering of books and statistics.

use bookshelf_core::{Book, CatalogStats};
use std::io::{self, Write};

const SEPARATOR_WIDTH: usize = 30;

pub fn write_book(out: &mut impl Write, book: &Book) -> io::Result<()> {
    writeln!(out, "Title: {}", book.title)?;
    writeln!(out, "Author: {}", book.author)?;
    writeln!(out, "Year: {}", book.year)?;
    writeln!(out, "Genre: {}", book.genre)?;
    writeln!(out, "Read: {}", if book.read { "Yes" } else { "No" })?;
    writeln!(out, "{}", "-".repeat(SEPARATOR_WIDTH))
}

pub fn write_statistics(out: &mut impl Write, stats: &CatalogStats) -> io::Result<()> {
    writeln!(out, "\nLibrary Statistics:")?;
    writeln!(out, "Total Books: {}", stats.total)?;
    writeln!(out, "Books Read: {}", stats.read)?;
    writeln!(out, "Books Unread: {}", stats.unread)?;
    if !stats.genres.is_empty() {
        writeln!(out, "\nBooks by Genre:")?;
        for entry in &stats.genres {
            writeln!(out, "{}: {}", entry.genre, entry.count)?;
        }
    }
    Ok(())
}
