//! Interactive numbered menu loop.
//!
//! # Responsibility
//! - Prompt for a choice, dispatch it to the library service, print results.
//! - Report validation, not-found and storage failures without stopping.
//!
//! # Invariants
//! - The loop ends only on choice 6 or end of input.
//! - Exiting never triggers an extra save.

use crate::display::{write_book, write_statistics};
use bookshelf_core::{
    parse_read_answer, BookDraft, BookStore, LibraryService, LoadStatus, RemoveOutcome,
    SaveStatus,
};
use log::info;
use std::io::{self, BufRead, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Choice {
    Add,
    Remove,
    Search,
    List,
    Stats,
    Exit,
}

impl Choice {
    fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "1" => Some(Self::Add),
            "2" => Some(Self::Remove),
            "3" => Some(Self::Search),
            "4" => Some(Self::List),
            "5" => Some(Self::Stats),
            "6" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Menu controller owning the library session and console handles.
pub struct Menu<S: BookStore, R: BufRead, W: Write> {
    library: LibraryService<S>,
    input: R,
    out: W,
}

impl<S: BookStore, R: BufRead, W: Write> Menu<S, R, W> {
    /// Loads the catalog from `store` and reports how loading went.
    pub fn start(store: S, input: R, mut out: W) -> io::Result<Self> {
        let (library, status) = LibraryService::open(store);
        match status {
            LoadStatus::Loaded { .. } => writeln!(out, "Library loaded successfully!")?,
            LoadStatus::Failed(err) => writeln!(out, "Error loading library: {err}")?,
            LoadStatus::Missing => {}
        }
        Ok(Self {
            library,
            input,
            out,
        })
    }

    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.print_menu()?;
            let Some(line) = self.prompt("Enter your choice (1-6): ")? else {
                info!("event=menu_exit module=cli reason=eof");
                writeln!(self.out)?;
                writeln!(self.out, "Goodbye!")?;
                return Ok(());
            };

            match Choice::parse(&line) {
                Some(Choice::Add) => self.add_book()?,
                Some(Choice::Remove) => self.remove_book()?,
                Some(Choice::Search) => self.search_books()?,
                Some(Choice::List) => self.list_books()?,
                Some(Choice::Stats) => self.show_statistics()?,
                Some(Choice::Exit) => {
                    info!("event=menu_exit module=cli reason=choice");
                    writeln!(self.out, "Goodbye!")?;
                    return Ok(());
                }
                None => writeln!(self.out, "Invalid choice! Please try again.")?,
            }
        }
    }

    fn print_menu(&mut self) -> io::Result<()> {
        writeln!(self.out, "\n=== Personal Library Manager ===")?;
        writeln!(self.out, "1. Add a book")?;
        writeln!(self.out, "2. Remove a book")?;
        writeln!(self.out, "3. Search books")?;
        writeln!(self.out, "4. List all books")?;
        writeln!(self.out, "5. Show statistics")?;
        writeln!(self.out, "6. Exit")
    }

    /// Prints `label` and reads one line; `None` at end of input.
    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.out, "{label}")?;
        self.out.flush()?;
        let mut line = String::new();
        // Why: a closed stdin would otherwise re-prompt forever; callers
        // treat `None` as a request to exit.
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn prompt_or_empty(&mut self, label: &str) -> io::Result<String> {
        Ok(self.prompt(label)?.unwrap_or_default())
    }

    fn add_book(&mut self) -> io::Result<()> {
        let title = self.prompt_or_empty("Enter book title: ")?;
        let author = self.prompt_or_empty("Enter author name: ")?;
        let year = self.prompt_or_empty("Enter publication year: ")?;
        let genre = self.prompt_or_empty("Enter genre: ")?;
        let answer = self.prompt_or_empty("Have you read this book? (yes/no): ")?;
        let draft = BookDraft {
            title,
            author,
            year,
            genre,
            read: parse_read_answer(&answer),
        };

        match self.library.add_book(draft) {
            Ok((book, save)) => {
                self.report_save(&save)?;
                writeln!(self.out, "Book '{}' added successfully!", book.title)
            }
            Err(err) if err.is_missing_field() => {
                writeln!(self.out, "Title and author are required!")
            }
            Err(_) => writeln!(self.out, "Invalid publication year!"),
        }
    }

    fn remove_book(&mut self) -> io::Result<()> {
        let title = self.prompt_or_empty("Enter book title to remove: ")?;
        match self.library.remove_book(&title) {
            RemoveOutcome::Removed { save, .. } => {
                self.report_save(&save)?;
                writeln!(self.out, "Book '{title}' removed successfully!")
            }
            RemoveOutcome::NotFound => writeln!(self.out, "Book '{title}' not found!"),
        }
    }

    fn search_books(&mut self) -> io::Result<()> {
        let query = self.prompt_or_empty("Enter search term (title or author): ")?;
        let mut hits = self.library.search(&query).peekable();
        if hits.peek().is_none() {
            return writeln!(self.out, "No books found!");
        }
        writeln!(self.out, "\nSearch Results:")?;
        for book in hits {
            write_book(&mut self.out, book)?;
        }
        Ok(())
    }

    fn list_books(&mut self) -> io::Result<()> {
        let books = self.library.list();
        if books.is_empty() {
            return writeln!(self.out, "Library is empty!");
        }
        writeln!(self.out, "\nAll Books:")?;
        for book in books {
            write_book(&mut self.out, book)?;
        }
        Ok(())
    }

    fn show_statistics(&mut self) -> io::Result<()> {
        let stats = self.library.statistics();
        write_statistics(&mut self.out, &stats)
    }

    fn report_save(&mut self, save: &SaveStatus) -> io::Result<()> {
        match save {
            SaveStatus::Saved => writeln!(self.out, "Library saved successfully!"),
            SaveStatus::Failed(err) => writeln!(self.out, "Error saving library: {err}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Choice, Menu};
    use bookshelf_core::{BookStore, JsonFileStore};
    use std::fs;
    use std::io::Cursor;
    use std::path::Path;
    use tempfile::TempDir;

    fn run_session(path: &Path, script: &str) -> String {
        let mut out = Vec::new();
        let mut menu = Menu::start(
            JsonFileStore::new(path),
            Cursor::new(script.as_bytes().to_vec()),
            &mut out,
        )
        .expect("start");
        menu.run().expect("run");
        drop(menu);
        String::from_utf8(out).expect("utf8 output")
    }

    #[test]
    fn choice_parse_accepts_only_one_to_six() {
        assert_eq!(Choice::parse(" 1 "), Some(Choice::Add));
        assert_eq!(Choice::parse("6"), Some(Choice::Exit));
        assert_eq!(Choice::parse("7"), None);
        assert_eq!(Choice::parse("add"), None);
        assert_eq!(Choice::parse(""), None);
    }

    #[test]
    fn add_then_list_and_stats() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("library.json");

        let output = run_session(
            &path,
            "1\nDune\nHerbert\n1965\nSciFi\nyes\n\
             1\nIt\nKing\n1986\nHorror\nno\n\
             4\n5\n6\n",
        );

        assert!(output.contains("Book 'Dune' added successfully!"));
        assert!(output.contains("Book 'It' added successfully!"));
        assert_eq!(output.matches("Library saved successfully!").count(), 2);
        assert!(output.contains("\nAll Books:\nTitle: Dune\n"));
        assert!(output.contains("Total Books: 2\nBooks Read: 1\nBooks Unread: 1\n"));
        assert!(output.contains("SciFi: 1\nHorror: 1\n"));
        assert!(output.ends_with("Goodbye!\n"));

        let books = JsonFileStore::new(&path)
            .load()
            .expect("saved library should load")
            .expect("library file should exist");
        assert_eq!(books.len(), 2);
    }

    #[test]
    fn search_prints_only_matching_books() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("library.json");
        fs::write(
            &path,
            r#"[
                {"title":"Dune","author":"Herbert","year":1965,"genre":"SciFi","read":true},
                {"title":"It","author":"King","year":1986,"genre":"Horror","read":false}
            ]"#,
        )
        .expect("seed library file");

        let output = run_session(&path, "3\nking\n3\ntolkien\n6\n");

        assert!(output.starts_with("Library loaded successfully!\n"));
        assert!(output.contains("\nSearch Results:\nTitle: It\n"));
        assert!(!output.contains("Title: Dune"));
        assert!(output.contains("No books found!"));
    }

    #[test]
    fn invalid_input_is_reported_and_loop_continues() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("library.json");

        let output = run_session(
            &path,
            "9\n\
             1\n\nHerbert\n1965\nSciFi\nyes\n\
             1\nDune\nHerbert\n99999\nSciFi\nyes\n\
             2\nEmma\n\
             4\n6\n",
        );

        assert!(output.contains("Invalid choice! Please try again."));
        assert!(output.contains("Title and author are required!"));
        assert!(output.contains("Invalid publication year!"));
        assert!(output.contains("Book 'Emma' not found!"));
        assert!(output.contains("Library is empty!"));
        assert!(!path.exists());
    }

    #[test]
    fn remove_deletes_all_matches_and_saves() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("library.json");

        let output = run_session(
            &path,
            "1\nDune\nHerbert\n1965\nSciFi\nyes\n\
             1\nDUNE\nHerbert\n1965\nSciFi\nno\n\
             2\ndune\n6\n",
        );

        assert!(output.contains("Book 'dune' removed successfully!"));
        let books = JsonFileStore::new(&path)
            .load()
            .expect("saved library should load")
            .expect("library file should exist");
        assert!(books.is_empty());
    }

    #[test]
    fn corrupted_file_is_reported_and_session_starts_empty() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("library.json");
        fs::write(&path, "not json").expect("seed corrupted file");

        let output = run_session(&path, "4\n6\n");

        assert!(output.starts_with("Error loading library: "));
        assert!(output.contains("Library is empty!"));
    }

    #[test]
    fn save_failure_is_reported_but_book_stays_listed() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("missing-dir").join("library.json");

        let output = run_session(&path, "1\nDune\nHerbert\n1965\nSciFi\nyes\n4\n6\n");

        assert!(output.contains("Error saving library: "));
        assert!(output.contains("Book 'Dune' added successfully!"));
        assert!(output.contains("Title: Dune"));
    }

    #[test]
    fn end_of_input_exits_cleanly() {
        let tmp = TempDir::new().expect("tmp");
        let output = run_session(&tmp.path().join("library.json"), "5\n");

        assert!(output.contains("Total Books: 0"));
        assert!(output.ends_with("Goodbye!\n"));
    }
}
