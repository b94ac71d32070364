use bookshelf_core::{current_year, Book, BookDraft, BookValidationError};

fn draft(title: &str, author: &str, year: &str) -> BookDraft {
    BookDraft {
        title: title.to_string(),
        author: author.to_string(),
        year: year.to_string(),
        genre: "SciFi".to_string(),
        read: true,
    }
}

#[test]
fn draft_trims_fields_into_book() {
    let book = BookDraft {
        title: "  Dune ".to_string(),
        author: " Herbert".to_string(),
        year: " 1965 ".to_string(),
        genre: " SciFi ".to_string(),
        read: true,
    }
    .into_book_as_of(2024)
    .expect("trimmed draft should be valid");

    assert_eq!(book.title, "Dune");
    assert_eq!(book.author, "Herbert");
    assert_eq!(book.year, 1965);
    assert_eq!(book.genre, "SciFi");
    assert!(book.read);
}

#[test]
fn draft_reports_missing_fields_before_bad_year() {
    let err = draft("   ", "Herbert", "abc")
        .into_book_as_of(2024)
        .expect_err("blank title should be rejected");
    assert_eq!(err, BookValidationError::EmptyTitle);
    assert!(err.is_missing_field());

    let err = draft("Dune", "", "abc")
        .into_book_as_of(2024)
        .expect_err("empty author should be rejected");
    assert_eq!(err, BookValidationError::EmptyAuthor);
}

#[test]
fn draft_rejects_future_zero_and_non_numeric_years() {
    let err = draft("Dune", "Herbert", "2025")
        .into_book_as_of(2024)
        .expect_err("future year should be rejected");
    assert_eq!(
        err,
        BookValidationError::FutureYear {
            year: 2025,
            current_year: 2024,
        }
    );
    assert!(!err.is_missing_field());

    let err = draft("Dune", "Herbert", "0")
        .into_book_as_of(2024)
        .expect_err("year zero should be rejected");
    assert_eq!(err, BookValidationError::NonPositiveYear(0));

    let err = draft("Dune", "Herbert", "-1965")
        .into_book_as_of(2024)
        .expect_err("signed year should be rejected");
    assert!(matches!(err, BookValidationError::InvalidYear(_)));
}

#[test]
fn current_year_is_accepted_and_next_year_is_not() {
    let year = current_year();
    assert!(Book::new("Now", "Someone", year, "", false).is_ok());
    let err = Book::new("Later", "Someone", year + 1, "", false)
        .expect_err("next year should be rejected");
    assert!(err.to_string().contains("must be <= current year"));
}

#[test]
fn empty_genre_is_valid() {
    let book = draft("Dune", "Herbert", "1965");
    let book = BookDraft {
        genre: String::new(),
        ..book
    }
    .into_book_as_of(2024)
    .expect("empty genre should be accepted");
    assert_eq!(book.genre, "");
}

#[test]
fn has_title_ignores_case() {
    let book = Book::new_as_of("The Hobbit", "Tolkien", 1937, "Fantasy", false, 2024)
        .expect("valid book");
    assert!(book.has_title("the hobbit"));
    assert!(book.has_title("THE HOBBIT"));
    assert!(!book.has_title("hobbit"));
}

#[test]
fn book_serialization_uses_expected_wire_fields() {
    let book = Book::new_as_of("Dune", "Herbert", 1965, "SciFi", true, 2024).expect("valid book");

    let json = serde_json::to_value(&book).expect("book should serialize");
    assert_eq!(json["title"], "Dune");
    assert_eq!(json["author"], "Herbert");
    assert_eq!(json["year"], 1965);
    assert_eq!(json["genre"], "SciFi");
    assert_eq!(json["read"], true);
    assert_eq!(json.as_object().expect("book should be a JSON object").len(), 5);

    let decoded: Book = serde_json::from_value(json).expect("wire shape should decode");
    assert_eq!(decoded, book);
}

#[test]
fn deserialize_does_not_revalidate_persisted_books() {
    let value = serde_json::json!({
        "title": "",
        "author": "Nobody",
        "year": 99999,
        "genre": "",
        "read": false
    });

    let book: Book = serde_json::from_value(value).expect("persisted book should decode as-is");
    assert_eq!(book.year, 99999);
    assert!(book.validate().is_err());
}
