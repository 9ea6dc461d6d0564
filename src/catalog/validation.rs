use crate::books::domain::model::BookDraft;
use crate::core::library::{LibraryError, LibraryResult, TITLE_AND_AUTHOR_REQUIRED};

/// Accepts title and author only when both are present and non-blank. Blank is
/// judged after trimming, but the draft keeps the values exactly as sent.
pub(crate) fn validate_book_fields(title: Option<&str>, author: Option<&str>) -> LibraryResult<BookDraft> {
    let title = title.unwrap_or_default();
    let author = author.unwrap_or_default();
    if title.trim().is_empty() {
        return Err(LibraryError::validation(TITLE_AND_AUTHOR_REQUIRED, Some("title".to_string())));
    }
    if author.trim().is_empty() {
        return Err(LibraryError::validation(TITLE_AND_AUTHOR_REQUIRED, Some("author".to_string())));
    }
    Ok(BookDraft::new(title, author))
}

/// A path id that is not an integer cannot name a stored book, so it is
/// reported the same way as an unknown id.
pub(crate) fn parse_book_id(book_id: &str) -> LibraryResult<i64> {
    book_id.trim().parse::<i64>().map_err(|_| LibraryError::book_not_found(book_id))
}
