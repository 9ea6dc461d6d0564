pub mod memory_book_repository;

use crate::books::domain::model::{BookDraft, BookEntity};
use crate::core::repository::Repository;

pub(crate) trait BookRepository: Repository<BookEntity, BookDraft> {
}
