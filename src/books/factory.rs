use std::sync::Arc;
use crate::books::domain::model::seed_books;
use crate::books::repository::BookRepository;
use crate::books::repository::memory_book_repository::MemoryBookRepository;
use crate::core::domain::Configuration;

pub(crate) fn create_book_repository(config: &Configuration) -> Arc<dyn BookRepository> {
    let books = seed_books();
    tracing::info!("seeding catalog for branch {} with {} books", config.branch_id, books.len());
    Arc::new(MemoryBookRepository::with_books(books))
}
