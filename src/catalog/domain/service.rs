use std::collections::HashMap;
use std::sync::Arc;
use async_trait::async_trait;
use tracing::{info, warn};
use crate::books::domain::model::BookDraft;
use crate::books::dto::BookDto;
use crate::books::repository::BookRepository;
use crate::catalog::domain::CatalogService;
use crate::core::domain::Configuration;
use crate::core::events::DomainEvent;
use crate::core::library::{LibraryError, LibraryResult};
use crate::gateway::events::EventPublisher;

const EVENT_NAME: &str = "books";
const EVENT_GROUP: &str = "catalog";

pub(crate) struct CatalogServiceImpl {
    branch_id: String,
    book_repository: Arc<dyn BookRepository>,
    events_publisher: Arc<dyn EventPublisher>,
}

impl CatalogServiceImpl {
    pub(crate) fn new(config: &Configuration, book_repository: Arc<dyn BookRepository>,
                      events_publisher: Arc<dyn EventPublisher>) -> Self {
        Self {
            branch_id: config.branch_id.to_string(),
            book_repository,
            events_publisher,
        }
    }

    fn metadata(&self) -> HashMap<String, String> {
        HashMap::from([("branch_id".to_string(), self.branch_id.to_string())])
    }

    // The mutation has already been applied when this runs; a failure here is
    // logged and must not be reported as a failed operation.
    async fn publish(&self, event: serde_json::Result<DomainEvent>) {
        let res = match event {
            Ok(event) => self.events_publisher.publish(&event).await,
            Err(err) => Err(LibraryError::from(err)),
        };
        if let Err(err) = res {
            warn!("failed to publish catalog event: {}", err);
        }
    }
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn list_books(&self) -> LibraryResult<Vec<BookDto>> {
        let books = self.book_repository.list().await;
        Ok(books.into_iter().map(BookDto::from).collect())
    }

    async fn add_book(&self, draft: &BookDraft) -> LibraryResult<BookDto> {
        let book = BookDto::from(self.book_repository.create(draft).await);
        info!("added book {} {:?} by {:?}", book.id, book.title, book.author);
        self.publish(DomainEvent::added(
            EVENT_NAME, EVENT_GROUP, book.id.to_string().as_str(), &self.metadata(), &book)).await;
        Ok(book)
    }

    async fn update_book(&self, id: i64, draft: &BookDraft) -> LibraryResult<BookDto> {
        let book = self.book_repository.update(id, draft).await
            .map(BookDto::from)
            .ok_or_else(|| LibraryError::book_not_found(id.to_string().as_str()))?;
        info!("updated book {} {:?} by {:?}", book.id, book.title, book.author);
        self.publish(DomainEvent::updated(
            EVENT_NAME, EVENT_GROUP, book.id.to_string().as_str(), &self.metadata(), &book)).await;
        Ok(book)
    }

    async fn remove_book(&self, id: i64) -> LibraryResult<()> {
        if !self.book_repository.delete(id).await {
            return Err(LibraryError::book_not_found(id.to_string().as_str()));
        }
        info!("removed book {}", id);
        self.publish(DomainEvent::deleted(
            EVENT_NAME, EVENT_GROUP, id.to_string().as_str(), &self.metadata(), &id)).await;
        Ok(())
    }

    async fn find_book_by_id(&self, id: i64) -> LibraryResult<BookDto> {
        self.book_repository.get(id).await
            .map(BookDto::from)
            .ok_or_else(|| LibraryError::book_not_found(id.to_string().as_str()))
    }
}
