use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::books::domain::collection::BookCollection;
use crate::books::domain::model::{BookDraft, BookEntity};
use crate::books::repository::BookRepository;
use crate::core::repository::Repository;

// MemoryBookRepository owns the catalog collection for the life of the process.
// Every call takes the lock once, so id allocation and insertion in `create`
// cannot interleave with another mutation.
#[derive(Debug, Default)]
pub struct MemoryBookRepository {
    collection: RwLock<BookCollection>,
}

impl MemoryBookRepository {
    pub(crate) fn new() -> Self {
        Self {
            collection: RwLock::new(BookCollection::new()),
        }
    }

    pub(crate) fn with_books(books: Vec<BookEntity>) -> Self {
        Self {
            collection: RwLock::new(BookCollection::with_books(books)),
        }
    }
}

#[async_trait]
impl Repository<BookEntity, BookDraft> for MemoryBookRepository {
    async fn create(&self, draft: &BookDraft) -> BookEntity {
        self.collection.write().await.insert(draft)
    }

    async fn update(&self, id: i64, draft: &BookDraft) -> Option<BookEntity> {
        self.collection.write().await.update_by_id(id, draft).cloned()
    }

    async fn get(&self, id: i64) -> Option<BookEntity> {
        self.collection.read().await.find_by_id(id).cloned()
    }

    async fn delete(&self, id: i64) -> bool {
        self.collection.write().await.delete_by_id(id)
    }

    async fn list(&self) -> Vec<BookEntity> {
        self.collection.read().await.list().to_vec()
    }
}

impl BookRepository for MemoryBookRepository {}
