use crate::books::domain::model::{BookDraft, BookEntity};

// BookCollection is the ordered set of catalog records. Records keep insertion
// order and ids are unique among the records currently held.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct BookCollection {
    books: Vec<BookEntity>,
}

impl BookCollection {
    pub fn new() -> Self {
        Self {
            books: vec![],
        }
    }

    /// Builds a collection from existing records in the given order. A record whose
    /// id is already taken by an earlier one is dropped.
    pub fn with_books(books: Vec<BookEntity>) -> Self {
        let mut collection = Self::new();
        for book in books {
            if collection.find_by_id(book.id).is_none() {
                collection.books.push(book);
            }
        }
        collection
    }

    pub fn list(&self) -> &[BookEntity] {
        self.books.as_slice()
    }

    /// One past the highest id currently held, or 1 when empty. Deleting the record
    /// with the highest id makes that id available again.
    pub fn next_id(&self) -> i64 {
        self.books.iter().map(|b| b.id).max().map_or(1, |max| max + 1)
    }

    pub fn insert(&mut self, draft: &BookDraft) -> BookEntity {
        let book = BookEntity::new(self.next_id(), draft.title.as_str(), draft.author.as_str());
        self.books.push(book.clone());
        book
    }

    pub fn find_by_id(&self, id: i64) -> Option<&BookEntity> {
        self.books.iter().find(|b| b.id == id)
    }

    pub fn update_by_id(&mut self, id: i64, draft: &BookDraft) -> Option<&BookEntity> {
        let book = self.books.iter_mut().find(|b| b.id == id)?;
        book.title = draft.title.to_string();
        book.author = draft.author.to_string();
        Some(&*book)
    }

    pub fn delete_by_id(&mut self, id: i64) -> bool {
        match self.books.iter().position(|b| b.id == id) {
            Some(ndx) => {
                self.books.remove(ndx);
                true
            }
            None => false,
        }
    }
}
