use serde::{Deserialize, Serialize};

// BookEntity is a catalog record; its id is assigned by the collection that owns it
// and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct BookEntity {
    pub id: i64,
    pub title: String,
    pub author: String,
}

impl BookEntity {
    pub fn new(id: i64, title: &str, author: &str) -> Self {
        Self {
            id,
            title: title.to_string(),
            author: author.to_string(),
        }
    }
}

// BookDraft carries already-validated title and author for create and update.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct BookDraft {
    pub title: String,
    pub author: String,
}

impl BookDraft {
    pub fn new(title: &str, author: &str) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
        }
    }
}

const SEED_BOOKS: [(&str, &str); 4] = [
    ("The Alchemist", "Paulo Coelho"),
    ("Atomic Habits", "James Clear"),
    ("Dune", "Frank Herbert"),
    ("Neuromancer", "William Gibson"),
];

/// Records the catalog starts with, numbered from 1.
pub(crate) fn seed_books() -> Vec<BookEntity> {
    SEED_BOOKS.iter()
        .enumerate()
        .map(|(i, (title, author))| BookEntity::new(i as i64 + 1, title, author))
        .collect()
}

#[cfg(test)]
mod tests {
    use crate::books::domain::model::{BookDraft, BookEntity, seed_books};

    #[tokio::test]
    async fn test_should_build_books() {
        let book = BookEntity::new(7, "title", "author");
        assert_eq!(7, book.id);
        assert_eq!("title", book.title.as_str());
        assert_eq!("author", book.author.as_str());
        assert_eq!(BookDraft { title: " t ".to_string(), author: "a".to_string() }, BookDraft::new(" t ", "a"));
    }

    #[tokio::test]
    async fn test_should_build_seed_books() {
        let books = seed_books();
        assert_eq!(vec![
            BookEntity::new(1, "The Alchemist", "Paulo Coelho"),
            BookEntity::new(2, "Atomic Habits", "James Clear"),
            BookEntity::new(3, "Dune", "Frank Herbert"),
            BookEntity::new(4, "Neuromancer", "William Gibson"),
        ], books);
    }
}
