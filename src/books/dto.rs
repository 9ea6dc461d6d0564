use serde::{Deserialize, Serialize};
use crate::books::domain::model::BookEntity;

// BookDto is the wire shape of a book for the catalog API: `{id, title, author}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct BookDto {
    pub id: i64,
    pub title: String,
    pub author: String,
}

impl BookDto {
    pub fn new(id: i64, title: &str, author: &str) -> BookDto {
        BookDto {
            id,
            title: title.to_string(),
            author: author.to_string(),
        }
    }
}

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> Self {
        Self {
            id: other.id,
            title: other.title.to_string(),
            author: other.author.to_string(),
        }
    }
}

impl From<BookEntity> for BookDto {
    fn from(other: BookEntity) -> Self {
        Self {
            id: other.id,
            title: other.title,
            author: other.author,
        }
    }
}
