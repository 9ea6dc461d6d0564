use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::domain::model::BookDraft;
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::catalog::validation::{parse_book_id, validate_book_fields};
use crate::core::command::{Command, CommandError};
use crate::core::library::LibraryResult;

pub(crate) struct UpdateBookCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl UpdateBookCommand {
    pub(crate) fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct UpdateBookCommandRequest {
    #[serde(skip)]
    pub book_id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
}

impl UpdateBookCommandRequest {
    pub fn new(book_id: &str, title: &str, author: &str) -> Self {
        Self {
            book_id: book_id.to_string(),
            title: Some(title.to_string()),
            author: Some(author.to_string()),
        }
    }

    pub fn with_book_id(self, book_id: &str) -> Self {
        Self {
            book_id: book_id.to_string(),
            ..self
        }
    }

    pub fn build_draft(&self) -> LibraryResult<BookDraft> {
        validate_book_fields(self.title.as_deref(), self.author.as_deref())
    }
}

#[derive(Debug, Serialize)]
#[serde(transparent)]
pub(crate) struct UpdateBookCommandResponse {
    pub book: BookDto,
}

impl UpdateBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<UpdateBookCommandRequest, UpdateBookCommandResponse> for UpdateBookCommand {
    async fn execute(&self, req: UpdateBookCommandRequest) -> Result<UpdateBookCommandResponse, CommandError> {
        let id = parse_book_id(req.book_id.as_str())?;
        let draft = match req.build_draft() {
            Ok(draft) => draft,
            Err(err) => {
                // an unknown id takes precedence over a bad body
                self.catalog_service.find_book_by_id(id).await?;
                return Err(CommandError::from(err));
            }
        };
        self.catalog_service.update_book(id, &draft).await.map_err(CommandError::from).map(UpdateBookCommandResponse::new)
    }
}
