use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::domain::model::BookDraft;
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::catalog::validation::validate_book_fields;
use crate::core::command::{Command, CommandError};
use crate::core::library::LibraryResult;

pub(crate) struct AddBookCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl AddBookCommand {
    pub(crate) fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct AddBookCommandRequest {
    #[serde(default)]
    pub(crate) title: Option<String>,
    #[serde(default)]
    pub(crate) author: Option<String>,
}

impl AddBookCommandRequest {
    pub fn new(title: &str, author: &str) -> Self {
        Self {
            title: Some(title.to_string()),
            author: Some(author.to_string()),
        }
    }

    pub fn build_draft(&self) -> LibraryResult<BookDraft> {
        validate_book_fields(self.title.as_deref(), self.author.as_deref())
    }
}

#[derive(Debug, Serialize)]
#[serde(transparent)]
pub(crate) struct AddBookCommandResponse {
    pub book: BookDto,
}

impl AddBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<AddBookCommandRequest, AddBookCommandResponse> for AddBookCommand {
    async fn execute(&self, req: AddBookCommandRequest) -> Result<AddBookCommandResponse, CommandError> {
        let draft = req.build_draft()?;
        self.catalog_service.add_book(&draft).await.map_err(CommandError::from).map(AddBookCommandResponse::new)
    }
}
