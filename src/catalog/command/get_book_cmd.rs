use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::catalog::validation::parse_book_id;
use crate::core::command::{Command, CommandError};

pub(crate) struct GetBookCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl GetBookCommand {
    pub(crate) fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct GetBookCommandRequest {
    pub(crate) book_id: String,
}

impl GetBookCommandRequest {
    pub fn new(book_id: String) -> Self {
        Self {
            book_id,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(transparent)]
pub(crate) struct GetBookCommandResponse {
    book: BookDto,
}

impl GetBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<GetBookCommandRequest, GetBookCommandResponse> for GetBookCommand {
    async fn execute(&self, req: GetBookCommandRequest) -> Result<GetBookCommandResponse, CommandError> {
        let id = parse_book_id(req.book_id.as_str())?;
        self.catalog_service.find_book_by_id(id)
            .await.map_err(CommandError::from).map(GetBookCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use async_once::AsyncOnce;
    use lazy_static::lazy_static;
    use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
    use crate::catalog::command::get_book_cmd::{GetBookCommand, GetBookCommandRequest};
    use crate::catalog::factory;
    use crate::core::command::{Command, CommandError};
    use crate::core::controller::AppState;
    use crate::core::domain::Configuration;

    lazy_static! {
        static ref STATE : AppState = AppState::new(Configuration::new("test"));
        static ref ADD_CMD : AsyncOnce<AddBookCommand> = AsyncOnce::new(async {
                AddBookCommand::new(factory::create_catalog_service(&STATE))
            });
        static ref GET_CMD : AsyncOnce<GetBookCommand> = AsyncOnce::new(async {
                GetBookCommand::new(factory::create_catalog_service(&STATE))
            });
    }

    #[tokio::test]
    async fn test_should_run_get_book() {
        let add_cmd = ADD_CMD.get().await;
        let get_cmd = GET_CMD.get().await;

        let res = add_cmd.execute(AddBookCommandRequest::new("test book", "test author")).await.expect("should add book");
        let loaded = get_cmd.execute(GetBookCommandRequest::new(res.book.id.to_string())).await.expect("should get book");
        assert_eq!(res.book, loaded.book);
    }

    #[tokio::test]
    async fn test_should_not_find_unknown_or_malformed_id() {
        let get_cmd = GET_CMD.get().await;

        let res = get_cmd.execute(GetBookCommandRequest::new("9999".to_string())).await;
        assert!(matches!(res, Err(CommandError::NotFound { .. })));
        let res = get_cmd.execute(GetBookCommandRequest::new("dune".to_string())).await;
        assert!(matches!(res, Err(CommandError::NotFound { .. })));
    }
}
