use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::catalog::domain::CatalogService;
use crate::catalog::validation::parse_book_id;
use crate::core::command::{Command, CommandError};
use crate::core::library::BOOK_DELETED;

pub(crate) struct RemoveBookCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl RemoveBookCommand {
    pub(crate) fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct RemoveBookCommandRequest {
    pub(crate) book_id: String,
}

impl RemoveBookCommandRequest {
    pub fn new(book_id: String) -> Self {
        Self {
            book_id,
        }
    }
}

#[derive(Debug, PartialEq, Serialize)]
pub(crate) struct RemoveBookCommandResponse {
    pub message: String,
}

impl RemoveBookCommandResponse {
    pub fn new() -> Self {
        Self {
            message: BOOK_DELETED.to_string(),
        }
    }
}

#[async_trait]
impl Command<RemoveBookCommandRequest, RemoveBookCommandResponse> for RemoveBookCommand {
    async fn execute(&self, req: RemoveBookCommandRequest) -> Result<RemoveBookCommandResponse, CommandError> {
        let id = parse_book_id(req.book_id.as_str())?;
        self.catalog_service.remove_book(id).await
            .map_err(CommandError::from).map(|_| RemoveBookCommandResponse::new())
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
    use crate::catalog::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest};
    use crate::catalog::domain::CatalogService;
    use crate::catalog::factory;
    use crate::core::command::{Command, CommandError};
    use crate::core::controller::AppState;
    use crate::core::domain::Configuration;

    fn build() -> (AddBookCommand, RemoveBookCommand, Box<dyn CatalogService>) {
        let state = AppState::new(Configuration::new("test"));
        (AddBookCommand::new(factory::create_catalog_service(&state)),
         RemoveBookCommand::new(factory::create_catalog_service(&state)),
         factory::create_catalog_service(&state))
    }

    #[tokio::test]
    async fn test_should_run_remove_book() {
        let (_, remove_cmd, svc) = build();

        let res = remove_cmd.execute(RemoveBookCommandRequest::new("3".to_string())).await.expect("should remove book");
        assert_eq!("Book deleted", res.message.as_str());
        let ids: Vec<i64> = svc.list_books().await.expect("should list books").iter().map(|b| b.id).collect();
        assert_eq!(vec![1, 2, 4], ids);
    }

    #[tokio::test]
    async fn test_should_not_remove_unknown_book() {
        let (_, remove_cmd, svc) = build();

        let res = remove_cmd.execute(RemoveBookCommandRequest::new("99".to_string())).await;
        assert!(matches!(res, Err(CommandError::NotFound { .. })));
        assert_eq!(4, svc.list_books().await.expect("should list books").len());
    }

    #[tokio::test]
    async fn test_should_reuse_id_of_removed_max_book() {
        let (add_cmd, remove_cmd, _) = build();

        let _ = remove_cmd.execute(RemoveBookCommandRequest::new("4".to_string())).await.expect("should remove book");
        let res = add_cmd.execute(AddBookCommandRequest::new("Baz", "Qux")).await.expect("should add book");
        assert_eq!(4, res.book.id);
    }
}
