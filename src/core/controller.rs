use std::sync::Arc;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::Json;
use serde::{Deserialize, Serialize};
use crate::books::factory::create_book_repository;
use crate::books::repository::BookRepository;
use crate::core::command::CommandError;
use crate::core::domain::Configuration;
use crate::core::library::{BOOK_NOT_FOUND, TITLE_AND_AUTHOR_REQUIRED};
use crate::gateway::events::EventPublisher;
use crate::gateway::factory::create_publisher;

// AppState is shared by every request; the repository behind it is the single
// owner of the book collection.
#[derive(Clone)]
pub struct AppState {
    pub(crate) config: Configuration,
    pub(crate) books: Arc<dyn BookRepository>,
    pub(crate) publisher: Arc<dyn EventPublisher>,
}

impl AppState {
    pub fn new(config: Configuration) -> AppState {
        let books = create_book_repository(&config);
        let publisher = create_publisher(config.event_publisher);
        AppState {
            config,
            books,
            publisher,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

pub(crate) type ServerError = (StatusCode, Json<MessageResponse>);

// a body that is not JSON carries no title or author
pub fn json_to_server_error(err: JsonRejection) -> ServerError {
    tracing::debug!("rejecting request body: {}", err);
    (StatusCode::BAD_REQUEST, Json(MessageResponse::new(TITLE_AND_AUTHOR_REQUIRED)))
}

impl From<CommandError> for ServerError {
    fn from(err: CommandError) -> Self {
        tracing::debug!("command failed: {:?}", err);
        match err {
            CommandError::NotFound { .. } => {
                (StatusCode::NOT_FOUND, Json(MessageResponse::new(BOOK_NOT_FOUND)))
            }
            CommandError::Validation { .. } => {
                (StatusCode::BAD_REQUEST, Json(MessageResponse::new(TITLE_AND_AUTHOR_REQUIRED)))
            }
            CommandError::Serialization { message } => {
                (StatusCode::BAD_REQUEST, Json(MessageResponse::new(message.as_str())))
            }
            CommandError::Runtime { message, .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, Json(MessageResponse::new(message.as_str())))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use crate::core::command::CommandError;
    use crate::core::controller::ServerError;

    #[tokio::test]
    async fn test_should_map_command_errors_to_status() {
        let (status, body) = ServerError::from(CommandError::NotFound { message: "Book not found 9".to_string() });
        assert_eq!(StatusCode::NOT_FOUND, status);
        assert_eq!("Book not found", body.0.message.as_str());

        let (status, body) = ServerError::from(CommandError::Validation { message: "blank".to_string(), reason_code: None });
        assert_eq!(StatusCode::BAD_REQUEST, status);
        assert_eq!("Title and author are required", body.0.message.as_str());

        let (status, _) = ServerError::from(CommandError::Runtime { message: "boom".to_string(), reason_code: None });
        assert_eq!(StatusCode::INTERNAL_SERVER_ERROR, status);
    }
}
