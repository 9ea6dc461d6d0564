use axum::{
    extract::{Path, State},
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::Json,
};
use serde_json::Value;
use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest, AddBookCommandResponse};
use crate::catalog::command::get_book_cmd::{GetBookCommand, GetBookCommandRequest, GetBookCommandResponse};
use crate::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest, ListBooksCommandResponse};
use crate::catalog::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest, RemoveBookCommandResponse};
use crate::catalog::command::update_book_cmd::{UpdateBookCommand, UpdateBookCommandRequest, UpdateBookCommandResponse};
use crate::catalog::domain::CatalogService;
use crate::catalog::factory;
use crate::core::command::{Command, CommandError};
use crate::core::controller::{AppState, json_to_server_error, ServerError};

fn build_service(state: &AppState) -> Box<dyn CatalogService> {
    factory::create_catalog_service(state)
}

// Bodies are read as loose JSON first so that wrong field types surface as a
// missing title or author rather than an extractor error. Only a JSON object
// carries named fields; serde would otherwise accept `["title", "author"]`.
fn parse_body<T: serde::de::DeserializeOwned>(json: Result<Json<Value>, JsonRejection>) -> Result<T, ServerError> {
    let value = json.map_err(json_to_server_error)?.0;
    if !value.is_object() {
        return Err(ServerError::from(CommandError::Validation {
            message: format!("expected a JSON object, got {}", value), reason_code: None }));
    }
    serde_json::from_value(value).map_err(|err| {
        ServerError::from(CommandError::Validation { message: format!("{}", err), reason_code: None })
    })
}

pub(crate) async fn list_books(
    State(state): State<AppState>) -> Result<Json<ListBooksCommandResponse>, ServerError> {
    let svc = build_service(&state);
    let res = ListBooksCommand::new(svc).execute(ListBooksCommandRequest::new()).await?;
    Ok(Json(res))
}

pub(crate) async fn add_book(
    State(state): State<AppState>,
    json: Result<Json<Value>, JsonRejection>) -> Result<(StatusCode, Json<AddBookCommandResponse>), ServerError> {
    let req: AddBookCommandRequest = parse_body(json)?;
    let svc = build_service(&state);
    let res = AddBookCommand::new(svc).execute(req).await?;
    Ok((StatusCode::CREATED, Json(res)))
}

pub(crate) async fn find_book_by_id(
    State(state): State<AppState>,
    Path(book_id): Path<String>) -> Result<Json<GetBookCommandResponse>, ServerError> {
    let req = GetBookCommandRequest { book_id };
    let svc = build_service(&state);
    let res = GetBookCommand::new(svc).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn update_book(
    State(state): State<AppState>,
    Path(book_id): Path<String>,
    json: Result<Json<Value>, JsonRejection>) -> Result<Json<UpdateBookCommandResponse>, ServerError> {
    // a body that cannot be read still has to go through the id check
    let req = parse_body::<UpdateBookCommandRequest>(json).unwrap_or_default().with_book_id(book_id.as_str());
    let svc = build_service(&state);
    let res = UpdateBookCommand::new(svc).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn remove_book(
    State(state): State<AppState>,
    Path(book_id): Path<String>) -> Result<Json<RemoveBookCommandResponse>, ServerError> {
    let req = RemoveBookCommandRequest { book_id };
    let svc = build_service(&state);
    let res = RemoveBookCommand::new(svc).execute(req).await?;
    Ok(Json(res))
}
