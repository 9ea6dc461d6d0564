use std::net::SocketAddr;
use axum::{
    body::{Body, HttpBody},
    routing::get,
    BoxError,
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;
use crate::catalog::controller::{add_book, find_book_by_id, list_books, remove_book, update_book};
use crate::core::controller::AppState;
use crate::core::domain::ServeMode;
use crate::core::library::LibraryError;

/// Catalog API under `/api/books`; anything else is looked up in the static
/// client directory. Generic over the request body so the same routes serve
/// hyper requests and Lambda events.
pub(crate) fn build_router<B>(state: AppState) -> Router<(), B>
    where B: HttpBody + Send + 'static,
          B::Data: Send,
          B::Error: Into<BoxError> {
    let static_dir = ServeDir::new(state.config.static_dir.as_str());
    Router::new()
        .route("/api/books",
               get(list_books).post(add_book))
        .route("/api/books/:id",
               get(find_book_by_id).put(update_book).delete(remove_book))
        .fallback_service(static_dir)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub async fn serve(state: AppState) -> Result<(), lambda_http::Error> {
    let config = state.config.clone();
    match config.serve_mode {
        ServeMode::Lambda => {
            info!("starting catalog for branch {} on lambda runtime", config.branch_id);
            lambda_http::run(build_router::<lambda_http::Body>(state)).await
        }
        ServeMode::Http => {
            let addr: SocketAddr = config.socket_addr().parse().map_err(|err| {
                LibraryError::runtime(format!("invalid listen address {}: {}", config.socket_addr(), err).as_str(), None)
            })?;
            info!("catalog for branch {} running at http://{}", config.branch_id, addr);
            let app = build_router::<Body>(state);
            axum::Server::bind(&addr).serve(app.into_make_service()).await?;
            Ok(())
        }
    }
}
