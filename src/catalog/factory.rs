use crate::catalog::domain::CatalogService;
use crate::catalog::domain::service::CatalogServiceImpl;
use crate::core::controller::AppState;

pub(crate) fn create_catalog_service(state: &AppState) -> Box<dyn CatalogService> {
    Box::new(CatalogServiceImpl::new(&state.config, state.books.clone(), state.publisher.clone()))
}
