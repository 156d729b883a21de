use axum::Router;

pub mod pages;
pub mod products;
pub mod system;

/// JSON API, mounted under `/api`.
pub fn api_router() -> Router {
    Router::new().merge(products::router())
}
