use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    response::Response,
    routing::get,
    Router,
};

use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/", get(all_products))
        .route("/category/:category", get(category_products))
        .route("/add", get(add_product))
        .route("/edit/:id", get(edit_product))
}

pub async fn all_products(Extension(services): Extension<Arc<AppServices>>) -> Response {
    services.views.product_grid(None)
}

pub async fn category_products(
    Extension(services): Extension<Arc<AppServices>>,
    Path(category): Path<String>,
) -> Response {
    services.views.product_grid(Some(&category))
}

pub async fn add_product(Extension(services): Extension<Arc<AppServices>>) -> Response {
    services.views.add_product()
}

pub async fn edit_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> Response {
    services.views.edit_product(&id)
}
