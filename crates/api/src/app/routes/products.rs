//! Product catalog controller.
//!
//! Each handler is one linear pass: decode and validate the input, make exactly
//! one store call, map the outcome to a status and a JSON body. Nothing is
//! retried and no state is kept between requests.
//!
//! Two asymmetries are part of the contract and pinned by tests:
//! - a failed single lookup answers 500, every other failed store call 501;
//! - update and delete report success even when no product matched, while a
//!   single lookup of an unknown id is a 404.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use tracing::info;

use catalog_products::{ProductFilter, ProductFormData};

use crate::app::dto::{self, OkBody};
use crate::app::errors;
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/products", get(list_products).post(create_product))
        .route(
            "/products/:id",
            get(get_product).put(update_product).delete(delete_product),
        )
}

fn ok(message: &'static str) -> axum::response::Response {
    (StatusCode::OK, Json(OkBody { ok: message })).into_response()
}

pub async fn list_products(
    Extension(services): Extension<Arc<AppServices>>,
    Query(params): Query<Vec<(String, String)>>,
) -> axum::response::Response {
    let filter = ProductFilter::from_query(dto::category_param(&params));

    match services.store.find_all(&filter).await {
        Ok(products) => Json(products).into_response(),
        Err(e) => errors::store_failure("list_products", StatusCode::NOT_IMPLEMENTED, &e),
    }
}

pub async fn get_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    match services.store.find_by_id(&id).await {
        Ok(Some(product)) => Json(product).into_response(),
        Ok(None) => errors::product_not_found(),
        Err(e) => errors::store_failure("get_product", StatusCode::INTERNAL_SERVER_ERROR, &e),
    }
}

pub async fn create_product(
    Extension(services): Extension<Arc<AppServices>>,
    body: Bytes,
) -> axum::response::Response {
    let fields = match ProductFormData::from_body(&body).and_then(ProductFormData::validate) {
        Ok(f) => f,
        Err(e) => return errors::invalid_form_data("create_product", e),
    };

    match services.store.create(fields).await {
        Ok(product) => {
            info!(id = %product.id, "product added");
            ok(dto::PRODUCT_ADDED)
        }
        Err(e) => errors::store_failure("create_product", StatusCode::NOT_IMPLEMENTED, &e),
    }
}

pub async fn update_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    body: Bytes,
) -> axum::response::Response {
    let fields = match ProductFormData::from_body(&body).and_then(ProductFormData::validate) {
        Ok(f) => f,
        Err(e) => return errors::invalid_form_data("update_product", e),
    };

    match services.store.update_by_id(&id, fields).await {
        Ok(matched) => {
            info!(%id, matched = matched.is_some(), "product updated");
            ok(dto::PRODUCT_UPDATED)
        }
        Err(e) => errors::store_failure("update_product", StatusCode::NOT_IMPLEMENTED, &e),
    }
}

pub async fn delete_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    match services.store.delete_by_id(&id).await {
        Ok(removed) => {
            info!(%id, matched = removed.is_some(), "product deleted");
            ok(dto::PRODUCT_DELETED)
        }
        Err(e) => errors::store_failure("delete_product", StatusCode::NOT_IMPLEMENTED, &e),
    }
}
