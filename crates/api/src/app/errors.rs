use axum::http::StatusCode;
use axum::response::IntoResponse;
use tracing::{debug, error};

use catalog_core::DomainError;
use catalog_infra::StoreError;

use crate::app::dto::ErrorBody;

pub const INVALID_FORM_DATA: &str = "invalid form data";
pub const PRODUCT_NOT_FOUND: &str = "product not found";
pub const INTERNAL_SERVER_ERROR: &str = "internal server error";

/// Every API error body has the shape `{"error": <message>}`.
pub fn json_error(status: StatusCode, message: &'static str) -> axum::response::Response {
    (status, axum::Json(ErrorBody { error: message })).into_response()
}

/// Client sent a form we cannot store. Not a server fault, so debug only.
pub fn invalid_form_data(handler: &'static str, err: DomainError) -> axum::response::Response {
    debug!(handler, reason = %err, "rejected form data");
    json_error(StatusCode::BAD_REQUEST, INVALID_FORM_DATA)
}

pub fn product_not_found() -> axum::response::Response {
    json_error(StatusCode::NOT_FOUND, PRODUCT_NOT_FOUND)
}

/// A store call failed.
///
/// The cause is logged; the client only ever sees the generic message.
/// `status` is chosen per handler: single lookup answers 500, every other
/// operation 501.
pub fn store_failure(
    handler: &'static str,
    status: StatusCode,
    err: &StoreError,
) -> axum::response::Response {
    error!(handler, error = %err, "store call failed");
    json_error(status, INTERNAL_SERVER_ERROR)
}
