use axum::http::StatusCode;

/// Liveness: the process answers HTTP. Does not touch the store.
pub async fn health() -> StatusCode {
    StatusCode::OK
}
