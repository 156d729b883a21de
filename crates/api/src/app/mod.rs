//! HTTP application wiring (Axum router + service wiring).
//!
//! This folder is structured like:
//! - `services.rs`: the store handle and views every handler shares
//! - `routes/`: HTTP routes + handlers (JSON API, pages, system)
//! - `dto.rs`: request/response bodies
//! - `errors.rs`: consistent error responses
//! - `views.rs`: embedded page templates

use std::sync::Arc;

use axum::{handler::HandlerWithoutStateExt, routing::get, Extension, Router};
use tower::ServiceBuilder;
use tower_http::services::ServeDir;

use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;
pub mod views;

use services::AppServices;

/// Build the full HTTP router (public entrypoint used by `main.rs` and tests).
///
/// Anything no route claims is looked up in the static directory; what is not
/// there either gets the 404 page.
pub fn build_app(services: AppServices) -> Router {
    let views = services.views.clone();
    let not_found = (move || {
        let views = views.clone();
        async move { views.not_found() }
    })
    .into_service();
    let assets = ServeDir::new(&services.static_dir).not_found_service(not_found);

    Router::new()
        .route("/health", get(routes::system::health))
        .nest("/api", routes::api_router())
        .merge(routes::pages::router())
        .fallback_service(assets)
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn(middleware::log_requests))
                .layer(Extension(Arc::new(services))),
        )
}
