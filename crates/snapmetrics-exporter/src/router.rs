//! Axum router wiring.
//!
//! Anything outside the four-route table answers an empty 404, including a
//! defined path hit with the wrong method (per-method fallback instead of
//! the framework-default 405).

use axum::routing::{get, post};
use axum::Router;

use crate::{app_state::AppState, handlers};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/metrics",
            get(handlers::metrics::metrics_handler).fallback(handlers::not_found),
        )
        .route(
            "/health",
            get(handlers::health::health_handler).fallback(handlers::not_found),
        )
        .route(
            "/",
            get(handlers::status_page::status_page_handler).fallback(handlers::not_found),
        )
        .route(
            "/update",
            post(handlers::update::update_handler).fallback(handlers::not_found),
        )
        .fallback(handlers::not_found)
        .with_state(state)
}
