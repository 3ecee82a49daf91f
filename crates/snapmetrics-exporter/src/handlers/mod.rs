//! HTTP handlers, one module per route.

pub mod health;
pub mod metrics;
pub mod status_page;
pub mod update;

use axum::http::StatusCode;

/// Shared fallback: empty 404 body for everything outside the route table.
pub async fn not_found() -> StatusCode {
    StatusCode::NOT_FOUND
}
