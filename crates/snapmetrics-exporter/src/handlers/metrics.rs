//! `GET /metrics` — Prometheus text exposition.

use axum::{extract::State, http::header, response::IntoResponse};

use snapmetrics_core::render;

use crate::app_state::AppState;

pub async fn metrics_handler(State(app): State<AppState>) -> impl IntoResponse {
    let store = app.store();
    let body = render::render(app.labels(), &store.snapshot(), store.uptime());
    ([(header::CONTENT_TYPE, "text/plain; charset=utf-8")], body)
}
