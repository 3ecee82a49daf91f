//! `GET /health` — JSON probe for container liveness checks.

use axum::{extract::State, response::IntoResponse, Json};
use chrono::{SecondsFormat, Utc};
use serde_json::json;

use crate::app_state::AppState;

pub async fn health_handler(State(app): State<AppState>) -> impl IntoResponse {
    let snap = app.store().snapshot();
    Json(json!({
        "status": snap.status,
        "uptime": app.store().uptime().as_secs_f64(),
        "current_operation": snap.current_operation,
        "progress": snap.progress_percent,
        "timestamp": Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true),
    }))
}
