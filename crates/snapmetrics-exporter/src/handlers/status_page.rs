//! `GET /` — human-readable status page.

use axum::{extract::State, response::Html};

use crate::app_state::AppState;

/// CSS class for the status span; unrecognized statuses render unstyled.
fn status_class(status: &str) -> &'static str {
    match status {
        "running" => "running",
        "error" => "error",
        "stopped" => "stopped",
        _ => "",
    }
}

pub async fn status_page_handler(State(app): State<AppState>) -> Html<String> {
    let snap = app.store().snapshot();
    let uptime = app.store().uptime().as_secs_f64();

    Html(format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <title>Snapshot Builder Metrics</title>
    <style>
        body {{ font-family: Arial, sans-serif; margin: 40px; }}
        .metric {{ margin: 10px 0; }}
        .status {{ font-weight: bold; }}
        .running {{ color: green; }}
        .error {{ color: red; }}
        .stopped {{ color: orange; }}
    </style>
</head>
<body>
    <h1>Ethereum Snapshot Builder</h1>
    <div class="metric">Status: <span class="status {class}">{status}</span></div>
    <div class="metric">Operation: {operation}</div>
    <div class="metric">Progress: {progress}%</div>
    <div class="metric">Uptime: {uptime:.1}s</div>
    <div class="metric">Snapshots Created: {created}</div>
    <div class="metric">Snapshots Cleaned: {cleaned}</div>
    <p><a href="/metrics">Prometheus Metrics</a> | <a href="/health">Health Check</a></p>
</body>
</html>"#,
        class = status_class(&snap.status),
        status = snap.status,
        operation = snap.current_operation,
        progress = snap.progress_percent,
        uptime = uptime,
        created = snap.snapshots_created,
        cleaned = snap.snapshots_cleaned,
    ))
}
