//! `POST /update` — out-of-band status pushes from the builder process.
//!
//! Every key is optional and applied in a fixed order. A body that fails to
//! parse answers 400 with the parse error and leaves the store untouched;
//! parsing happens before any field is applied, so a type error cannot
//! leave a half-applied update behind.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::app_state::AppState;

/// Update body. Unknown keys are ignored; wrong-typed numeric fields are
/// rejected at parse time.
#[derive(Debug, Deserialize)]
pub struct UpdateRequest {
    #[serde(default)]
    status: Option<String>,
    /// Empty string means "no change".
    #[serde(default)]
    operation: Option<String>,
    #[serde(default)]
    progress: Option<f64>,
    #[serde(default)]
    bytes_processed: Option<u64>,
    /// Counter trigger: any truthy JSON value counts as exactly one
    /// created event; the value itself is otherwise ignored.
    #[serde(default)]
    snapshots_created: Option<Value>,
    #[serde(default)]
    snapshots_cleaned: Option<Value>,
    #[serde(default)]
    error: Option<String>,
}

/// Trigger truthiness: `false`, `0`, `0.0`, `""`, `null`, `[]` and `{}`
/// do not count as an event.
fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

pub async fn update_handler(State(app): State<AppState>, body: String) -> impl IntoResponse {
    let req: UpdateRequest = match serde_json::from_str(&body) {
        Ok(req) => req,
        Err(e) => {
            return (StatusCode::BAD_REQUEST, Json(json!({ "error": e.to_string() })));
        }
    };

    let store = app.store();
    store.update_status(
        req.status.as_deref(),
        req.operation.as_deref(),
        req.progress,
        req.bytes_processed,
    );
    if req.snapshots_created.as_ref().is_some_and(truthy) {
        store.increment_snapshots_created();
    }
    if req.snapshots_cleaned.as_ref().is_some_and(truthy) {
        store.increment_snapshots_cleaned();
    }
    match req.error.as_deref() {
        Some(error) if !error.is_empty() => store.set_error(error),
        _ => {}
    }

    (StatusCode::OK, Json(json!({ "status": "updated" })))
}
