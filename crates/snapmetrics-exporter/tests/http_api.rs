//! HTTP surface tests: route table, update round-trips, failure paths.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use snapmetrics_core::status::StatusStore;
use snapmetrics_exporter::{app_state::AppState, config, router};

fn test_app() -> (Router, Arc<StatusStore>) {
    let cfg = config::from_lookup(|key| match key {
        "POD_NAME" => Some("builder-0".to_string()),
        "POD_NAMESPACE" => Some("snapshots".to_string()),
        "ETHEREUM_NETWORK" => Some("mainnet".to_string()),
        _ => None,
    })
    .expect("config must build");

    let store = Arc::new(StatusStore::new());
    let app = router::build_router(AppState::new(cfg, Arc::clone(&store)));
    (app, store)
}

async fn send(app: &Router, method: Method, path: &str, body: Option<&str>) -> (StatusCode, String) {
    let req = Request::builder()
        .method(method)
        .uri(path)
        .header(header::CONTENT_TYPE, "application/json")
        .body(match body {
            Some(b) => Body::from(b.to_string()),
            None => Body::empty(),
        })
        .unwrap();

    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn metrics_scrape_returns_text_exposition() {
    let (app, _store) = test_app();

    let req = Request::builder()
        .uri("/metrics")
        .body(Body::empty())
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get(header::CONTENT_TYPE).unwrap(),
        "text/plain; charset=utf-8"
    );

    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let body = String::from_utf8(bytes.to_vec()).unwrap();
    assert_eq!(body.matches("# HELP").count(), 8);
    assert!(body.contains(
        "snapshot_builder_info{pod=\"builder-0\",namespace=\"snapshots\",network=\"mainnet\"} 1"
    ));
    assert!(body.contains("snapshot_builder_status 1"));
}

#[tokio::test]
async fn progress_update_round_trips_into_the_exposition() {
    let (app, _store) = test_app();

    let (status, body) = send(&app, Method::POST, "/update", Some(r#"{"progress": 42}"#)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, r#"{"status":"updated"}"#);

    let (status, body) = send(&app, Method::GET, "/metrics", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("snapshot_builder_progress_percent 42\n"));
}

#[tokio::test]
async fn error_update_is_visible_on_every_read_surface() {
    let (app, _store) = test_app();

    let (status, _) = send(
        &app,
        Method::POST,
        "/update",
        Some(r#"{"status": "error", "error": "disk full"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    let health: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(health["status"], "error");

    let (_, body) = send(&app, Method::GET, "/metrics", None).await;
    assert!(body.contains("snapshot_builder_status 2"));
    assert!(body.contains("snapshot_builder_last_error_info{error=\"disk full\"} 1"));
}

#[tokio::test]
async fn health_reports_all_fields_with_utc_timestamp() {
    let (app, _store) = test_app();

    let (status, body) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);

    let health: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(health["status"], "running");
    assert_eq!(health["current_operation"], "initializing");
    assert!(health["uptime"].as_f64().unwrap() >= 0.0);
    assert_eq!(health["progress"].as_f64().unwrap(), 0.0);
    assert!(health["timestamp"].as_str().unwrap().ends_with('Z'));
}

#[tokio::test]
async fn status_page_renders_the_snapshot() {
    let (app, _store) = test_app();

    let (status, body) = send(&app, Method::GET, "/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<h1>Ethereum Snapshot Builder</h1>"));
    assert!(body.contains(r#"<span class="status running">running</span>"#));
    assert!(body.contains(r#"<a href="/metrics">"#));
    assert!(body.contains(r#"<a href="/health">"#));
}

#[tokio::test]
async fn unknown_status_renders_unstyled_on_the_status_page() {
    let (app, store) = test_app();
    store.update_status(Some("paused"), None, None, None);

    let (_, body) = send(&app, Method::GET, "/", None).await;
    assert!(body.contains(r#"<span class="status ">paused</span>"#));
}

#[tokio::test]
async fn malformed_body_answers_400_and_leaves_the_store_untouched() {
    let (app, store) = test_app();
    let before = store.snapshot();

    let (status, body) = send(&app, Method::POST, "/update", Some("not json")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let err: Value = serde_json::from_str(&body).unwrap();
    assert!(err["error"].as_str().unwrap().len() > 0);

    assert_eq!(store.snapshot(), before);
}

#[tokio::test]
async fn non_numeric_progress_is_rejected() {
    let (app, store) = test_app();
    let before = store.snapshot();

    let (status, body) = send(&app, Method::POST, "/update", Some(r#"{"progress": "fast"}"#)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let err: Value = serde_json::from_str(&body).unwrap();
    assert!(err["error"].is_string());

    assert_eq!(store.snapshot(), before);
}

#[tokio::test]
async fn zero_trigger_value_does_not_increment() {
    let (app, store) = test_app();

    let (status, _) = send(&app, Method::POST, "/update", Some(r#"{"snapshots_created": 0}"#)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(store.snapshot().snapshots_created, 0);
}

#[tokio::test]
async fn truthy_trigger_values_increment_by_exactly_one() {
    let (app, store) = test_app();

    let (status, _) = send(
        &app,
        Method::POST,
        "/update",
        Some(r#"{"snapshots_created": 5, "snapshots_cleaned": true}"#),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let snap = store.snapshot();
    assert_eq!(snap.snapshots_created, 1);
    assert_eq!(snap.snapshots_cleaned, 1);
}

#[tokio::test]
async fn empty_operation_leaves_the_current_one() {
    let (app, store) = test_app();

    let (status, _) = send(&app, Method::POST, "/update", Some(r#"{"operation": ""}"#)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(store.snapshot().current_operation, "initializing");
}

#[tokio::test]
async fn unknown_keys_are_ignored() {
    let (app, store) = test_app();

    let (status, _) = send(
        &app,
        Method::POST,
        "/update",
        Some(r#"{"bogus": 1, "progress": 10}"#),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(store.snapshot().progress_percent, 10.0);
}

#[tokio::test]
async fn undefined_paths_answer_empty_404() {
    let (app, _store) = test_app();

    let (status, body) = send(&app, Method::GET, "/foo", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.is_empty());
}

#[tokio::test]
async fn wrong_method_on_a_defined_path_answers_empty_404() {
    let (app, _store) = test_app();

    let (status, body) = send(&app, Method::POST, "/metrics", Some("{}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.is_empty());

    let (status, body) = send(&app, Method::GET, "/update", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.is_empty());
}
