//! snapmetrics exporter binary.
//!
//! Reads its configuration from the process environment, serves the four
//! HTTP routes, and records a best-effort final "stopped" status when the
//! process is interrupted. Per-request logging is deliberately absent;
//! only the startup banner and the shutdown line go to the log.

use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{fmt, EnvFilter};

use snapmetrics_core::status::StatusStore;
use snapmetrics_exporter::{app_state, config, router};

#[tokio::main]
async fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let cfg = config::from_env().expect("config load failed");
    let listen = SocketAddr::from(([0, 0, 0, 0], cfg.port));

    let store = Arc::new(StatusStore::new());
    let state = app_state::AppState::new(cfg.clone(), Arc::clone(&store));
    let app = router::build_router(state);

    tracing::info!(
        %listen,
        pod = %cfg.labels.pod,
        network = %cfg.labels.network,
        "snapmetrics exporter starting"
    );
    tracing::info!("  /metrics     - Prometheus metrics");
    tracing::info!("  /health      - Health check");
    tracing::info!("  /            - Status page");
    tracing::info!("  POST /update - Update metrics");

    let listener = tokio::net::TcpListener::bind(listen).await.expect("failed to bind");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(store))
        .await
        .expect("server failed");
}

/// Resolves once SIGINT or SIGTERM arrives, after the final status write.
async fn shutdown_signal(store: Arc<StatusStore>) {
    let ctrl_c = async {
        tokio::signal::ctrl_c().await.expect("failed to install SIGINT handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }

    store.update_status(Some("stopped"), Some("shutdown"), None, None);
    tracing::info!("shutting down metrics exporter");
}
