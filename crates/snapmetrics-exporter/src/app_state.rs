//! Shared application state for the exporter.
//!
//! The store is constructed once in `main` (or a test) and injected here;
//! every handler reaches the same instance through this state. No ambient
//! singletons.

use std::sync::Arc;

use snapmetrics_core::render::BuilderLabels;
use snapmetrics_core::status::StatusStore;

use crate::config::ExporterConfig;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: ExporterConfig,
    store: Arc<StatusStore>,
}

impl AppState {
    pub fn new(cfg: ExporterConfig, store: Arc<StatusStore>) -> Self {
        Self {
            inner: Arc::new(AppStateInner { cfg, store }),
        }
    }

    pub fn cfg(&self) -> &ExporterConfig {
        &self.inner.cfg
    }

    pub fn labels(&self) -> &BuilderLabels {
        &self.inner.cfg.labels
    }

    pub fn store(&self) -> &StatusStore {
        &self.inner.store
    }
}
