//! Shared error type across snapmetrics crates.

use thiserror::Error;

/// Shared result type.
pub type Result<T> = std::result::Result<T, SnapMetricsError>;

/// Unified error type used by core and exporter.
///
/// Per-request failures are `BadRequest` and answer HTTP 400 at the handler
/// boundary; everything else is `Internal`.
#[derive(Debug, Error)]
pub enum SnapMetricsError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("internal: {0}")]
    Internal(String),
}
