//! snapmetrics core: the shared builder status record, its lock discipline,
//! and the Prometheus text exposition renderer.
//!
//! This crate carries no HTTP or runtime dependencies so the record and the
//! renderer can be exercised directly from tests and reused by other
//! front-ends.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `SnapMetricsError`/`Result` so the
//! exporter process does not crash on malformed input.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod render;
pub mod status;

/// Shared result type.
pub use error::{Result, SnapMetricsError};
