//! Top-level facade crate for snapmetrics.
//!
//! Re-exports core types and the exporter library so users can depend on a single crate.

pub mod core {
    pub use snapmetrics_core::*;
}

pub mod exporter {
    pub use snapmetrics_exporter::*;
}
