//! Exporter config loader (process environment, read once at startup).

pub mod schema;

use std::env;

use snapmetrics_core::error::Result;

pub use schema::ExporterConfig;

/// Build the config from the process environment.
pub fn from_env() -> Result<ExporterConfig> {
    from_lookup(|key| env::var(key).ok())
}

/// Build the config from an arbitrary variable lookup.
///
/// Tests feed values through here without touching process-wide state.
pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<ExporterConfig> {
    let cfg = ExporterConfig::from_lookup(&lookup)?;
    cfg.validate()?;
    Ok(cfg)
}
