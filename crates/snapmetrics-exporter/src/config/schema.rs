use snapmetrics_core::error::{Result, SnapMetricsError};
use snapmetrics_core::render::BuilderLabels;

/// Variables consumed at startup. Each falls back to a default when unset.
pub const ENV_PORT: &str = "METRICS_PORT";
pub const ENV_POD_NAME: &str = "POD_NAME";
pub const ENV_POD_NAMESPACE: &str = "POD_NAMESPACE";
pub const ENV_NETWORK: &str = "ETHEREUM_NETWORK";

#[derive(Debug, Clone)]
pub struct ExporterConfig {
    /// TCP port the exporter binds on all interfaces.
    pub port: u16,
    /// Identity labels interpolated into `snapshot_builder_info`.
    pub labels: BuilderLabels,
}

impl ExporterConfig {
    pub(crate) fn from_lookup(lookup: &impl Fn(&str) -> Option<String>) -> Result<Self> {
        let port = match lookup(ENV_PORT) {
            Some(raw) => raw.trim().parse::<u16>().map_err(|e| {
                SnapMetricsError::BadRequest(format!("{ENV_PORT} must be a port number: {e}"))
            })?,
            None => default_port(),
        };

        let labels = BuilderLabels {
            pod: lookup(ENV_POD_NAME).unwrap_or_else(default_label),
            namespace: lookup(ENV_POD_NAMESPACE).unwrap_or_else(default_label),
            network: lookup(ENV_NETWORK).unwrap_or_else(default_label),
        };

        Ok(Self { port, labels })
    }

    pub fn validate(&self) -> Result<()> {
        if self.port == 0 {
            return Err(SnapMetricsError::BadRequest(format!(
                "{ENV_PORT} must not be 0"
            )));
        }
        Ok(())
    }
}

fn default_port() -> u16 {
    8080
}
fn default_label() -> String {
    "unknown".into()
}
