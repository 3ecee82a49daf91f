//! Prometheus text exposition for the builder status.
//!
//! Pure string rendering: one `# HELP`/`# TYPE`/sample block per metric in
//! a fixed order, with the `last_error_info` block appended only while an
//! error is recorded.

use std::fmt::Write;
use std::time::Duration;

use crate::status::StatusSnapshot;

/// Identity labels attached to `snapshot_builder_info`.
///
/// These come from the deployment environment, not from the store.
#[derive(Debug, Clone)]
pub struct BuilderLabels {
    pub pod: String,
    pub namespace: String,
    pub network: String,
}

/// Helper to escape label values.
fn escape_label(v: &str) -> String {
    v.replace('\\', "\\\\").replace('"', "\\\"").replace('\n', "\\n")
}

/// Map a status string to its gauge value. Unrecognized values read as 0.
pub fn status_gauge(status: &str) -> u8 {
    match status {
        "running" => 1,
        "stopped" => 0,
        "error" => 2,
        _ => 0,
    }
}

/// Render the full exposition for one snapshot.
pub fn render(labels: &BuilderLabels, snap: &StatusSnapshot, uptime: Duration) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "# HELP snapshot_builder_info Information about the snapshot builder");
    let _ = writeln!(out, "# TYPE snapshot_builder_info gauge");
    let _ = writeln!(
        out,
        "snapshot_builder_info{{pod=\"{}\",namespace=\"{}\",network=\"{}\"}} 1",
        escape_label(&labels.pod),
        escape_label(&labels.namespace),
        escape_label(&labels.network),
    );

    let _ = writeln!(out);
    let _ = writeln!(out, "# HELP snapshot_builder_uptime_seconds Uptime of the snapshot builder in seconds");
    let _ = writeln!(out, "# TYPE snapshot_builder_uptime_seconds counter");
    let _ = writeln!(out, "snapshot_builder_uptime_seconds {}", uptime.as_secs_f64());

    let _ = writeln!(out);
    let _ = writeln!(out, "# HELP snapshot_builder_status Current status of the builder (0=stopped, 1=running, 2=error)");
    let _ = writeln!(out, "# TYPE snapshot_builder_status gauge");
    let _ = writeln!(out, "snapshot_builder_status {}", status_gauge(&snap.status));

    let _ = writeln!(out);
    let _ = writeln!(out, "# HELP snapshot_builder_progress_percent Current operation progress percentage");
    let _ = writeln!(out, "# TYPE snapshot_builder_progress_percent gauge");
    let _ = writeln!(out, "snapshot_builder_progress_percent {}", snap.progress_percent);

    let _ = writeln!(out);
    let _ = writeln!(out, "# HELP snapshot_builder_bytes_processed_total Total bytes processed");
    let _ = writeln!(out, "# TYPE snapshot_builder_bytes_processed_total counter");
    let _ = writeln!(out, "snapshot_builder_bytes_processed_total {}", snap.bytes_processed);

    let _ = writeln!(out);
    let _ = writeln!(out, "# HELP snapshot_builder_snapshots_created_total Total snapshots created");
    let _ = writeln!(out, "# TYPE snapshot_builder_snapshots_created_total counter");
    let _ = writeln!(out, "snapshot_builder_snapshots_created_total {}", snap.snapshots_created);

    let _ = writeln!(out);
    let _ = writeln!(out, "# HELP snapshot_builder_snapshots_cleaned_total Total snapshots cleaned up");
    let _ = writeln!(out, "# TYPE snapshot_builder_snapshots_cleaned_total counter");
    let _ = writeln!(out, "snapshot_builder_snapshots_cleaned_total {}", snap.snapshots_cleaned);

    let _ = writeln!(out);
    let _ = writeln!(out, "# HELP snapshot_builder_last_operation_info Information about the current/last operation");
    let _ = writeln!(out, "# TYPE snapshot_builder_last_operation_info gauge");
    let _ = writeln!(
        out,
        "snapshot_builder_last_operation_info{{operation=\"{}\"}} 1",
        escape_label(&snap.current_operation),
    );

    if !snap.last_error.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "# HELP snapshot_builder_last_error_info Information about the last error");
        let _ = writeln!(out, "# TYPE snapshot_builder_last_error_info gauge");
        let _ = writeln!(
            out,
            "snapshot_builder_last_error_info{{error=\"{}\"}} 1",
            escape_label(&snap.last_error),
        );
    }

    out
}
