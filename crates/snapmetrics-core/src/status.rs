//! Shared status record for the snapshot builder.
//!
//! One flat record behind one exclusive lock. Mutators and `snapshot` are
//! mutually exclusive; the lock is held only for field assignments and the
//! copy-out, never for I/O.

use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

/// Consistent copy of the record, taken under one critical section.
///
/// `status` is stored verbatim; it is only mapped to a numeric gauge at
/// render time, so an unrecognized value is tolerated rather than rejected.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusSnapshot {
    pub status: String,
    pub current_operation: String,
    pub progress_percent: f64,
    pub bytes_processed: u64,
    pub snapshots_created: u64,
    pub snapshots_cleaned: u64,
    /// Empty means no error recorded.
    pub last_error: String,
}

#[derive(Debug)]
struct StatusRecord {
    status: String,
    current_operation: String,
    progress_percent: f64,
    bytes_processed: u64,
    snapshots_created: u64,
    snapshots_cleaned: u64,
    last_error: String,
}

impl StatusRecord {
    fn initial() -> Self {
        Self {
            status: "running".to_string(),
            current_operation: "initializing".to_string(),
            progress_percent: 0.0,
            bytes_processed: 0,
            snapshots_created: 0,
            snapshots_cleaned: 0,
            last_error: String::new(),
        }
    }
}

/// Lock-protected builder status. All operations are mutually exclusive
/// under a single lock; there is no fairness guarantee across callers.
#[derive(Debug)]
pub struct StatusStore {
    started: Instant,
    record: Mutex<StatusRecord>,
}

impl StatusStore {
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
            record: Mutex::new(StatusRecord::initial()),
        }
    }

    // The record is plain data; a poisoned lock is recovered, not propagated.
    fn lock(&self) -> MutexGuard<'_, StatusRecord> {
        self.record.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Apply a partial update.
    ///
    /// `None` leaves the corresponding field unchanged, as does an empty
    /// `operation`. Any status string is stored verbatim.
    pub fn update_status(
        &self,
        status: Option<&str>,
        operation: Option<&str>,
        progress: Option<f64>,
        bytes_processed: Option<u64>,
    ) {
        let mut rec = self.lock();
        if let Some(status) = status {
            rec.status = status.to_string();
        }
        match operation {
            Some(op) if !op.is_empty() => rec.current_operation = op.to_string(),
            _ => {}
        }
        if let Some(progress) = progress {
            rec.progress_percent = progress;
        }
        if let Some(bytes) = bytes_processed {
            rec.bytes_processed = bytes;
        }
    }

    pub fn increment_snapshots_created(&self) {
        self.lock().snapshots_created += 1;
    }

    pub fn increment_snapshots_cleaned(&self) {
        self.lock().snapshots_cleaned += 1;
    }

    /// Overwrite the last error unconditionally. Empty clears it.
    pub fn set_error(&self, error: &str) {
        self.lock().last_error = error.to_string();
    }

    /// Consistent copy of all fields; never interleaves with a mutator.
    pub fn snapshot(&self) -> StatusSnapshot {
        let rec = self.lock();
        StatusSnapshot {
            status: rec.status.clone(),
            current_operation: rec.current_operation.clone(),
            progress_percent: rec.progress_percent,
            bytes_processed: rec.bytes_processed,
            snapshots_created: rec.snapshots_created,
            snapshots_cleaned: rec.snapshots_cleaned,
            last_error: rec.last_error.clone(),
        }
    }

    /// Elapsed time since construction. `started` is immutable, so this
    /// never touches the lock.
    pub fn uptime(&self) -> Duration {
        self.started.elapsed()
    }
}

impl Default for StatusStore {
    fn default() -> Self {
        Self::new()
    }
}
