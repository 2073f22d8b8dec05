//! Run telemetry events and sinks.
//!
//! The job is a short-lived batch process, so telemetry is limited to a
//! structured record of each created task and a final run summary.

use std::io;

use serde::{Deserialize, Serialize};

/// A structured telemetry event emitted by a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TelemetryEvent {
    /// A tracking task and its subtasks were created for a repository.
    TaskCreated {
        /// Repository name.
        repository: String,
        /// Gid of the created task.
        task_gid: String,
        /// Number of dependency pull requests listed in the task.
        pull_requests: usize,
    },
    /// The run finished scanning the organisation.
    RunCompleted {
        /// Organisation that was scanned.
        organisation: String,
        /// Repositories inspected.
        repositories: usize,
        /// Tasks created.
        tasks_created: usize,
    },
}

/// A sink that can record telemetry events.
pub trait TelemetrySink: Send + Sync {
    /// Records a telemetry event.
    fn record(&self, event: TelemetryEvent);
}

/// Telemetry sink that drops all events.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopTelemetrySink;

impl TelemetrySink for NoopTelemetrySink {
    fn record(&self, _event: TelemetryEvent) {}
}

/// Records telemetry events to stderr as JSON lines (JSONL).
#[derive(Debug, Default)]
pub struct StderrJsonlTelemetrySink;

impl TelemetrySink for StderrJsonlTelemetrySink {
    fn record(&self, event: TelemetryEvent) {
        let Ok(serialised) = serde_json::to_string(&event) else {
            return;
        };

        let _ignored = writeln_stderr(&serialised);
    }
}

fn writeln_stderr(message: &str) -> io::Result<()> {
    use io::Write;

    let mut stderr = io::stderr().lock();
    writeln!(stderr, "{message}")
}
