//! Worker settings.
//!
//! The binary always runs the defaults — this worker deliberately has no
//! flags, environment variables, or config files. The struct exists so the
//! knobs live in one typed place and embedders (and tests) can construct
//! their own.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Settings for one worker instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkerConfig {
    /// Name used in the started/stopped log lines.
    pub worker_name: String,
    /// Seconds between heartbeat log lines.
    pub heartbeat_interval_secs: u64,
}

impl Default for WorkerConfig {
    fn default() -> Self {
        Self {
            worker_name: "SampleWorker".to_string(),
            heartbeat_interval_secs: 1,
        }
    }
}

impl WorkerConfig {
    /// Heartbeat interval as a `Duration`.
    pub fn heartbeat_interval(&self) -> Duration {
        Duration::from_secs(self.heartbeat_interval_secs)
    }
}
