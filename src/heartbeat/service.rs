//! Heartbeat loop implementation.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::debug;

use crate::config::WorkerConfig;
use crate::logging::EventLog;
use crate::shutdown::StopFlag;

/// Background task that emits one liveness line per interval until the stop
/// flag is raised.
///
/// The flag is checked only at the top of each iteration, never mid-sleep,
/// so shutdown may lag the stop request by up to one interval. That latency
/// is part of the contract.
pub struct HeartbeatLoop {
    name: String,
    interval: Duration,
    flag: StopFlag,
    log: EventLog,
}

impl HeartbeatLoop {
    /// Create a heartbeat loop reading the stop flag shared with the
    /// controller.
    pub fn new(config: &WorkerConfig, flag: StopFlag, log: EventLog) -> Self {
        Self {
            name: config.worker_name.clone(),
            interval: config.heartbeat_interval(),
            flag,
            log,
        }
    }

    /// Start the loop on a background task.
    ///
    /// The started line is written before the task is scheduled, so it
    /// precedes every other event line no matter how the controller and the
    /// loop interleave. Awaiting the returned handle guarantees the final
    /// stopped line has been written.
    pub fn spawn(self) -> JoinHandle<()> {
        self.log
            .emit(&format!("Started {}, press enter to exit", self.name));
        tokio::spawn(self.run())
    }

    async fn run(self) {
        while !self.flag.is_stop_requested() {
            self.log.emit("Running");
            tokio::time::sleep(self.interval).await;
        }

        self.log.emit(&format!("Stopped {}", self.name));
        debug!(name = %self.name, "Heartbeat loop terminated");
    }
}
