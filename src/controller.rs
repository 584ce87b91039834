//! Controller: owns the worker lifecycle.
//!
//! Starts the heartbeat loop, blocks on one line of input, then raises the
//! stop flag and joins the loop. The join is the shutdown guarantee: the
//! heartbeat's final stopped line is on the event log before `run` returns,
//! so the process never exits with the loop still running.

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::warn;

use crate::config::WorkerConfig;
use crate::error::Result;
use crate::heartbeat::HeartbeatLoop;
use crate::logging::EventLog;
use crate::shutdown::StopFlag;

/// Main-task orchestrator for one worker run.
pub struct Controller {
    config: WorkerConfig,
    flag: StopFlag,
    log: EventLog,
}

impl Controller {
    /// Create a controller with a fresh stop flag in the running state.
    pub fn new(config: WorkerConfig, log: EventLog) -> Self {
        Self {
            config,
            flag: StopFlag::new(),
            log,
        }
    }

    /// Run the worker to completion.
    ///
    /// `input` is the Monitor's message source; production passes buffered
    /// stdin. Reads exactly one line with no timeout. A closed or failing
    /// input stream is not an error: whatever text was obtained (possibly
    /// none) becomes the message, and the shutdown sequence runs either way.
    pub async fn run<R>(self, mut input: R) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
    {
        let heartbeat =
            HeartbeatLoop::new(&self.config, self.flag.clone(), self.log.clone()).spawn();

        let mut line = String::new();
        if let Err(e) = input.read_line(&mut line).await {
            warn!("Input read failed, proceeding to shutdown: {}", e);
        }
        let message = line.trim_end_matches('\n').trim_end_matches('\r');
        self.log
            .emit(&format!("Received message \"{}\" from the Monitor", message));

        // Strictly after the received-message line.
        self.flag.request_stop();
        heartbeat.await?;
        Ok(())
    }
}
