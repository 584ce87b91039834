//! Sample worker: a background heartbeat loop with stdin-triggered graceful
//! shutdown.
//!
//! The controller starts the heartbeat loop, waits for one line from the
//! Monitor on standard input, then raises the shared stop flag and joins the
//! loop before returning. All event lines go to standard output as
//! `[YYYY-MM-DD HH:MM:SS] <message>`; diagnostics go through `tracing`.

pub mod config;
pub mod controller;
pub mod error;
pub mod heartbeat;
pub mod logging;
pub mod shutdown;

pub use config::WorkerConfig;
pub use controller::Controller;
pub use error::{Result, WorkerError};
pub use logging::EventLog;
pub use shutdown::StopFlag;
