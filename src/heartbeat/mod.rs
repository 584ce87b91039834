//! Heartbeat loop - periodic liveness logging on a background task.

mod service;

pub use service::HeartbeatLoop;
