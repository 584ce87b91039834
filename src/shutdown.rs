//! Shared stop flag coordinating shutdown between the controller and the
//! heartbeat loop.
//!
//! Single writer (the controller), single reader (the heartbeat loop). The
//! flag is atomic because its store happens on one task and its loads on
//! another; cross-task visibility is a correctness requirement here, not an
//! optimization.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Clonable handle over the shared stop flag.
///
/// Starts in the running state. Once stopped it never reverts within a run;
/// repeated stop requests have no additional effect.
#[derive(Clone, Debug, Default)]
pub struct StopFlag {
    stopped: Arc<AtomicBool>,
}

impl StopFlag {
    /// Create a flag in the running (not stopped) state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request shutdown. Sticky and idempotent.
    pub fn request_stop(&self) {
        self.stopped.store(true, Ordering::SeqCst);
    }

    /// Whether shutdown has been requested.
    pub fn is_stop_requested(&self) -> bool {
        self.stopped.load(Ordering::SeqCst)
    }
}
