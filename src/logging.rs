//! Timestamped event log on standard output.
//!
//! This is the worker's observable surface, distinct from `tracing`
//! diagnostics: one line per event, format `[YYYY-MM-DD HH:MM:SS] <message>`,
//! flushed after every write so an external monitor never sees a buffering
//! delay. Both the controller and the heartbeat task hold clones of the same
//! handle and write to the same sink.

use std::io::Write;
use std::sync::{Arc, Mutex, PoisonError};

use chrono::Local;
use tracing::error;

use crate::error::Result;

/// Cheaply clonable handle over a shared line-oriented log sink.
#[derive(Clone)]
pub struct EventLog {
    sink: Arc<Mutex<Box<dyn Write + Send>>>,
}

impl EventLog {
    /// Create an event log writing to an arbitrary sink.
    pub fn new(writer: Box<dyn Write + Send>) -> Self {
        Self {
            sink: Arc::new(Mutex::new(writer)),
        }
    }

    /// Create an event log writing to standard output.
    pub fn stdout() -> Self {
        Self::new(Box::new(std::io::stdout()))
    }

    /// Format, write, and flush one event line.
    pub fn try_emit(&self, message: &str) -> Result<()> {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        let mut sink = self
            .sink
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        writeln!(sink, "[{}] {}", timestamp, message)?;
        sink.flush()?;
        Ok(())
    }

    /// Emit one event line, dropping write failures.
    ///
    /// Output is assumed infallible for this worker; there is no retry path,
    /// so a failure is reported once on the diagnostic channel and the
    /// caller carries on.
    pub fn emit(&self, message: &str) {
        if let Err(e) = self.try_emit(message) {
            error!("Failed to write event log line: {}", e);
        }
    }
}

impl std::fmt::Debug for EventLog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventLog").finish_non_exhaustive()
    }
}


#[cfg(test)]
mod tests {
    use super::capture::Capture;
    use super::*;

    #[test]
    fn test_emit_writes_one_line_per_event() {
        let capture = Capture::default();
        let log = capture.event_log();

        log.emit("first");
        log.emit("second");

        assert_eq!(capture.messages(), vec!["first", "second"]);
    }

    #[test]
    fn test_line_format_has_bracketed_timestamp() {
        let capture = Capture::default();
        let log = capture.event_log();

        log.emit("Running");

        let lines = capture.lines();
        assert_eq!(lines.len(), 1);
        let line = &lines[0];
        assert!(line.starts_with('['));
        assert!(line.ends_with("] Running"));

        // [YYYY-MM-DD HH:MM:SS] is 21 characters
        let stamp = &line[1..20];
        assert_eq!(stamp.len(), 19);
        assert_eq!(&stamp[4..5], "-");
        assert_eq!(&stamp[7..8], "-");
        assert_eq!(&stamp[10..11], " ");
        assert_eq!(&stamp[13..14], ":");
        assert_eq!(&stamp[16..17], ":");
    }

    #[test]
    fn test_clones_share_one_sink() {
        let capture = Capture::default();
        let log = capture.event_log();
        let other = log.clone();

        log.emit("from original");
        other.emit("from clone");

        assert_eq!(capture.messages(), vec!["from original", "from clone"]);
    }

    #[test]
    fn test_try_emit_propagates_write_failure() {
        struct Broken;
        impl Write for Broken {
            fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
                Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "gone"))
            }
            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let log = EventLog::new(Box::new(Broken));
        let err = log.try_emit("anything").unwrap_err();
        assert!(matches!(err, crate::error::WorkerError::Io(_)));
    }

    #[test]
    fn test_emit_swallows_write_failure() {
        struct Broken;
        impl Write for Broken {
            fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
                Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "gone"))
            }
            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let log = EventLog::new(Box::new(Broken));
        // Must not panic.
        log.emit("anything");
    }
}
