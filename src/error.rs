//! Error types for the sample worker.
//!
//! Uses `thiserror` for ergonomic error handling with automatic `Display`
//! and `Error` trait implementations.

use thiserror::Error;

/// The primary error type for worker operations.
#[derive(Error, Debug)]
pub enum WorkerError {
    /// Standard I/O errors (event log writes)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The heartbeat task panicked or was cancelled before it could be joined
    #[error("Heartbeat task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// A specialized `Result` type for worker operations.
pub type Result<T> = std::result::Result<T, WorkerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: WorkerError = io_err.into();
        assert!(matches!(err, WorkerError::Io(_)));
        assert_eq!(err.to_string(), "IO error: pipe closed");
    }

    #[test]
    fn test_result_type() {
        fn returns_result() -> Result<i32> {
            Ok(42)
        }
        assert_eq!(returns_result().unwrap(), 42);
    }

    #[tokio::test]
    async fn test_error_from_join() {
        let handle = tokio::spawn(async { panic!("boom") });
        let join_err = handle.await.unwrap_err();
        let err: WorkerError = join_err.into();
        assert!(matches!(err, WorkerError::Join(_)));
        assert!(err.to_string().starts_with("Heartbeat task failed"));
    }
}
