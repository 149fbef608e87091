//! Store error types
//!
//! These carry full detail for logging. None of it crosses the HTTP
//! boundary: handlers log the error and answer with the opaque
//! internal-error envelope.

use thiserror::Error;

/// Store error
#[derive(Debug, Error)]
pub enum StoreError {
    /// Snapshot file I/O failure
    #[error("snapshot I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// Snapshot encoding or decoding failure
    #[error("snapshot serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A lock was poisoned by a panicking writer
    #[error("collection lock poisoned")]
    LockPoisoned,

    /// Insert hit an id that is already taken
    #[error("duplicate id {0}")]
    DuplicateId(i64),
}

/// Store result type
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_id_display() {
        let err = StoreError::DuplicateId(7);
        assert_eq!(err.to_string(), "duplicate id 7");
    }

    #[test]
    fn test_io_error_wraps_source() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = StoreError::from(io);
        assert!(err.to_string().contains("denied"));
    }
}
