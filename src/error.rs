use std::fmt;
use std::time::Duration;

/// Error type for collaborator store I/O (population reads, preference writes).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The store could not be reached or rejected the operation.
    Unavailable(String),
    /// The operation did not complete within the configured bound.
    Timeout(Duration),
    /// Stored data could not be (de)serialized.
    Serde(String),
}

impl StoreError {
    /// Whether a retry could plausibly succeed. Serialization failures are
    /// permanent; availability and timeout failures are not.
    pub fn is_retryable(&self) -> bool {
        matches!(self, StoreError::Unavailable(_) | StoreError::Timeout(_))
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Unavailable(msg) => write!(f, "store unavailable: {}", msg),
            StoreError::Timeout(bound) => {
                write!(f, "store operation timed out after {:?}", bound)
            }
            StoreError::Serde(msg) => write!(f, "store serialization error: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}
