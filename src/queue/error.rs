//! Queue Error Types

/// Failures reported by queue and chain operations
///
/// An empty queue is never an error: operations that need an element
/// report "no result" through `Option` or a zero count instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueueError {
    #[error("Allocation failed ({bytes} bytes requested)")]
    AllocationFailed { bytes: usize },

    #[error("Invalid handle: {handle}")]
    InvalidHandle { handle: String },
}

/// Result type for queue operations
pub type QueueResult<T> = Result<T, QueueError>;
