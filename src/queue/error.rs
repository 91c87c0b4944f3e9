//! Queue Error Types

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueueError {
    #[error("Queue is empty")]
    EmptyQueue,

    #[error("No element produced to remove; advance the cursor first")]
    InvalidIteratorState,
}

/// Result type for queue operations
pub type QueueResult<T> = Result<T, QueueError>;
