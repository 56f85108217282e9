pub mod demo;
pub mod harness;
pub mod pqueue;

#[cfg(test)]
mod validation;

pub use pqueue::{BoundedHeap, Entry};

/// Error type for queue operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueError {
    /// `dequeue` or `peek` was called on a queue with no entries.
    Empty,
}

impl std::fmt::Display for QueueError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "queue is empty"),
        }
    }
}

impl std::error::Error for QueueError {}

pub type QueueResult<T> = Result<T, QueueError>;
