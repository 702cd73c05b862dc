//! Container-specific error types.
//!
//! All failures are local, synchronous conditions reported at the call
//! site that violated the contract. The containers never retry or log
//! internally.

use std::error::Error;
use std::fmt;

/// Errors from [`SegmentedList`](crate::SegmentedList) operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ListError {
    /// A logical index was outside `[0, len())`.
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// The list length at the time of the call.
        length: usize,
    },
    /// A pop would have removed the last remaining segment, violating the
    /// at-least-one-segment invariant.
    LastSegment,
}

impl fmt::Display for ListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfRange { index, length } => {
                write!(f, "index {index} out of range for list of length {length}")
            }
            Self::LastSegment => {
                write!(f, "cannot pop the last remaining segment")
            }
        }
    }
}

impl Error for ListError {}

/// Errors from [`CircularQueue`](crate::CircularQueue) operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QueueError {
    /// A logical index was outside `[0, len())`.
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// The queue length at the time of the call.
        length: usize,
    },
    /// The queue was constructed with capacity 0. The ring's wrap
    /// arithmetic requires at least one valid slot.
    ZeroCapacity,
}

impl fmt::Display for QueueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfRange { index, length } => {
                write!(f, "index {index} out of range for queue of length {length}")
            }
            Self::ZeroCapacity => {
                write!(f, "circular queue capacity must be at least 1")
            }
        }
    }
}

impl Error for QueueError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_error_display() {
        let err = ListError::IndexOutOfRange {
            index: 12,
            length: 8,
        };
        assert_eq!(err.to_string(), "index 12 out of range for list of length 8");
        assert_eq!(
            ListError::LastSegment.to_string(),
            "cannot pop the last remaining segment"
        );
    }

    #[test]
    fn queue_error_display() {
        let err = QueueError::IndexOutOfRange {
            index: 4,
            length: 4,
        };
        assert_eq!(err.to_string(), "index 4 out of range for queue of length 4");
        assert_eq!(
            QueueError::ZeroCapacity.to_string(),
            "circular queue capacity must be at least 1"
        );
    }
}
