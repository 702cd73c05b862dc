//! Fixed-layout container primitives.
//!
//! Plinth provides low-level building-block containers whose shape is fixed
//! at the type level: no per-element allocation, no reallocation that moves
//! existing elements, and no iterators whose positions could be invalidated
//! by structural mutation.
//!
//! Two containers:
//!
//! - [`SegmentedList`]: a singly-owned chain of fixed-size array segments.
//!   Growing the list never moves previously stored elements, so references
//!   into a segment stay valid for the segment's lifetime. Indexed access
//!   is O(n/S) where S is the segment size.
//! - [`CircularQueue`]: a fixed-capacity ring buffer embedded inline in the
//!   container value. Always holds between 1 and N elements; a push into a
//!   full ring evicts the element at the opposite end.
//!
//! Both are single-threaded value types: every operation is a direct,
//! bounded computation with no internal locking or background work.
//! Traversal is by explicit bounded indexing only — there are deliberately
//! no iterator or cursor objects to invalidate.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod circular_queue;
pub mod error;
pub mod segmented_list;

// Public re-exports for the primary API surface.
pub use circular_queue::CircularQueue;
pub use error::{ListError, QueueError};
pub use segmented_list::{Segment, SegmentedList};
