//! Benchmark profiles for the plinth container primitives.
//!
//! Provides pre-built container shapes for the criterion benches:
//!
//! - [`deep_list`]: a segmented list with a given chain depth, every slot
//!   populated, for measuring indexed access against link-walk distance.
//! - [`full_queue`]: a circular queue driven to capacity, for measuring
//!   steady-state eviction pushes.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use plinth::{CircularQueue, SegmentedList};

/// Segment size used by the benches: 16 × u64 = 128 bytes, two cache lines.
pub const SEGMENT_SIZE: usize = 16;

/// Queue capacity used by the benches.
pub const QUEUE_CAPACITY: usize = 64;

/// Build a list of `segments` chained segments with every slot populated.
pub fn deep_list(segments: usize) -> SegmentedList<u64, { SEGMENT_SIZE }> {
    let mut list: SegmentedList<u64, { SEGMENT_SIZE }> = SegmentedList::new();
    for (i, slot) in list.front_mut().as_mut_slice().iter_mut().enumerate() {
        *slot = i as u64;
    }
    for s in 1..segments {
        let segment = list.push_back_segment();
        for (i, slot) in segment.as_mut_slice().iter_mut().enumerate() {
            *slot = (s * SEGMENT_SIZE + i) as u64;
        }
    }
    list
}

/// Build a queue filled to capacity with ascending values.
pub fn full_queue() -> CircularQueue<u64, { QUEUE_CAPACITY }> {
    let mut queue: CircularQueue<u64, { QUEUE_CAPACITY }> =
        CircularQueue::new(0).expect("capacity is non-zero");
    for v in 1..QUEUE_CAPACITY as u64 {
        queue.push_back(v);
    }
    queue
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deep_list_shape() {
        let list = deep_list(8);
        assert_eq!(list.segment_count(), 8);
        assert_eq!(list.len(), 8 * SEGMENT_SIZE);
        assert_eq!(list[0], 0);
        assert_eq!(list[8 * SEGMENT_SIZE - 1], (8 * SEGMENT_SIZE - 1) as u64);
    }

    #[test]
    fn full_queue_shape() {
        let queue = full_queue();
        assert_eq!(queue.len(), QUEUE_CAPACITY);
        assert!(queue.is_full());
        assert_eq!(*queue.front(), 0);
        assert_eq!(*queue.back(), (QUEUE_CAPACITY - 1) as u64);
    }
}
