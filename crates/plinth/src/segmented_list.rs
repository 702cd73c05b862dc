//! A singly-owned chain of fixed-size array segments.
//!
//! [`SegmentedList`] trades the pointer-chasing of a linked list against
//! the reallocation moves of a growable array: storage grows one
//! [`Segment`] at a time, and elements never move once written. Indexed
//! access costs O(n/S) link walks.
//!
//! This is the one module in the crate that uses `unsafe`: chain nodes
//! are managed through raw pointers so that `back()` and
//! `push_back_segment()` stay O(1) over a forward-linked chain. Every
//! node is allocated once via `Box::leak` and reclaimed exactly once via
//! `Box::from_raw`; every `unsafe` block carries a `SAFETY` comment tying
//! it to the chain invariants.

#![allow(unsafe_code)]

use std::marker::PhantomData;
use std::ops::{Index, IndexMut};
use std::ptr::NonNull;

use crate::error::ListError;

/// A fixed-size array block owned by a [`SegmentedList`].
///
/// A segment holds exactly `S` elements for its whole lifetime. Slots are
/// default-initialised when the segment is allocated; there is no notion
/// of a "used" sub-length distinct from `S` — every slot is live.
#[derive(Debug)]
pub struct Segment<T, const S: usize> {
    slots: [T; S],
}

impl<T: Default, const S: usize> Segment<T, S> {
    fn new() -> Self {
        Self {
            slots: std::array::from_fn(|_| T::default()),
        }
    }
}

impl<T, const S: usize> Segment<T, S> {
    /// Number of slots. Always exactly `S`.
    pub fn len(&self) -> usize {
        S
    }

    /// Always returns `false` — a segment's slots are all live.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The segment's slots as a contiguous slice.
    pub fn as_slice(&self) -> &[T] {
        &self.slots
    }

    /// The segment's slots as a contiguous mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.slots
    }
}

impl<T, const S: usize> Index<usize> for Segment<T, S> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.slots[index]
    }
}

impl<T, const S: usize> IndexMut<usize> for Segment<T, S> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.slots[index]
    }
}

/// A chain link: one segment plus the forward link to its successor.
///
/// Each node is owned by exactly one place — the list head for the first
/// node, the predecessor's `next` for every other. There is no backward
/// link, which is why tail removal must walk the chain.
struct Node<T, const S: usize> {
    segment: Segment<T, S>,
    next: Option<NonNull<Node<T, S>>>,
}

impl<T: Default, const S: usize> Node<T, S> {
    /// Heap-allocate a fresh node and hand its ownership to the chain as
    /// a raw pointer. Reclaimed exactly once via `Box::from_raw`.
    fn alloc(next: Option<NonNull<Node<T, S>>>) -> NonNull<Node<T, S>> {
        let node = Box::new(Self {
            segment: Segment::new(),
            next,
        });
        NonNull::from(Box::leak(node))
    }
}

/// A segmented array list: near-contiguous storage with stable references.
///
/// The list always holds at least one segment, so `len()` is always at
/// least `S` and `front()`/`back()` never fail. Growth and shrinkage
/// happen one whole segment at a time, at the two ends only — there is no
/// single-element push and no arbitrary-position insertion.
///
/// Popping the head is O(1); popping the tail is O(segment_count) because
/// nodes hold only a forward link. Pick `S` so that
/// `size_of::<T>() * S` approximates a cache-line multiple to balance
/// link-walk overhead against per-segment allocation.
///
/// Cloning a chain of segments is expensive and rarely wanted, so the
/// list deliberately does not implement `Clone`; transfer it by move.
///
/// # Examples
///
/// ```
/// use plinth::SegmentedList;
///
/// let mut list: SegmentedList<u32, 4> = SegmentedList::new();
/// assert_eq!(list.len(), 4);
/// assert_eq!(list.segment_count(), 1);
///
/// // Grow by one segment and populate it.
/// list.push_back_segment().as_mut_slice().copy_from_slice(&[1, 2, 3, 4]);
/// assert_eq!(list.len(), 8);
/// assert_eq!(list[5], 2);
/// ```
pub struct SegmentedList<T, const S: usize> {
    /// First node of the chain. Live for the list's whole lifetime.
    head: NonNull<Node<T, S>>,
    /// Last node of the chain; equals `head` when there is one segment.
    tail: NonNull<Node<T, S>>,
    segments: usize,
    /// The list owns its nodes and their `T`s.
    marker: PhantomData<Box<Node<T, S>>>,
}

// SAFETY: the list is the sole owner of every node; moving it across
// threads moves the whole chain with it.
unsafe impl<T: Send, const S: usize> Send for SegmentedList<T, S> {}

// SAFETY: shared references to the list only permit reads of the chain.
unsafe impl<T: Sync, const S: usize> Sync for SegmentedList<T, S> {}

impl<T: Default, const S: usize> SegmentedList<T, S> {
    /// Create a list with a single default-initialised segment.
    ///
    /// # Panics
    ///
    /// Panics if `S == 0`: the index arithmetic divides by `S`, and a
    /// zero-size segment can hold nothing.
    pub fn new() -> Self {
        assert!(S > 0, "segment size must be at least 1, got {S}");
        let head = Node::alloc(None);
        Self {
            head,
            tail: head,
            segments: 1,
            marker: PhantomData,
        }
    }

    /// Allocate a new segment and link it in front of the current head.
    ///
    /// O(1). Existing elements keep their segments but shift up by `S`
    /// logical indices. Returns the new segment so the caller can
    /// populate it.
    pub fn push_front_segment(&mut self) -> &mut Segment<T, S> {
        let node = Node::alloc(Some(self.head));
        self.head = node;
        self.segments += 1;
        // SAFETY: `node` was just allocated and the list now owns it;
        // `&mut self` makes the access exclusive.
        unsafe { &mut (*node.as_ptr()).segment }
    }

    /// Allocate a new segment and link it behind the current tail.
    ///
    /// O(1). Returns the new segment so the caller can populate it.
    pub fn push_back_segment(&mut self) -> &mut Segment<T, S> {
        let node = Node::alloc(None);
        // SAFETY: `tail` points at the live last node of the chain;
        // `&mut self` makes writing its `next` link exclusive.
        unsafe { (*self.tail.as_ptr()).next = Some(node) };
        self.tail = node;
        self.segments += 1;
        // SAFETY: `node` was just allocated and the list now owns it.
        unsafe { &mut (*node.as_ptr()).segment }
    }
}

impl<T, const S: usize> SegmentedList<T, S> {
    /// Total element count: `segment_count() * S`, always a multiple of S.
    pub fn len(&self) -> usize {
        self.segments * S
    }

    /// Always returns `false` — the list holds at least one segment.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Number of segments currently chained.
    pub fn segment_count(&self) -> usize {
        self.segments
    }

    /// The element at logical index `index`.
    ///
    /// Walks `index / S` links from the head, then reads slot `index % S`.
    /// Returns `Err(ListError::IndexOutOfRange)` when `index >= len()`.
    pub fn get(&self, index: usize) -> Result<&T, ListError> {
        if index >= self.len() {
            return Err(ListError::IndexOutOfRange {
                index,
                length: self.len(),
            });
        }
        let node = self.node_at(index / S);
        // SAFETY: the node is live (the walk is bounded by the segment
        // count) and `&self` permits shared access.
        Ok(unsafe { &(*node.as_ptr()).segment.slots[index % S] })
    }

    /// Mutable access to the element at logical index `index`.
    ///
    /// Same cost and range contract as [`get`](Self::get).
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, ListError> {
        if index >= self.len() {
            return Err(ListError::IndexOutOfRange {
                index,
                length: self.len(),
            });
        }
        let node = self.node_at(index / S);
        // SAFETY: as for `get`, with exclusivity from `&mut self`.
        Ok(unsafe { &mut (*node.as_ptr()).segment.slots[index % S] })
    }

    /// The head segment. O(1).
    pub fn front(&self) -> &Segment<T, S> {
        // SAFETY: `head` is live for the list's whole lifetime; `&self`
        // permits shared access.
        unsafe { &(*self.head.as_ptr()).segment }
    }

    /// The head segment, mutably. O(1).
    pub fn front_mut(&mut self) -> &mut Segment<T, S> {
        // SAFETY: as for `front`, with exclusivity from `&mut self`.
        unsafe { &mut (*self.head.as_ptr()).segment }
    }

    /// The tail segment. O(1).
    pub fn back(&self) -> &Segment<T, S> {
        // SAFETY: `tail` always points at the live last node; `&self`
        // permits shared access.
        unsafe { &(*self.tail.as_ptr()).segment }
    }

    /// The tail segment, mutably. O(1).
    pub fn back_mut(&mut self) -> &mut Segment<T, S> {
        // SAFETY: as for `back`, with exclusivity from `&mut self`.
        unsafe { &mut (*self.tail.as_ptr()).segment }
    }

    /// Detach the head segment and return it by value, advancing the head
    /// to the next segment. O(1).
    ///
    /// Returns `Err(ListError::LastSegment)` when only one segment
    /// remains: removing it would leave the list without a head.
    pub fn pop_front_segment(&mut self) -> Result<Segment<T, S>, ListError> {
        if self.segments == 1 {
            return Err(ListError::LastSegment);
        }
        // SAFETY: `head` was allocated by this list and is reclaimed here
        // exactly once; the list forgets it immediately below.
        let node = *unsafe { Box::from_raw(self.head.as_ptr()) };
        self.head = node
            .next
            .expect("a list with two or more segments has a successor");
        self.segments -= 1;
        Ok(node.segment)
    }

    /// Detach the tail segment and return it by value.
    ///
    /// O(segment_count): nodes hold only a forward link, so finding the
    /// new tail means walking from the head. This asymmetry with the O(1)
    /// [`pop_front_segment`](Self::pop_front_segment) is a direct
    /// consequence of the singly-linked design.
    ///
    /// Returns `Err(ListError::LastSegment)` when only one segment
    /// remains.
    pub fn pop_back_segment(&mut self) -> Result<Segment<T, S>, ListError> {
        if self.segments == 1 {
            return Err(ListError::LastSegment);
        }
        let new_tail = self.node_at(self.segments - 2);
        // SAFETY: `new_tail` is the live node before the tail, so its
        // `next` is the tail; the tail was allocated by this list and is
        // reclaimed here exactly once.
        let node = unsafe {
            let old = (*new_tail.as_ptr())
                .next
                .take()
                .expect("the node before the tail has a successor");
            *Box::from_raw(old.as_ptr())
        };
        self.tail = new_tail;
        self.segments -= 1;
        Ok(node.segment)
    }

    /// Walk `walks` forward links from the head.
    fn node_at(&self, walks: usize) -> NonNull<Node<T, S>> {
        let mut node = self.head;
        for _ in 0..walks {
            // SAFETY: callers bound `walks` by the segment count, so every
            // node on the path is live and linked.
            node = unsafe {
                (*node.as_ptr())
                    .next
                    .expect("walk count stays within the chain")
            };
        }
        node
    }
}

impl<T: Default, const S: usize> Default for SegmentedList<T, S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const S: usize> Index<usize> for SegmentedList<T, S> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Ok(value) => value,
            Err(_) => panic!(
                "index {index} out of range for list of length {}",
                self.len()
            ),
        }
    }
}

impl<T, const S: usize> IndexMut<usize> for SegmentedList<T, S> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        let length = self.len();
        match self.get_mut(index) {
            Ok(value) => value,
            Err(_) => panic!("index {index} out of range for list of length {length}"),
        }
    }
}

impl<T, const S: usize> Drop for SegmentedList<T, S> {
    fn drop(&mut self) {
        // Release the chain iteratively, head to tail; the drop glue of a
        // node never recurses into its successor.
        let mut next = Some(self.head);
        while let Some(node) = next {
            // SAFETY: every node was allocated by this list and appears in
            // the chain exactly once, so each is reclaimed exactly once.
            let node = unsafe { Box::from_raw(node.as_ptr()) };
            next = node.next;
        }
    }
}
