//! A fixed-capacity, never-empty circular queue.

use std::ops::{Index, IndexMut};

use crate::error::QueueError;

/// A ring buffer over a fixed inline array, always holding 1..=N elements.
///
/// The queue is constructed with one seed element and can never become
/// empty: `start` and `end` always point at real elements, and pops at
/// minimum length are no-ops. A push into a full queue evicts the element
/// at the *opposite* end — the defining contract of the ring. A push into
/// a non-full queue never overwrites anything live.
///
/// Storage is embedded in the value, so the queue performs no allocation
/// and has no allocation failure mode. Logical length is derived from the
/// two indices, never stored redundantly.
///
/// There are deliberately no iterators; use [`get`](Self::get) or the
/// index operator, which are always relative to the current logical front.
///
/// # Examples
///
/// ```
/// use plinth::CircularQueue;
///
/// let mut q: CircularQueue<u32, 4> = CircularQueue::new(10).unwrap();
/// q.push_back(20);
/// q.push_back(30);
/// q.push_back(40);
/// assert_eq!(q.len(), 4);
///
/// // A push into the full queue evicts the front element.
/// q.push_back(50);
/// assert_eq!(*q.front(), 20);
/// assert_eq!(*q.back(), 50);
/// ```
#[derive(Clone, Debug)]
pub struct CircularQueue<T, const N: usize> {
    slots: [T; N],
    start: usize,
    end: usize,
}

impl<T: Clone, const N: usize> CircularQueue<T, N> {
    /// Create a queue holding the single seed element.
    ///
    /// The seed lands at slot 0 with `start == end == 0`; the remaining
    /// slots are filled with clones of it so that every slot is
    /// initialised. Returns `Err(QueueError::ZeroCapacity)` when `N == 0`
    /// — the wrap arithmetic needs at least one valid slot.
    pub fn new(seed: T) -> Result<Self, QueueError> {
        if N == 0 {
            return Err(QueueError::ZeroCapacity);
        }
        Ok(Self {
            slots: std::array::from_fn(|_| seed.clone()),
            start: 0,
            end: 0,
        })
    }

    /// Remove and return a copy of the front element.
    ///
    /// When `len() == 1` the single-element invariant takes precedence:
    /// the indices are untouched and the call returns the only element,
    /// idempotent under repetition.
    pub fn pop_front(&mut self) -> T {
        let value = self.slots[self.start].clone();
        if self.len() > 1 {
            self.start = Self::wrap_inc(self.start);
        }
        value
    }

    /// Remove and return a copy of the back element.
    ///
    /// Same minimum-length no-op behaviour as [`pop_front`](Self::pop_front).
    pub fn pop_back(&mut self) -> T {
        let value = self.slots[self.end].clone();
        if self.len() > 1 {
            self.end = Self::wrap_dec(self.end);
        }
        value
    }
}

impl<T, const N: usize> CircularQueue<T, N> {
    /// Number of elements currently held. Always in `[1, N]`.
    pub fn len(&self) -> usize {
        1 + (N + self.end - self.start) % N
    }

    /// Always returns `false` — the queue holds at least one element.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Whether the queue holds `N` elements, so the next push evicts.
    pub fn is_full(&self) -> bool {
        self.len() == N
    }

    /// The fixed capacity `N`.
    pub fn capacity(&self) -> usize {
        N
    }

    /// The front element. O(1).
    pub fn front(&self) -> &T {
        &self.slots[self.start]
    }

    /// The front element, mutably. O(1).
    pub fn front_mut(&mut self) -> &mut T {
        &mut self.slots[self.start]
    }

    /// The back element. O(1).
    pub fn back(&self) -> &T {
        &self.slots[self.end]
    }

    /// The back element, mutably. O(1).
    pub fn back_mut(&mut self) -> &mut T {
        &mut self.slots[self.end]
    }

    /// The element at logical index `index`, where 0 is the front.
    ///
    /// The physical slot is `(start + index) % N`, so indexing stays
    /// relative to the current front across pushes and pops. Returns
    /// `Err(QueueError::IndexOutOfRange)` when `index >= len()`.
    pub fn get(&self, index: usize) -> Result<&T, QueueError> {
        if index >= self.len() {
            return Err(QueueError::IndexOutOfRange {
                index,
                length: self.len(),
            });
        }
        Ok(&self.slots[(self.start + index) % N])
    }

    /// Mutable access to the element at logical index `index`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, QueueError> {
        if index >= self.len() {
            return Err(QueueError::IndexOutOfRange {
                index,
                length: self.len(),
            });
        }
        Ok(&mut self.slots[(self.start + index) % N])
    }

    /// Overwrite the element at logical index `index`.
    pub fn set(&mut self, index: usize, value: T) -> Result<(), QueueError> {
        *self.get_mut(index)? = value;
        Ok(())
    }

    /// Push an element at the front, evicting the back element when full.
    ///
    /// Decrements `start` (wrapping 0 to N−1). If the decremented `start`
    /// landed on `end`, the queue was at capacity: `end` is decremented
    /// too and the oldest back element is evicted. Returns a reference to
    /// the newly stored element.
    pub fn push_front(&mut self, elem: T) -> &mut T {
        self.start = Self::wrap_dec(self.start);
        if self.start == self.end {
            self.end = Self::wrap_dec(self.end);
        }
        self.slots[self.start] = elem;
        &mut self.slots[self.start]
    }

    /// Push an element at the back, evicting the front element when full.
    ///
    /// Symmetric to [`push_front`](Self::push_front) with increments.
    pub fn push_back(&mut self, elem: T) -> &mut T {
        self.end = Self::wrap_inc(self.end);
        if self.end == self.start {
            self.start = Self::wrap_inc(self.start);
        }
        self.slots[self.end] = elem;
        &mut self.slots[self.end]
    }

    fn wrap_inc(index: usize) -> usize {
        (index + 1) % N
    }

    fn wrap_dec(index: usize) -> usize {
        if index == 0 {
            N - 1
        } else {
            index - 1
        }
    }
}

impl<T, const N: usize> Index<usize> for CircularQueue<T, N> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Ok(value) => value,
            Err(_) => panic!(
                "index {index} out of range for queue of length {}",
                self.len()
            ),
        }
    }
}

impl<T, const N: usize> IndexMut<usize> for CircularQueue<T, N> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        let length = self.len();
        match self.get_mut(index) {
            Ok(value) => value,
            Err(_) => panic!("index {index} out of range for queue of length {length}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn logical<const N: usize>(q: &CircularQueue<u32, N>) -> Vec<u32> {
        (0..q.len()).map(|i| q[i]).collect()
    }

    // ── Construction ────────────────────────────────────────────

    #[test]
    fn new_queue_holds_the_seed() {
        let q: CircularQueue<u32, 4> = CircularQueue::new(10).unwrap();
        assert_eq!(q.len(), 1);
        assert_eq!(*q.front(), 10);
        assert_eq!(*q.back(), 10);
        assert_eq!(q.capacity(), 4);
        assert!(!q.is_empty());
        assert!(!q.is_full());
    }

    #[test]
    fn zero_capacity_is_rejected() {
        let result: Result<CircularQueue<u32, 0>, _> = CircularQueue::new(10);
        assert_eq!(result.unwrap_err(), QueueError::ZeroCapacity);
    }

    // ── Push ────────────────────────────────────────────────────

    #[test]
    fn push_back_fills_to_capacity() {
        let mut q: CircularQueue<u32, 4> = CircularQueue::new(10).unwrap();
        q.push_back(20);
        q.push_back(30);
        q.push_back(40);
        assert_eq!(q.len(), 4);
        assert!(q.is_full());
        assert_eq!(*q.front(), 10);
        assert_eq!(*q.back(), 40);
        assert_eq!(logical(&q), vec![10, 20, 30, 40]);
    }

    #[test]
    fn push_back_when_full_evicts_the_front() {
        let mut q: CircularQueue<u32, 4> = CircularQueue::new(10).unwrap();
        q.push_back(20);
        q.push_back(30);
        q.push_back(40);
        q.push_back(50);
        assert_eq!(q.len(), 4);
        assert_eq!(*q.front(), 20);
        assert_eq!(*q.back(), 50);
        assert_eq!(logical(&q), vec![20, 30, 40, 50]);
    }

    #[test]
    fn push_front_when_full_evicts_the_back() {
        let mut q: CircularQueue<u32, 3> = CircularQueue::new(1).unwrap();
        q.push_back(2);
        q.push_back(3);
        q.push_front(9);
        assert_eq!(q.len(), 3);
        assert_eq!(logical(&q), vec![9, 1, 2]);
    }

    #[test]
    fn push_below_capacity_overwrites_nothing_live() {
        let mut q: CircularQueue<u32, 4> = CircularQueue::new(1).unwrap();
        q.push_front(0);
        q.push_back(2);
        assert_eq!(q.len(), 3);
        assert_eq!(logical(&q), vec![0, 1, 2]);
    }

    #[test]
    fn push_returns_the_stored_element() {
        let mut q: CircularQueue<u32, 4> = CircularQueue::new(1).unwrap();
        *q.push_back(2) += 100;
        assert_eq!(*q.back(), 102);
        *q.push_front(7) += 10;
        assert_eq!(*q.front(), 17);
    }

    #[test]
    fn capacity_one_pushes_replace_the_element() {
        let mut q: CircularQueue<u32, 1> = CircularQueue::new(5).unwrap();
        q.push_back(6);
        assert_eq!(q.len(), 1);
        assert_eq!(*q.front(), 6);
        q.push_front(7);
        assert_eq!(q.len(), 1);
        assert_eq!(*q.back(), 7);
    }

    // ── Pop ─────────────────────────────────────────────────────

    #[test]
    fn pop_front_advances_the_start() {
        let mut q: CircularQueue<u32, 4> = CircularQueue::new(10).unwrap();
        q.push_back(20);
        q.push_back(30);
        assert_eq!(q.pop_front(), 10);
        assert_eq!(q.len(), 2);
        assert_eq!(*q.front(), 20);
    }

    #[test]
    fn pop_back_retreats_the_end() {
        let mut q: CircularQueue<u32, 4> = CircularQueue::new(10).unwrap();
        q.push_back(20);
        q.push_back(30);
        assert_eq!(q.pop_back(), 30);
        assert_eq!(q.len(), 2);
        assert_eq!(*q.back(), 20);
    }

    #[test]
    fn pop_at_minimum_length_is_idempotent() {
        let mut q: CircularQueue<u32, 4> = CircularQueue::new(10).unwrap();
        for _ in 0..3 {
            assert_eq!(q.pop_front(), 10);
            assert_eq!(q.len(), 1);
        }
        for _ in 0..3 {
            assert_eq!(q.pop_back(), 10);
            assert_eq!(q.len(), 1);
        }
        assert_eq!(*q.front(), 10);
        assert_eq!(*q.back(), 10);
    }

    // ── Indexing ────────────────────────────────────────────────

    #[test]
    fn indexing_is_relative_to_the_front() {
        let mut q: CircularQueue<u32, 3> = CircularQueue::new(1).unwrap();
        q.push_back(2);
        q.push_back(3);
        // Rotate: evict 1, front becomes 2.
        q.push_back(4);
        assert_eq!(q[0], 2);
        assert_eq!(q[1], 3);
        assert_eq!(q[2], 4);
        q.pop_front();
        assert_eq!(q[0], 3);
        assert_eq!(*q.front(), 3);
    }

    #[test]
    fn get_out_of_range_is_an_error() {
        let q: CircularQueue<u32, 4> = CircularQueue::new(10).unwrap();
        assert_eq!(
            q.get(1),
            Err(QueueError::IndexOutOfRange {
                index: 1,
                length: 1
            })
        );
    }

    #[test]
    fn set_overwrites_in_place() {
        let mut q: CircularQueue<u32, 4> = CircularQueue::new(1).unwrap();
        q.push_back(2);
        q.set(1, 99).unwrap();
        assert_eq!(q[1], 99);
        assert_eq!(
            q.set(2, 5),
            Err(QueueError::IndexOutOfRange {
                index: 2,
                length: 2
            })
        );
    }

    #[test]
    #[should_panic(expected = "index 3 out of range")]
    fn index_out_of_range_panics() {
        let q: CircularQueue<u32, 4> = CircularQueue::new(10).unwrap();
        let _ = q[3];
    }

    #[test]
    fn length_covers_wrapped_layouts() {
        // Drive start/end through every relative offset at capacity 4.
        let mut q: CircularQueue<u32, 4> = CircularQueue::new(0).unwrap();
        for step in 1..=12u32 {
            q.push_back(step);
            let expected = (1 + step as usize).min(4);
            assert_eq!(q.len(), expected);
            assert_eq!(*q.back(), step);
        }
    }

    #[cfg(not(miri))]
    mod proptests {
        use super::*;
        use proptest::prelude::*;
        use std::collections::VecDeque;

        #[derive(Clone, Debug)]
        enum Op {
            PushFront(u32),
            PushBack(u32),
            PopFront,
            PopBack,
        }

        fn op_strategy() -> impl Strategy<Value = Op> {
            prop_oneof![
                (0u32..1000).prop_map(Op::PushFront),
                (0u32..1000).prop_map(Op::PushBack),
                Just(Op::PopFront),
                Just(Op::PopBack),
            ]
        }

        /// Reference semantics: a deque capped at `cap`, never empty.
        fn apply_model(model: &mut VecDeque<u32>, op: &Op, cap: usize) {
            match op {
                Op::PushFront(v) => {
                    if model.len() == cap {
                        model.pop_back();
                    }
                    model.push_front(*v);
                }
                Op::PushBack(v) => {
                    if model.len() == cap {
                        model.pop_front();
                    }
                    model.push_back(*v);
                }
                Op::PopFront => {
                    if model.len() > 1 {
                        model.pop_front();
                    }
                }
                Op::PopBack => {
                    if model.len() > 1 {
                        model.pop_back();
                    }
                }
            }
        }

        proptest! {
            #[test]
            fn queue_matches_a_model_deque(
                seed in 0u32..1000,
                ops in proptest::collection::vec(op_strategy(), 1..100),
            ) {
                let mut q: CircularQueue<u32, 5> = CircularQueue::new(seed).unwrap();
                let mut model: VecDeque<u32> = VecDeque::from([seed]);

                for op in &ops {
                    match op {
                        Op::PushFront(v) => {
                            q.push_front(*v);
                        }
                        Op::PushBack(v) => {
                            q.push_back(*v);
                        }
                        Op::PopFront => {
                            let expected = *model.front().unwrap();
                            prop_assert_eq!(q.pop_front(), expected);
                        }
                        Op::PopBack => {
                            let expected = *model.back().unwrap();
                            prop_assert_eq!(q.pop_back(), expected);
                        }
                    }
                    apply_model(&mut model, op, 5);

                    prop_assert_eq!(q.len(), model.len());
                    prop_assert_eq!(*q.front(), *model.front().unwrap());
                    prop_assert_eq!(*q.back(), *model.back().unwrap());
                    for (i, &v) in model.iter().enumerate() {
                        prop_assert_eq!(q[i], v);
                    }
                }
            }

            #[test]
            fn length_always_within_bounds(
                ops in proptest::collection::vec(op_strategy(), 1..100),
            ) {
                let mut q: CircularQueue<u32, 3> = CircularQueue::new(0).unwrap();
                for op in &ops {
                    match op {
                        Op::PushFront(v) => {
                            q.push_front(*v);
                        }
                        Op::PushBack(v) => {
                            q.push_back(*v);
                        }
                        Op::PopFront => {
                            q.pop_front();
                        }
                        Op::PopBack => {
                            q.pop_back();
                        }
                    }
                    prop_assert!(q.len() >= 1 && q.len() <= 3);
                }
            }
        }
    }
}
