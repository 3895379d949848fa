// SPDX-License-Identifier: MPL-2.0
//! Ring buffer for diagnostic event storage.
//!
//! Memory-bounded: once full, every push evicts the oldest entry and counts
//! it as overwritten, so an exported report can say how much history is
//! missing.

use std::collections::VecDeque;

/// A generic ring buffer with fixed capacity, oldest entry first.
///
/// # Example
///
/// ```
/// use admin_feedback::diagnostics::CircularBuffer;
///
/// let mut buffer = CircularBuffer::new(2);
/// buffer.push(1);
/// buffer.push(2);
/// assert_eq!(buffer.push(3), Some(1));
///
/// let items: Vec<_> = buffer.iter().copied().collect();
/// assert_eq!(items, vec![2, 3]);
/// assert_eq!(buffer.overwritten(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct CircularBuffer<T> {
    data: VecDeque<T>,
    capacity: usize,
    overwritten: u64,
}

impl<T> CircularBuffer<T> {
    /// Creates a buffer holding at most `capacity` items (at least one).
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            data: VecDeque::with_capacity(capacity),
            capacity,
            overwritten: 0,
        }
    }

    /// Pushes an item, returning the evicted oldest item if the buffer was full.
    pub fn push(&mut self, item: T) -> Option<T> {
        let evicted = if self.data.len() >= self.capacity {
            self.overwritten += 1;
            self.data.pop_front()
        } else {
            None
        };
        self.data.push_back(item);
        evicted
    }

    /// Returns an iterator over the items, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of items evicted by overflow since creation or the last clear.
    #[must_use]
    pub fn overwritten(&self) -> u64 {
        self.overwritten
    }

    pub fn clear(&mut self) {
        self.data.clear();
        self.overwritten = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_retrieve_in_order() {
        let mut buffer = CircularBuffer::new(5);

        buffer.push(1);
        buffer.push(2);
        buffer.push(3);

        let items: Vec<_> = buffer.iter().copied().collect();
        assert_eq!(items, vec![1, 2, 3]);
        assert_eq!(buffer.overwritten(), 0);
    }

    #[test]
    fn overflow_evicts_oldest() {
        let mut buffer = CircularBuffer::new(3);

        for i in 1..=3 {
            assert_eq!(buffer.push(i), None);
        }
        assert_eq!(buffer.push(4), Some(1));
        assert_eq!(buffer.push(5), Some(2));

        let items: Vec<_> = buffer.iter().copied().collect();
        assert_eq!(items, vec![3, 4, 5]);
        assert_eq!(buffer.len(), 3);
        assert_eq!(buffer.overwritten(), 2);
    }

    #[test]
    fn zero_capacity_is_raised_to_one() {
        let mut buffer = CircularBuffer::new(0);
        buffer.push("a");
        buffer.push("b");

        assert_eq!(buffer.capacity(), 1);
        assert_eq!(buffer.iter().copied().collect::<Vec<_>>(), vec!["b"]);
    }

    #[test]
    fn clear_resets_contents_and_counter() {
        let mut buffer = CircularBuffer::new(2);
        buffer.push(1);
        buffer.push(2);
        buffer.push(3);

        buffer.clear();

        assert!(buffer.is_empty());
        assert_eq!(buffer.overwritten(), 0);
        assert_eq!(buffer.capacity(), 2);
    }
}
