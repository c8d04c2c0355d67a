// SPDX-License-Identifier: MPL-2.0
//! Circular buffer implementation for diagnostic event storage.
//!
//! This module provides a memory-bounded ring buffer that automatically
//! evicts the oldest entries when capacity is reached.

use std::collections::VecDeque;

/// Default number of diagnostic events retained in memory.
pub const DEFAULT_BUFFER_CAPACITY: usize = 500;

/// A generic circular buffer with fixed capacity.
///
/// When the buffer is full, pushing a new element evicts the oldest one.
/// Elements are stored in chronological order (oldest first).
#[derive(Debug, Clone)]
pub struct CircularBuffer<T> {
    data: VecDeque<T>,
    capacity: usize,
}

impl<T> CircularBuffer<T> {
    /// Creates a new circular buffer with the specified capacity.
    ///
    /// A capacity of zero is bumped to one so the buffer can always hold
    /// the most recent event.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            data: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Pushes an element to the buffer, evicting the oldest if at capacity.
    pub fn push(&mut self, item: T) {
        if self.data.len() >= self.capacity {
            self.data.pop_front();
        }
        self.data.push_back(item);
    }

    /// Returns an iterator over the elements in chronological order (oldest first).
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

    pub fn clear(&mut self) {
        self.data.clear();
    }
}

impl<T> Default for CircularBuffer<T> {
    fn default() -> Self {
        Self::new(DEFAULT_BUFFER_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_stores_in_chronological_order() {
        let mut buffer = CircularBuffer::new(10);
        buffer.push(1);
        buffer.push(2);
        buffer.push(3);

        let items: Vec<_> = buffer.iter().copied().collect();
        assert_eq!(items, vec![1, 2, 3]);
        assert_eq!(buffer.len(), 3);
    }

    #[test]
    fn push_evicts_oldest_at_capacity() {
        let mut buffer = CircularBuffer::new(3);
        for i in 0..5 {
            buffer.push(i);
        }

        let items: Vec<_> = buffer.iter().copied().collect();
        assert_eq!(items, vec![2, 3, 4]);
        assert_eq!(buffer.len(), 3);
    }

    #[test]
    fn zero_capacity_is_bumped_to_one() {
        let mut buffer = CircularBuffer::new(0);
        buffer.push("a");
        buffer.push("b");

        assert_eq!(buffer.capacity(), 1);
        let items: Vec<_> = buffer.iter().copied().collect();
        assert_eq!(items, vec!["b"]);
    }

    #[test]
    fn clear_empties_the_buffer() {
        let mut buffer = CircularBuffer::new(4);
        buffer.push(1);
        buffer.clear();
        assert!(buffer.is_empty());
    }
}
