//! First-in first-out buffer used by batching appenders

use std::collections::VecDeque;

/// Strict FIFO queue: `pull` returns items in `push` order and yields
/// `None` when empty.
#[derive(Debug, Clone)]
pub struct FifoBuffer<T> {
    items: VecDeque<T>,
}

impl<T> FifoBuffer<T> {
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    /// Append at the tail and return the new length
    pub fn push(&mut self, item: T) -> usize {
        self.items.push_back(item);
        self.items.len()
    }

    /// Remove from the head
    pub fn pull(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    /// Pull up to `max` items from the head
    pub fn drain_up_to(&mut self, max: usize) -> Vec<T> {
        let count = max.min(self.items.len());
        self.items.drain(..count).collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> Default for FifoBuffer<T> {
    fn default() -> Self {
        Self::new()
    }
}
