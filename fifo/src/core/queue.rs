//! First-in-first-out queue owned by a single REPL session.

use std::collections::VecDeque;

use tracing::debug;

/// Unbounded FIFO queue.
///
/// Elements leave in exactly the order they arrived. Reading from an empty
/// queue is routine: `dequeue` and `peek` return `None`, leave the queue
/// untouched, and emit a debug trace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Queue<T> {
    items: VecDeque<T>,
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Queue<T> {
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    /// Append `value` at the tail.
    pub fn enqueue(&mut self, value: T) {
        self.items.push_back(value);
    }

    /// Remove and return the head, or `None` when empty.
    pub fn dequeue(&mut self) -> Option<T> {
        let head = self.items.pop_front();
        if head.is_none() {
            debug!("dequeue from empty queue");
        }
        head
    }

    /// Borrow the head without removing it, or `None` when empty.
    pub fn peek(&self) -> Option<&T> {
        let head = self.items.front();
        if head.is_none() {
            debug!("peek from empty queue");
        }
        head
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn size(&self) -> usize {
        self.items.len()
    }

    /// Iterate front to back.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }
}
