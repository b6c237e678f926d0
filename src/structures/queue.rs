use std::collections::LinkedList;

use super::{Queue, Value};

/// Contiguous-buffer queue: enqueue at the tail, dequeue by `remove(0)`.
///
/// The O(n) head removal is the point of this variant. It is the shifting
/// array-list baseline the linked queue is compared against; do not replace
/// it with a ring buffer.
#[derive(Debug, Default)]
pub struct VecQueue {
    items: Vec<Value>,
}

impl VecQueue {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Queue for VecQueue {
    fn enqueue(&mut self, value: Value) {
        self.items.push(value);
    }

    fn dequeue(&mut self) -> Option<Value> {
        if self.items.is_empty() {
            None
        } else {
            Some(self.items.remove(0))
        }
    }

    fn front(&self) -> Option<Value> {
        self.items.first().copied()
    }

    fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Node-per-element queue: enqueue at the back, dequeue at the front.
#[derive(Debug, Default)]
pub struct LinkedQueue {
    items: LinkedList<Value>,
}

impl LinkedQueue {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Queue for LinkedQueue {
    fn enqueue(&mut self, value: Value) {
        self.items.push_back(value);
    }

    fn dequeue(&mut self) -> Option<Value> {
        self.items.pop_front()
    }

    fn front(&self) -> Option<Value> {
        self.items.front().copied()
    }

    fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
