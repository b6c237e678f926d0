use std::cmp::Ordering;
use std::collections::{BinaryHeap, LinkedList};

use super::{PriorityQueue, Value};

/// Sorted contiguous list: entries kept in ascending priority order, minimum
/// at index 0. Insert binary-searches for the slot, dequeue is `remove(0)`.
///
/// Tie-break: new entries go after existing equal priorities, so equal
/// priorities dequeue in insertion order (FIFO).
#[derive(Debug, Default)]
pub struct SortedVecPq {
    items: Vec<(u32, Value)>,
}

impl SortedVecPq {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PriorityQueue for SortedVecPq {
    fn enqueue(&mut self, priority: u32, value: Value) {
        let at = self.items.partition_point(|&(p, _)| p <= priority);
        self.items.insert(at, (priority, value));
    }

    fn dequeue(&mut self) -> Option<Value> {
        if self.items.is_empty() {
            None
        } else {
            Some(self.items.remove(0).1)
        }
    }

    fn front(&self) -> Option<Value> {
        self.items.first().map(|&(_, v)| v)
    }

    fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Sorted doubly linked list: linear scan to the insertion point, then
/// splice. Dequeue pops the front node.
///
/// Tie-break: insertion after equal priorities, FIFO like [`SortedVecPq`].
#[derive(Debug, Default)]
pub struct SortedLinkedPq {
    items: LinkedList<(u32, Value)>,
}

impl SortedLinkedPq {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PriorityQueue for SortedLinkedPq {
    fn enqueue(&mut self, priority: u32, value: Value) {
        let at = self
            .items
            .iter()
            .position(|&(p, _)| p > priority)
            .unwrap_or(self.items.len());
        let mut tail = self.items.split_off(at);
        self.items.push_back((priority, value));
        self.items.append(&mut tail);
    }

    fn dequeue(&mut self) -> Option<Value> {
        self.items.pop_front().map(|(_, v)| v)
    }

    fn front(&self) -> Option<Value> {
        self.items.front().map(|&(_, v)| v)
    }

    fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Min-entry for the std max-heap: ordering is on priority alone, reversed.
#[derive(Debug, Clone, Copy)]
struct HeapEntry {
    priority: u32,
    value: Value,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other.priority.cmp(&self.priority)
    }
}

/// Binary-heap priority queue over `std::collections::BinaryHeap`.
///
/// Tie-break: unspecified. Sift order decides which of several equal-priority
/// entries surfaces first; callers must not rely on any particular order.
#[derive(Debug, Default)]
pub struct BinaryHeapPq {
    items: BinaryHeap<HeapEntry>,
}

impl BinaryHeapPq {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PriorityQueue for BinaryHeapPq {
    fn enqueue(&mut self, priority: u32, value: Value) {
        self.items.push(HeapEntry { priority, value });
    }

    fn dequeue(&mut self) -> Option<Value> {
        self.items.pop().map(|e| e.value)
    }

    fn front(&self) -> Option<Value> {
        self.items.peek().map(|e| e.value)
    }

    fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
