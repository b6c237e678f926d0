//! Capability contracts for the structures under test, plus the concrete
//! variants the drivers compare.
//!
//! The harness only ever talks to these traits. Removal/peek accessors return
//! `Option` rather than panicking; the drivers guard every such call with
//! `is_empty`, so a `None` from a guarded call means the structure itself is
//! broken and the run aborts.

pub mod pqueue;
pub mod queue;
pub mod stack;

pub use pqueue::{BinaryHeapPq, SortedLinkedPq, SortedVecPq};
pub use queue::{LinkedQueue, VecQueue};
pub use stack::{LinkedStack, VecStack};

/// Value type carried by every structure under test.
pub type Value = i64;

/// LIFO contract.
pub trait Stack {
    fn push(&mut self, value: Value);
    fn pop(&mut self) -> Option<Value>;
    fn top(&self) -> Option<Value>;
    fn is_empty(&self) -> bool;
}

/// FIFO contract.
pub trait Queue {
    fn enqueue(&mut self, value: Value);
    fn dequeue(&mut self) -> Option<Value>;
    fn front(&self) -> Option<Value>;
    fn is_empty(&self) -> bool;
}

/// Min-priority contract. `dequeue` removes the value with the smallest
/// priority; ordering among equal priorities is a per-variant policy,
/// documented on each implementation.
pub trait PriorityQueue {
    fn enqueue(&mut self, priority: u32, value: Value);
    fn dequeue(&mut self) -> Option<Value>;
    fn front(&self) -> Option<Value>;
    fn is_empty(&self) -> bool;
}
