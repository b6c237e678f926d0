use std::collections::LinkedList;

use super::{Stack, Value};

/// Contiguous-buffer stack: push/pop at the tail of a `Vec`.
#[derive(Debug, Default)]
pub struct VecStack {
    items: Vec<Value>,
}

impl VecStack {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Stack for VecStack {
    fn push(&mut self, value: Value) {
        self.items.push(value);
    }

    fn pop(&mut self) -> Option<Value> {
        self.items.pop()
    }

    fn top(&self) -> Option<Value> {
        self.items.last().copied()
    }

    fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Node-per-element stack: push/pop at the front of a doubly linked list.
#[derive(Debug, Default)]
pub struct LinkedStack {
    items: LinkedList<Value>,
}

impl LinkedStack {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Stack for LinkedStack {
    fn push(&mut self, value: Value) {
        self.items.push_front(value);
    }

    fn pop(&mut self) -> Option<Value> {
        self.items.pop_front()
    }

    fn top(&self) -> Option<Value> {
        self.items.front().copied()
    }

    fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exercise_lifo<S: Stack>(mut s: S) {
        assert!(s.is_empty());
        assert_eq!(s.pop(), None);
        assert_eq!(s.top(), None);

        s.push(1);
        s.push(2);
        s.push(3);
        assert!(!s.is_empty());
        assert_eq!(s.top(), Some(3));
        assert_eq!(s.pop(), Some(3));
        assert_eq!(s.pop(), Some(2));
        assert_eq!(s.pop(), Some(1));
        assert!(s.is_empty());
    }

    #[test]
    fn vec_stack_is_lifo() {
        exercise_lifo(VecStack::new());
    }

    #[test]
    fn linked_stack_is_lifo() {
        exercise_lifo(LinkedStack::new());
    }
}
