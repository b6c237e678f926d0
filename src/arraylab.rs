//! Fixed-size contiguous array primitive for the array-vs-growable-array lab.
//!
//! Deliberately the worst-case baseline: every front insertion or removal,
//! and every append batch, allocates a fresh buffer of the new size and
//! copies all retained elements. The growable side of the comparison is a
//! plain `Vec<i64>`; this type exists to make the allocate-and-copy cost
//! explicit rather than amortized.

use crate::structures::Value;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedArray {
    data: Box<[Value]>,
}

impl FixedArray {
    pub fn from_slice(values: &[Value]) -> Self {
        Self {
            data: values.to_vec().into_boxed_slice(),
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn get(&self, index: usize) -> Value {
        self.data[index]
    }

    pub fn first(&self) -> Option<Value> {
        self.data.first().copied()
    }

    pub fn as_slice(&self) -> &[Value] {
        &self.data
    }

    /// Insert one element at index 0: allocate a one-larger buffer and shift
    /// every existing element right.
    pub fn push_front(&mut self, value: Value) {
        let mut next = vec![0; self.data.len() + 1].into_boxed_slice();
        next[0] = value;
        next[1..].copy_from_slice(&self.data);
        self.data = next;
    }

    /// Remove the element at index 0: allocate a one-smaller buffer and shift
    /// every retained element left. No-op on an empty array.
    pub fn pop_front(&mut self) -> Option<Value> {
        let removed = self.first()?;
        let mut next = vec![0; self.data.len() - 1].into_boxed_slice();
        next.copy_from_slice(&self.data[1..]);
        self.data = next;
        Some(removed)
    }

    /// Append the sequence `0..count` at the tail via one enlarged buffer.
    pub fn append_sequential(&mut self, count: usize) {
        let old_len = self.data.len();
        let mut next = vec![0; old_len + count].into_boxed_slice();
        next[..old_len].copy_from_slice(&self.data);
        for (i, slot) in next[old_len..].iter_mut().enumerate() {
            *slot = i as Value;
        }
        self.data = next;
    }
}
