use clap::ValueEnum;

pub mod arraylab;
pub mod benches;
pub mod dataset;
pub mod harness;
pub mod schema;
pub mod structures;
pub mod trace;
pub mod workload;

/// Which family of structure-under-test variants to benchmark.
#[derive(Clone, Copy, Debug, Default, ValueEnum, PartialEq, Eq)]
pub enum StructureFamily {
    /// Run every variant (stacks, queues, priority queues).
    #[default]
    All,
    /// Array-backed and linked-list-backed stacks only.
    Stack,
    /// Array-backed and linked-list-backed queues only.
    Queue,
    /// Sorted-list and binary-heap priority queues only.
    Pq,
}
