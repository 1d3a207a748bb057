use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum HeapError {
    #[error("Heap capacity must be positive")]
    InvalidCapacity,

    #[error("Could not allocate a buffer for {capacity} elements")]
    AllocationFailure { capacity: usize },

    #[error("Heap is full: capacity {capacity} exhausted")]
    CapacityExhausted { capacity: usize },

    #[error("Heap is empty")]
    EmptyHeap,
}
