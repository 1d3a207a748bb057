mod min_heap;
mod utils;

pub mod algorithms;
pub mod errors;
pub mod ordering;

pub use errors::HeapError;
pub use min_heap::MinHeap;
