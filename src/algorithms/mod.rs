mod heapify;

pub use heapify::{build_heap, is_heap, sift_down, sift_up};
