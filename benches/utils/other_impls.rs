use std::cmp::Reverse;
use std::collections::BinaryHeap;

#[allow(dead_code)]
pub fn std_push_pop(values: &[i64]) -> i64 {
    let mut heap = BinaryHeap::with_capacity(values.len());
    for v in values {
        heap.push(Reverse(*v));
    }
    let mut checksum = 0;
    while let Some(Reverse(v)) = heap.pop() {
        checksum ^= v;
    }
    checksum
}

#[allow(dead_code)]
pub fn std_from_vec(values: &[i64]) -> BinaryHeap<Reverse<i64>> {
    values.iter().copied().map(Reverse).collect()
}
