use crate::utils::{last_internal, left, parent, right};
use std::cmp::Ordering;

/// Move the element at `index` toward the root while its parent is
/// strictly greater. Returns the slot where the element came to rest.
pub fn sift_up<T, F>(heap: &mut [T], mut index: usize, order: F) -> usize
where
    F: Fn(&T, &T) -> Ordering,
{
    while index > 0 {
        let p = parent(index);
        if order(&heap[p], &heap[index]) != Ordering::Greater {
            break;
        }
        heap.swap(index, p);
        index = p;
    }
    index
}

/**
 * Restore the heap property for the subtree rooted at `index`, assuming
 * both child subtrees already satisfy it.
 *
 * A child only displaces the current best if it is strictly less, so on
 * ties the parent stays put and the left child wins over the right.
 * Returns the slot where the element came to rest.
 */
pub fn sift_down<T, F>(heap: &mut [T], mut index: usize, order: F) -> usize
where
    F: Fn(&T, &T) -> Ordering,
{
    let size = heap.len();
    loop {
        let mut smallest = index;
        let l = left(index);
        let r = right(index);

        if l < size && order(&heap[l], &heap[smallest]) == Ordering::Less {
            smallest = l;
        }
        if r < size && order(&heap[r], &heap[smallest]) == Ordering::Less {
            smallest = r;
        }
        if smallest == index {
            return index;
        }
        heap.swap(index, smallest);
        index = smallest;
    }
}

/// Floyd's O(n) build: sift down every internal node, last one first.
pub fn build_heap<T, F>(heap: &mut [T], order: F)
where
    F: Fn(&T, &T) -> Ordering,
{
    if let Some(last) = last_internal(heap.len()) {
        for index in (0..=last).rev() {
            sift_down(heap, index, &order);
        }
    }
}

/// Check that no element is strictly less than its parent.
pub fn is_heap<T, F>(heap: &[T], order: F) -> bool
where
    F: Fn(&T, &T) -> Ordering,
{
    (1..heap.len()).all(|i| order(&heap[parent(i)], &heap[i]) != Ordering::Greater)
}
