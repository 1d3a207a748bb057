use crate::algorithms::{build_heap, sift_down, sift_up};
use crate::errors::HeapError;
use crate::ordering::natural_order;
use std::cmp::Ordering;
use std::fmt;

/**
 * A binary min-heap with a fixed capacity.
 *
 * Elements live in a contiguous buffer laid out as an implicit binary tree:
 * the children of slot `i` are at `2i + 1` and `2i + 2`. The buffer is
 * reserved up front for `capacity` elements and never grows; inserting into
 * a full heap fails instead.
 *
 * The ordering rule is supplied once at construction. The root is always an
 * element that no other element is strictly less than.
 */
pub struct MinHeap<T, F = fn(&T, &T) -> Ordering> {
    capacity: usize,
    // Live elements are exactly buffer[..buffer.len()].
    buffer: Vec<T>,
    order: F,
}

impl<T: Ord> MinHeap<T> {
    /// A heap ordered ascending by `T`'s own `Ord`.
    pub fn with_capacity(capacity: usize) -> Result<Self, HeapError> {
        Self::new(capacity, natural_order)
    }
}

impl<T, F> MinHeap<T, F>
where
    F: Fn(&T, &T) -> Ordering,
{
    pub fn new(capacity: usize, order: F) -> Result<Self, HeapError> {
        if capacity == 0 {
            return Err(HeapError::InvalidCapacity);
        }
        let mut buffer = Vec::new();
        buffer
            .try_reserve_exact(capacity)
            .map_err(|_| HeapError::AllocationFailure { capacity })?;

        Ok(MinHeap {
            capacity,
            buffer,
            order,
        })
    }

    /// Build a heap from arbitrarily ordered `items` in O(n).
    pub fn new_loaded(capacity: usize, items: Vec<T>, order: F) -> Result<Self, HeapError> {
        if capacity == 0 {
            return Err(HeapError::InvalidCapacity);
        }
        if items.len() > capacity {
            return Err(HeapError::CapacityExhausted { capacity });
        }
        let mut buffer = items;
        buffer
            .try_reserve_exact(capacity - buffer.len())
            .map_err(|_| HeapError::AllocationFailure { capacity })?;
        build_heap(&mut buffer, &order);

        Ok(MinHeap {
            capacity,
            buffer,
            order,
        })
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_full(&self) -> bool {
        self.buffer.len() >= self.capacity
    }

    pub fn peek(&self) -> Option<&T> {
        self.buffer.first()
    }

    /// The live elements, in heap (not sorted) order.
    pub fn as_slice(&self) -> &[T] {
        &self.buffer
    }

    pub fn insert(&mut self, element: T) -> Result<(), HeapError> {
        self.try_insert(element).map_err(|(_, err)| err)
    }

    /// Like `insert`, but a rejected element is handed back to the caller.
    pub fn try_insert(&mut self, element: T) -> Result<(), (T, HeapError)> {
        if self.is_full() {
            let capacity = self.capacity;
            return Err((element, HeapError::CapacityExhausted { capacity }));
        }

        // Never reallocates: the buffer was reserved for `capacity` elements.
        self.buffer.push(element);
        let index = self.buffer.len() - 1;
        sift_up(&mut self.buffer, index, &self.order);
        Ok(())
    }

    pub fn extract_min(&mut self) -> Result<T, HeapError> {
        if self.buffer.is_empty() {
            return Err(HeapError::EmptyHeap);
        }

        // The last element takes the root's slot, then sinks into place.
        let min = self.buffer.swap_remove(0);
        sift_down(&mut self.buffer, 0, &self.order);
        Ok(min)
    }

    /// Drop every element. The reserved buffer is kept.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Drain the heap in ascending order.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.buffer.len());
        while let Ok(min) = self.extract_min() {
            sorted.push(min);
        }
        sorted
    }
}

impl<T: fmt::Debug, F> fmt::Debug for MinHeap<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MinHeap")
            .field("capacity", &self.capacity)
            .field("buffer", &self.buffer)
            .finish()
    }
}
