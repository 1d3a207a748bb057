//! Implicit binary tree encoding: node `i` lives at slot `i` of the buffer.

/// Parent slot of `index`. Only meaningful for `index > 0`.
#[inline]
pub(crate) fn parent(index: usize) -> usize {
    (index - 1) >> 1
}

#[inline]
pub(crate) fn left(index: usize) -> usize {
    (index << 1) + 1
}

#[inline]
pub(crate) fn right(index: usize) -> usize {
    (index << 1) + 2
}

/// Index of the last slot that has at least one child, if any.
pub(crate) fn last_internal(size: usize) -> Option<usize> {
    if size < 2 {
        None
    } else {
        Some(size / 2 - 1)
    }
}
