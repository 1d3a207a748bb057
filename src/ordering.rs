use std::cmp::Ordering;

/// Ascending order for anything with a total order.
pub fn natural_order<T: Ord>(a: &T, b: &T) -> Ordering {
    a.cmp(b)
}

/**
 * Ascending order for floating point values.
 *
 * NaN compares equal to everything, so a heap holding NaNs has no
 * meaningful minimum. Callers should filter them out first.
 */
pub fn float_order<T: PartialOrd>(a: &T, b: &T) -> Ordering {
    a.partial_cmp(b).unwrap_or(Ordering::Equal)
}
