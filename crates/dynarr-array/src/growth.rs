//! Capacity growth policy.
//!
//! The array grows only when an insertion finds `len == capacity`. The
//! first allocation reserves [`INITIAL_CAPACITY`] slot; every later one
//! multiplies the current capacity by [`GROWTH_FACTOR`]. Capacities observed
//! at reallocation boundaries are therefore `1, 2, 4, 8, ...`.

/// Capacity reserved by the first growth of an empty, unallocated array.
pub const INITIAL_CAPACITY: usize = 1;

/// Multiplier applied to a non-zero capacity on each reallocation.
pub const GROWTH_FACTOR: usize = 2;

/// Capacity to reallocate to when a buffer of `current` slots is full.
///
/// Returns `None` if the doubled capacity does not fit in `usize`.
pub fn grown_capacity(current: usize) -> Option<usize> {
    if current == 0 {
        Some(INITIAL_CAPACITY)
    } else {
        current.checked_mul(GROWTH_FACTOR)
    }
}
