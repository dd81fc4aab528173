//! Range-query data structures and the algorithms built on them.

pub mod fenwick;
pub mod segment_tree;
pub mod sweep;

pub use fenwick::*;
pub use segment_tree::*;
pub use sweep::*;

use std::ops::{Bound, RangeBounds};

/// Resolves `range` into a half-open `[start, end)` within `0..len`.
/// Panics if the range is decreasing or exceeds `len`.
pub(crate) fn resolve_range(range: impl RangeBounds<usize>, len: usize) -> (usize, usize) {
    let start = match range.start_bound() {
        Bound::Included(&s) => s,
        Bound::Excluded(&s) => s + 1,
        Bound::Unbounded => 0,
    };
    let end = match range.end_bound() {
        Bound::Included(&e) => e + 1,
        Bound::Excluded(&e) => e,
        Bound::Unbounded => len,
    };
    assert!(
        start <= end && end <= len,
        "range {start}..{end} out of bounds for length {len}"
    );
    (start, end)
}
