/*!
# Utilities

Provides a variety of utility traits/structs such as
- [`GeometricSkips`](self::geometric::GeometricSkips): the skip sampler behind [`G(n,p)`](crate::gens::Gnp) graphs,
- an abstraction over [`Set`]s, so searches can track visited nodes in bitsets or hash sets,
- [`UnionFind`]: a disjoint-set forest used by the connectivity and equation-style algorithms,
- coordinate compression for the range-query structures.

Apart from `Set` and `UnionFind`, you probably do not need to interact with this module directly.
*/

use std::{collections::HashSet, hash::RandomState};

use fxhash::{FxBuildHasher, FxHashSet};
use num::{One, Zero};

pub mod geometric;
pub mod set;
pub mod union_find;

pub use set::Set;
pub use union_find::UnionFind;

use stream_bitset::{PrimIndex, bitset::BitSetImpl};

/// Helper trait for probalities
pub trait Probability {
    /// Returns *true* if the probality is valid (ie. between `0` and `1`)
    fn is_valid_probility(&self) -> bool;
}

impl<P> Probability for P
where
    P: Zero + One + PartialOrd,
{
    fn is_valid_probility(&self) -> bool {
        Self::zero().le(self) && Self::one().ge(self)
    }
}

/// Helper trait for datastructure that can be initialized with capacity.
/// Can be interpreted as reserved space or guaranteed used space.
pub trait FromCapacity: Sized {
    /// Create a new instance with a given capacity
    fn from_capacity(capacity: usize) -> Self {
        Self::from_total_used_capacity(capacity, capacity)
    }

    /// Creates a new instance from the total capacity (ie. max-value for example) and the actual
    /// capacity that will be used (space-wise).
    fn from_total_used_capacity(total: usize, used: usize) -> Self;
}

impl<I> FromCapacity for BitSetImpl<I>
where
    I: PrimIndex,
{
    fn from_total_used_capacity(total: usize, _used: usize) -> Self {
        // Using `BitSetImpl<I>` as a Set requires intializing to the maximum element
        Self::new(I::from_usize(total).unwrap())
    }
}

impl<T> FromCapacity for HashSet<T, RandomState> {
    fn from_total_used_capacity(_total: usize, used: usize) -> Self {
        Self::with_capacity(used)
    }
}

impl<T> FromCapacity for FxHashSet<T> {
    fn from_total_used_capacity(_total: usize, used: usize) -> Self {
        Self::with_capacity_and_hasher(used, FxBuildHasher::default())
    }
}

/// Maps values onto dense ranks `0..k` preserving their order.
///
/// Fenwick- and segment-tree algorithms index by rank instead of value, which keeps the trees small
/// even for values up to `10^9`.
#[derive(Debug, Clone)]
pub struct Compression<T> {
    sorted: Vec<T>,
}

impl<T: Ord + Copy> Compression<T> {
    /// Collects, sorts and deduplicates all values
    pub fn new<I: IntoIterator<Item = T>>(values: I) -> Self {
        let mut sorted: Vec<T> = values.into_iter().collect();
        sorted.sort_unstable();
        sorted.dedup();
        Self { sorted }
    }

    /// Number of distinct values
    pub fn len(&self) -> usize {
        self.sorted.len()
    }

    /// Returns *true* if no values were compressed
    pub fn is_empty(&self) -> bool {
        self.sorted.is_empty()
    }

    /// Rank of a value that was part of the input.
    /// ** Panics if `value` was not compressed **
    pub fn rank(&self, value: T) -> usize {
        self.sorted
            .binary_search(&value)
            .unwrap_or_else(|_| panic!("value was not part of the compression"))
    }

    /// Number of compressed values strictly smaller than `value` (need not be part of the input)
    pub fn count_less(&self, value: T) -> usize {
        self.sorted.partition_point(|x| *x < value)
    }

    /// Number of compressed values smaller or equal than `value` (need not be part of the input)
    pub fn count_less_or_equal(&self, value: T) -> usize {
        self.sorted.partition_point(|x| *x <= value)
    }
}
