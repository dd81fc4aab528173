/*!
# Generalized Sets

Abstraction over set data structures so that traversals can choose between
dense bitsets (graphs, lock combinations) and hash sets (sparse implicit state spaces such as word ladders).
*/

use std::hash::{BuildHasher, Hash};
use std::collections::HashSet;

use num::ToPrimitive;
use stream_bitset::{PrimIndex, bitset::BitSetImpl};

/// Minimalist trait for a set-like collection.
pub trait Set<T> {
    /// Inserts `value` into the set.
    /// Returns `true` if the element was already present.
    fn insert(&mut self, value: T) -> bool;

    /// Removes `value` from the set.
    /// Returns `true` if the element was present.
    fn remove(&mut self, value: &T) -> bool;

    /// Returns `true` if the set contains `value`.
    fn contains(&self, value: &T) -> bool;

    /// Clears all elements from the set.
    fn clear(&mut self);

    /// Returns the number of elements in the set.
    fn len(&self) -> usize;

    /// Returns `true` if the set is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T, S> Set<T> for HashSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
    fn insert(&mut self, value: T) -> bool {
        !HashSet::insert(self, value)
    }

    fn remove(&mut self, value: &T) -> bool {
        HashSet::remove(self, value)
    }

    fn contains(&self, value: &T) -> bool {
        HashSet::contains(self, value)
    }

    fn clear(&mut self) {
        HashSet::clear(self);
    }

    fn len(&self) -> usize {
        HashSet::len(self)
    }
}

impl<I> Set<I> for BitSetImpl<I>
where
    I: PrimIndex,
{
    fn insert(&mut self, value: I) -> bool {
        self.set_bit(value)
    }

    fn remove(&mut self, value: &I) -> bool {
        self.clear_bit(*value)
    }

    fn contains(&self, value: &I) -> bool {
        self.get_bit(*value)
    }

    fn clear(&mut self) {
        self.clear_all();
    }

    fn len(&self) -> usize {
        self.cardinality().to_usize().unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::NodeBitSet;
    use fxhash::FxHashSet;

    fn exercise<S: Set<u32>>(mut set: S) {
        assert!(set.is_empty());
        assert!(!set.insert(3));
        assert!(set.insert(3));
        assert!(!set.insert(7));
        assert_eq!(set.len(), 2);
        assert!(set.contains(&7));
        assert!(set.remove(&7));
        assert!(!set.remove(&7));
        set.clear();
        assert!(set.is_empty());
    }

    #[test]
    fn bitset_and_hashset_agree() {
        exercise(NodeBitSet::new(10));
        exercise(FxHashSet::<u32>::default());
    }
}
