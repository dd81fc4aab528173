/*!
# Segment Trees

A [`SegmentTree`] stores values of a [`Monoid`] and answers folds over arbitrary ranges in `O(log n)`.

The tree is kept bottom-up in a flat array of size `2n`: leaves occupy `n..2n`, and every inner node `i`
holds the combination of its children `2i` and `2i + 1`. Queries keep separate left and right accumulators,
so the combine function need not be commutative.
*/

use std::{fmt::Debug, marker::PhantomData, ops::RangeBounds};

use num::{Bounded, Num};

use super::resolve_range;

/// An associative operation with an identity element
pub trait Monoid {
    type Value: Clone;

    fn identity() -> Self::Value;

    fn combine(a: &Self::Value, b: &Self::Value) -> Self::Value;
}

/// Addition
#[derive(Debug, Clone, Copy, Default)]
pub struct Sum<T>(PhantomData<T>);

/// Maximum, with `T::min_value()` as identity
#[derive(Debug, Clone, Copy, Default)]
pub struct Max<T>(PhantomData<T>);

/// Minimum, with `T::max_value()` as identity
#[derive(Debug, Clone, Copy, Default)]
pub struct Min<T>(PhantomData<T>);

impl<T: Num + Copy> Monoid for Sum<T> {
    type Value = T;

    fn identity() -> T {
        T::zero()
    }

    fn combine(a: &T, b: &T) -> T {
        *a + *b
    }
}

impl<T: Bounded + Ord + Copy> Monoid for Max<T> {
    type Value = T;

    fn identity() -> T {
        T::min_value()
    }

    fn combine(a: &T, b: &T) -> T {
        *a.max(b)
    }
}

impl<T: Bounded + Ord + Copy> Monoid for Min<T> {
    type Value = T;

    fn identity() -> T {
        T::max_value()
    }

    fn combine(a: &T, b: &T) -> T {
        *a.min(b)
    }
}

/// Point-assign, range-fold segment tree
pub struct SegmentTree<M: Monoid> {
    len: usize,
    tree: Vec<M::Value>,
}

impl<M: Monoid> Clone for SegmentTree<M> {
    fn clone(&self) -> Self {
        Self {
            len: self.len,
            tree: self.tree.clone(),
        }
    }
}

impl<M> Debug for SegmentTree<M>
where
    M: Monoid,
    M::Value: Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(&self.tree[self.len..]).finish()
    }
}

impl<M: Monoid> SegmentTree<M> {
    /// Creates a tree of `len` identity values
    pub fn new(len: usize) -> Self {
        Self {
            len,
            tree: vec![M::identity(); 2 * len],
        }
    }

    /// Builds the tree over `values` in linear time
    ///
    /// # Examples
    /// ```
    /// use dsakit::structures::*;
    ///
    /// let mut tree = SegmentTree::<Max<i32>>::from_slice(&[4, 1, 7, 3]);
    /// assert_eq!(tree.query(..), 7);
    /// assert_eq!(tree.query(0..2), 4);
    ///
    /// tree.update(2, 0);
    /// assert_eq!(tree.query(1..), 3);
    /// assert_eq!(tree.query(2..2), i32::MIN);
    /// ```
    pub fn from_slice(values: &[M::Value]) -> Self {
        let len = values.len();
        let mut tree = vec![M::identity(); len];
        tree.extend_from_slice(values);
        for i in (1..len).rev() {
            tree[i] = M::combine(&tree[2 * i], &tree[2 * i + 1]);
        }
        Self { len, tree }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Value at `index`
    pub fn get(&self, index: usize) -> &M::Value {
        assert!(index < self.len, "index {index} out of bounds");
        &self.tree[self.len + index]
    }

    /// Assigns `value` to `index`.
    /// ** Panics if `index >= self.len()` **
    pub fn update(&mut self, index: usize, value: M::Value) {
        assert!(index < self.len, "index {index} out of bounds");
        let mut i = self.len + index;
        self.tree[i] = value;
        while i > 1 {
            i /= 2;
            self.tree[i] = M::combine(&self.tree[2 * i], &self.tree[2 * i + 1]);
        }
    }

    /// Combination of all values within `range` in index order; the identity for an empty range
    pub fn query(&self, range: impl RangeBounds<usize>) -> M::Value {
        let (start, end) = resolve_range(range, self.len);
        let mut left = M::identity();
        let mut right = M::identity();

        let mut l = start + self.len;
        let mut r = end + self.len;
        while l < r {
            if l & 1 == 1 {
                left = M::combine(&left, &self.tree[l]);
                l += 1;
            }
            if r & 1 == 1 {
                r -= 1;
                right = M::combine(&self.tree[r], &right);
            }
            l /= 2;
            r /= 2;
        }

        M::combine(&left, &right)
    }
}

/// Point updates and inclusive range sums over an integer array (LC 307)
///
/// # Examples
/// ```
/// use dsakit::structures::RangeSumQuery;
///
/// let mut rsq = RangeSumQuery::new(&[1, 3, 5]);
/// assert_eq!(rsq.sum_range(0, 2), 9);
/// rsq.update(1, 2);
/// assert_eq!(rsq.sum_range(0, 2), 8);
/// ```
#[derive(Debug, Clone)]
pub struct RangeSumQuery {
    tree: SegmentTree<Sum<i64>>,
}

impl RangeSumQuery {
    pub fn new(nums: &[i64]) -> Self {
        Self {
            tree: SegmentTree::from_slice(nums),
        }
    }

    pub fn update(&mut self, index: usize, value: i64) {
        self.tree.update(index, value);
    }

    /// Sum of `nums[left..=right]`, or `0` if `left > right`
    pub fn sum_range(&self, left: usize, right: usize) -> i64 {
        if left > right {
            return 0;
        }
        self.tree.query(left..=right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    /// String concatenation, to catch queries combining out of order
    struct Concat;

    impl Monoid for Concat {
        type Value = String;

        fn identity() -> String {
            String::new()
        }

        fn combine(a: &String, b: &String) -> String {
            format!("{a}{b}")
        }
    }

    #[test]
    fn folds_match_naive() {
        let rng = &mut Pcg64Mcg::seed_from_u64(21);
        for n in [1usize, 2, 3, 5, 8, 13, 31] {
            let mut values = (0..n).map(|_| rng.random_range(-100i64..100)).collect_vec();
            let mut sums = SegmentTree::<Sum<i64>>::from_slice(&values);
            let mut maxs = SegmentTree::<Max<i64>>::from_slice(&values);
            let mut mins = SegmentTree::<Min<i64>>::from_slice(&values);

            for _ in 0..4 * n {
                let i = rng.random_range(0..n);
                let x = rng.random_range(-100..100);
                values[i] = x;
                sums.update(i, x);
                maxs.update(i, x);
                mins.update(i, x);

                let a = rng.random_range(0..=n);
                let b = rng.random_range(a..=n);
                let window = &values[a..b];
                assert_eq!(sums.query(a..b), window.iter().sum::<i64>());
                assert_eq!(
                    maxs.query(a..b),
                    window.iter().copied().max().unwrap_or(i64::MIN)
                );
                assert_eq!(
                    mins.query(a..b),
                    window.iter().copied().min().unwrap_or(i64::MAX)
                );
            }
        }
    }

    #[test]
    fn preserves_order() {
        let letters = "abcdefg".chars().map(String::from).collect_vec();
        let mut tree = SegmentTree::<Concat>::from_slice(&letters);
        assert_eq!(tree.query(..), "abcdefg");
        assert_eq!(tree.query(1..6), "bcdef");
        assert_eq!(tree.query(3..=3), "d");

        tree.update(4, "X".to_string());
        assert_eq!(tree.query(2..7), "cdXfg");
        assert_eq!(tree.get(4), "X");
    }

    #[test]
    fn empty() {
        let tree = SegmentTree::<Sum<i32>>::new(0);
        assert!(tree.is_empty());
        assert_eq!(tree.query(..), 0);
    }

    #[test]
    #[should_panic]
    fn query_out_of_bounds() {
        SegmentTree::<Sum<i32>>::new(3).query(1..4);
    }

    #[test]
    fn range_sum_query() {
        let mut rsq = RangeSumQuery::new(&[-2, 0, 3, -5, 2, -1]);
        assert_eq!(rsq.sum_range(0, 2), 1);
        assert_eq!(rsq.sum_range(2, 5), -1);
        assert_eq!(rsq.sum_range(0, 5), -3);
        assert_eq!(rsq.sum_range(3, 2), 0);
        rsq.update(3, 5);
        assert_eq!(rsq.sum_range(0, 5), 7);
    }
}
