/*!
# Fenwick Trees

A [`FenwickTree`] (binary indexed tree) supports point updates and prefix sums in `O(log n)`.
The API is 0-indexed; internally entry `i` covers the `i & -i` values ending at position `i` of a 1-indexed array.

The counting problems below compress their values into dense ranks via [`Compression`]
and count previously seen ranks with a tree of `usize`.
*/

use std::ops::{AddAssign, RangeBounds};

use num::Num;

use super::resolve_range;
use crate::utils::Compression;

/// Binary indexed tree over `len` values, all initially zero
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FenwickTree<T> {
    tree: Vec<T>,
}

#[inline]
fn lowbit(i: usize) -> usize {
    i & i.wrapping_neg()
}

impl<T> FenwickTree<T>
where
    T: Num + Copy + AddAssign,
{
    pub fn new(len: usize) -> Self {
        Self {
            tree: vec![T::zero(); len + 1],
        }
    }

    /// Builds the tree over `values` in linear time
    ///
    /// # Examples
    /// ```
    /// use dsakit::structures::FenwickTree;
    ///
    /// let tree = FenwickTree::from_slice(&[3, 1, 4, 1, 5]);
    /// assert_eq!(tree.prefix_sum(3), 8);
    /// assert_eq!(tree.range_sum(1..=3), 6);
    /// ```
    pub fn from_slice(values: &[T]) -> Self {
        let n = values.len();
        let mut tree = Vec::with_capacity(n + 1);
        tree.push(T::zero());
        tree.extend_from_slice(values);

        for i in 1..=n {
            let parent = i + lowbit(i);
            if parent <= n {
                let carry = tree[i];
                tree[parent] += carry;
            }
        }

        Self { tree }
    }

    /// Number of values
    pub fn len(&self) -> usize {
        self.tree.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Adds `delta` to the value at `index`.
    /// ** Panics if `index >= self.len()` **
    pub fn add(&mut self, index: usize, delta: T) {
        assert!(index < self.len(), "index {index} out of bounds");
        let mut i = index + 1;
        while i < self.tree.len() {
            self.tree[i] += delta;
            i += lowbit(i);
        }
    }

    /// Sum of the values in `[0, end)`.
    /// ** Panics if `end > self.len()` **
    pub fn prefix_sum(&self, end: usize) -> T {
        assert!(end <= self.len(), "end {end} out of bounds");
        let mut sum = T::zero();
        let mut i = end;
        while i > 0 {
            sum += self.tree[i];
            i -= lowbit(i);
        }
        sum
    }

    /// Sum of the values within `range`
    pub fn range_sum(&self, range: impl RangeBounds<usize>) -> T {
        let (start, end) = resolve_range(range, self.len());
        self.prefix_sum(end) - self.prefix_sum(start)
    }

    /// Smallest `end` with `prefix_sum(end) >= target`, or `None` if the total is smaller than `target`.
    /// Only meaningful if all values are non-negative.
    ///
    /// # Examples
    /// ```
    /// use dsakit::structures::FenwickTree;
    ///
    /// let tree = FenwickTree::from_slice(&[2, 0, 3, 1]);
    /// assert_eq!(tree.lower_bound(0), Some(0));
    /// assert_eq!(tree.lower_bound(3), Some(3));
    /// assert_eq!(tree.lower_bound(6), Some(4));
    /// assert_eq!(tree.lower_bound(7), None);
    /// ```
    pub fn lower_bound(&self, target: T) -> Option<usize>
    where
        T: PartialOrd,
    {
        if target <= T::zero() {
            return Some(0);
        }

        let n = self.len();
        let mut pos = 0;
        let mut remaining = target;
        let mut step = if n == 0 { 0 } else { 1 << n.ilog2() };
        while step > 0 {
            if pos + step <= n && self.tree[pos + step] < remaining {
                pos += step;
                remaining = remaining - self.tree[pos];
            }
            step >>= 1;
        }

        // prefix_sum(pos) < target <= prefix_sum(pos + 1)
        (pos < n).then_some(pos + 1)
    }
}

/// For every element, the number of smaller elements to its right (LC 315)
///
/// # Examples
/// ```
/// use dsakit::structures::count_smaller_after_self;
///
/// assert_eq!(count_smaller_after_self(&[5, 2, 6, 1]), vec![2, 1, 1, 0]);
/// ```
pub fn count_smaller_after_self(nums: &[i64]) -> Vec<usize> {
    let ranks = Compression::new(nums.iter().copied());
    let mut seen = FenwickTree::<usize>::new(ranks.len());

    let mut counts = vec![0; nums.len()];
    for (i, &x) in nums.iter().enumerate().rev() {
        let rank = ranks.rank(x);
        counts[i] = seen.prefix_sum(rank);
        seen.add(rank, 1);
    }
    counts
}

const COST_MODULUS: u64 = 1_000_000_007;

/// Total cost of inserting `instructions` one by one into a sorted container, where each insertion
/// costs the smaller of the number of strictly smaller and strictly larger elements already present.
/// The result is taken modulo `1_000_000_007` (LC 1649).
///
/// # Examples
/// ```
/// use dsakit::structures::create_sorted_array_cost;
///
/// assert_eq!(create_sorted_array_cost(&[1, 5, 6, 2]), 1);
/// assert_eq!(create_sorted_array_cost(&[1, 3, 3, 3, 2, 4, 2, 1, 2]), 4);
/// ```
pub fn create_sorted_array_cost(instructions: &[i64]) -> u64 {
    let ranks = Compression::new(instructions.iter().copied());
    let mut seen = FenwickTree::<usize>::new(ranks.len());

    let mut cost = 0u64;
    for (inserted, &x) in instructions.iter().enumerate() {
        let rank = ranks.rank(x);
        let less = seen.prefix_sum(rank);
        let greater = inserted - seen.prefix_sum(rank + 1);
        cost = (cost + less.min(greater) as u64) % COST_MODULUS;
        seen.add(rank, 1);
    }
    cost
}

/// Number of pairs `i < j` with `nums[i] > 2 * nums[j]` (LC 493)
///
/// # Examples
/// ```
/// use dsakit::structures::reverse_pairs;
///
/// assert_eq!(reverse_pairs(&[1, 3, 2, 3, 1]), 2);
/// assert_eq!(reverse_pairs(&[2, 4, 3, 5, 1]), 3);
/// ```
pub fn reverse_pairs(nums: &[i32]) -> u64 {
    let ranks = Compression::new(nums.iter().map(|&x| x as i64));
    let mut seen = FenwickTree::<usize>::new(ranks.len());

    let mut pairs = 0u64;
    for (j, &x) in nums.iter().enumerate() {
        let threshold = 2 * x as i64;
        let not_greater = seen.prefix_sum(ranks.count_less_or_equal(threshold));
        pairs += (j - not_greater) as u64;
        seen.add(ranks.rank(x as i64), 1);
    }
    pairs
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn matches_naive_sums() {
        let rng = &mut Pcg64Mcg::seed_from_u64(11);
        for n in [0usize, 1, 2, 7, 16, 33] {
            let mut values = (0..n).map(|_| rng.random_range(-50i64..50)).collect_vec();
            let mut built = FenwickTree::from_slice(&values);
            let mut incremental = FenwickTree::new(n);
            for (i, &x) in values.iter().enumerate() {
                incremental.add(i, x);
            }
            assert_eq!(built, incremental);

            for _ in 0..3 * n {
                let i = rng.random_range(0..n);
                let delta = rng.random_range(-20..20);
                values[i] += delta;
                built.add(i, delta);

                let a = rng.random_range(0..=n);
                let b = rng.random_range(a..=n);
                assert_eq!(built.range_sum(a..b), values[a..b].iter().sum::<i64>());
                assert_eq!(built.prefix_sum(b), values[..b].iter().sum::<i64>());
            }
        }
    }

    #[test]
    fn lower_bound_matches_scan() {
        let rng = &mut Pcg64Mcg::seed_from_u64(12);
        let values = (0..45).map(|_| rng.random_range(0u64..4)).collect_vec();
        let tree = FenwickTree::from_slice(&values);
        let total: u64 = values.iter().sum();

        for target in 0..=total + 1 {
            let expected = (0..=values.len()).find(|&end| tree.prefix_sum(end) >= target);
            assert_eq!(tree.lower_bound(target), expected, "target {target}");
        }

        assert_eq!(FenwickTree::<u64>::new(0).lower_bound(1), None);
    }

    #[test]
    #[should_panic]
    fn add_out_of_bounds() {
        FenwickTree::<i32>::new(3).add(3, 1);
    }

    #[test]
    fn counting() {
        assert_eq!(count_smaller_after_self(&[-1]), vec![0]);
        assert_eq!(count_smaller_after_self(&[-1, -1]), vec![0, 0]);
        assert!(count_smaller_after_self(&[]).is_empty());

        assert_eq!(create_sorted_array_cost(&[1, 2, 3, 6, 5, 4]), 3);
        assert_eq!(create_sorted_array_cost(&[]), 0);

        assert_eq!(reverse_pairs(&[]), 0);
        assert_eq!(
            reverse_pairs(&[i32::MAX, i32::MAX, i32::MIN / 2, -1]),
            4
        );
    }

    #[test]
    fn counting_matches_naive() {
        let rng = &mut Pcg64Mcg::seed_from_u64(13);
        let nums = (0..60).map(|_| rng.random_range(-30i32..30)).collect_vec();

        let smaller = (0..nums.len())
            .map(|i| nums[i + 1..].iter().filter(|&&y| y < nums[i]).count())
            .collect_vec();
        let wide = nums.iter().map(|&x| x as i64).collect_vec();
        assert_eq!(count_smaller_after_self(&wide), smaller);

        let pairs = nums
            .iter()
            .tuple_combinations()
            .filter(|&(&a, &b)| a as i64 > 2 * b as i64)
            .count() as u64;
        assert_eq!(reverse_pairs(&nums), pairs);
    }
}
