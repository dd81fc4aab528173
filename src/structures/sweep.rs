//! Sweep lines over ordered event maps, and difference arrays for batched range updates.

use std::{collections::BTreeMap, ops::RangeBounds};

use tracing::trace;

use super::resolve_range;
use crate::{Error, NumNodes, Result, error::check_label};

/// Key points `(x, height)` of the outline formed by `buildings` given as `(left, right, height)` (LC 218).
///
/// A key point is emitted wherever the maximum active height changes; points at the same `x` are merged
/// and the last point always has height `0`.
///
/// # Examples
/// ```
/// use dsakit::structures::skyline;
///
/// let buildings = [(2, 9, 10), (3, 7, 15), (5, 12, 12), (15, 20, 10), (19, 24, 8)];
/// assert_eq!(
///     skyline(&buildings),
///     vec![(2, 10), (3, 15), (7, 12), (12, 0), (15, 10), (20, 8), (24, 0)]
/// );
/// ```
pub fn skyline(buildings: &[(i64, i64, i64)]) -> Vec<(i64, i64)> {
    // starts as negative heights so that at equal x they come first, higher ones first
    let mut events: Vec<(i64, i64)> = buildings
        .iter()
        .flat_map(|&(left, right, height)| [(left, -height), (right, height)])
        .collect();
    events.sort_unstable();

    // multiset of active heights
    let mut active: BTreeMap<i64, usize> = BTreeMap::new();
    let mut current = 0;
    let mut points: Vec<(i64, i64)> = Vec::new();

    for (x, h) in events {
        if h < 0 {
            *active.entry(-h).or_default() += 1;
        } else if let Some(count) = active.get_mut(&h) {
            *count -= 1;
            if *count == 0 {
                active.remove(&h);
            }
        }

        let top = active.last_key_value().map_or(0, |(&height, _)| height);
        if top == current {
            continue;
        }
        current = top;

        match points.last_mut() {
            Some(last) if last.0 == x => last.1 = top,
            _ => points.push((x, top)),
        }
    }

    trace!(buildings = buildings.len(), points = points.len(), "skyline");
    points
}

/// Bookings of half-open intervals, tracking the largest number of simultaneous bookings (LC 732)
///
/// # Examples
/// ```
/// use dsakit::structures::CalendarThree;
///
/// let mut calendar = CalendarThree::new();
/// assert_eq!(calendar.book(10, 20), 1);
/// assert_eq!(calendar.book(50, 60), 1);
/// assert_eq!(calendar.book(10, 40), 2);
/// assert_eq!(calendar.book(5, 15), 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CalendarThree {
    deltas: BTreeMap<i64, i64>,
}

impl CalendarThree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Books `[start, end)` and returns the maximum overlap of all bookings so far
    pub fn book(&mut self, start: i64, end: i64) -> usize {
        *self.deltas.entry(start).or_default() += 1;
        *self.deltas.entry(end).or_default() -= 1;

        self.deltas
            .values()
            .scan(0, |ongoing, &delta| {
                *ongoing += delta;
                Some(*ongoing)
            })
            .max()
            .unwrap_or(0) as usize
    }
}

/// Intersections of two lists of closed intervals, each sorted and pairwise disjoint (LC 986).
///
/// # Examples
/// ```
/// use dsakit::structures::interval_intersections;
///
/// let first = [(0, 2), (5, 10), (13, 23), (24, 25)];
/// let second = [(1, 5), (8, 12), (15, 24), (25, 26)];
/// assert_eq!(
///     interval_intersections(&first, &second),
///     vec![(1, 2), (5, 5), (8, 10), (15, 23), (24, 24), (25, 25)]
/// );
/// ```
pub fn interval_intersections(first: &[(i64, i64)], second: &[(i64, i64)]) -> Vec<(i64, i64)> {
    let (mut i, mut j) = (0, 0);
    let mut result = Vec::new();

    while let (Some(&(a_start, a_end)), Some(&(b_start, b_end))) = (first.get(i), second.get(j)) {
        let start = a_start.max(b_start);
        let end = a_end.min(b_end);
        if start <= end {
            result.push((start, end));
        }

        // the interval ending first cannot meet anything further
        if a_end < b_end {
            i += 1;
        } else {
            j += 1;
        }
    }

    result
}

/// Batches range additions on an array of `len` zeros; values are materialized by a single prefix sum.
#[derive(Debug, Clone)]
pub struct DifferenceArray {
    diff: Vec<i64>,
}

impl DifferenceArray {
    pub fn new(len: usize) -> Self {
        Self {
            diff: vec![0; len + 1],
        }
    }

    pub fn len(&self) -> usize {
        self.diff.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Adds `delta` to every position in `range`.
    /// ** Panics if `range` exceeds `len` **
    pub fn add(&mut self, range: impl RangeBounds<usize>, delta: i64) {
        let (start, end) = resolve_range(range, self.len());
        self.diff[start] += delta;
        self.diff[end] -= delta;
    }

    /// Current values of all positions
    pub fn values(&self) -> Vec<i64> {
        self.diff[..self.len()]
            .iter()
            .scan(0, |running, &delta| {
                *running += delta;
                Some(*running)
            })
            .collect()
    }
}

/// Applies inclusive updates `(start, end, inc)` to an array of `len` zeros (LC 370).
///
/// Fails with [`Error::Parse`] if an update is not within `0..len` or has `start > end`;
/// `line` is the 1-based position of the update.
///
/// # Examples
/// ```
/// use dsakit::structures::range_addition;
///
/// let updates = [(1, 3, 2), (2, 4, 3), (0, 2, -2)];
/// assert_eq!(range_addition(5, &updates).unwrap(), vec![-2, 0, 3, 5, 3]);
/// ```
pub fn range_addition(len: usize, updates: &[(usize, usize, i64)]) -> Result<Vec<i64>> {
    let mut array = DifferenceArray::new(len);
    for (i, &(start, end, inc)) in updates.iter().enumerate() {
        if start > end || end >= len {
            return Err(Error::Parse {
                line: i + 1,
                reason: format!("update {start}..={end} out of bounds for length {len}"),
            });
        }
        array.add(start..=end, inc);
    }
    Ok(array.values())
}

/// Total seats reserved on each of the flights `1..=n`, given bookings `(first, last, seats)`
/// covering the inclusive range of flights `first..=last` (LC 1109).
///
/// Fails if a flight label is outside `1..=n`. A booking with `first > last` reserves nothing.
///
/// # Examples
/// ```
/// use dsakit::structures::corporate_flight_bookings;
///
/// let bookings = [(1, 2, 10), (2, 3, 20), (2, 5, 25)];
/// assert_eq!(corporate_flight_bookings(&bookings, 5).unwrap(), vec![10, 55, 45, 25, 25]);
/// ```
pub fn corporate_flight_bookings(bookings: &[(u32, u32, i64)], n: NumNodes) -> Result<Vec<i64>> {
    let mut array = DifferenceArray::new(n as usize);
    for &(first, last, seats) in bookings {
        let first = check_label(first, n)? as usize;
        let last = check_label(last, n)? as usize;
        if first <= last {
            array.add(first..=last, seats);
        }
    }
    Ok(array.values())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outlines() {
        assert_eq!(skyline(&[(0, 2, 3), (2, 5, 3)]), vec![(0, 3), (5, 0)]);
        assert!(skyline(&[]).is_empty());
        assert_eq!(
            skyline(&[(1, 5, 3), (1, 5, 3), (1, 5, 3)]),
            vec![(1, 3), (5, 0)]
        );
        // a taller building ending where a lower one starts
        assert_eq!(
            skyline(&[(0, 3, 5), (3, 6, 2)]),
            vec![(0, 5), (3, 2), (6, 0)]
        );
        // a taller building starting where a lower one ends
        assert_eq!(
            skyline(&[(0, 3, 2), (3, 6, 5)]),
            vec![(0, 2), (3, 5), (6, 0)]
        );
    }

    #[test]
    fn calendar() {
        let mut calendar = CalendarThree::new();
        let answers = [(10, 20), (50, 60), (10, 40), (5, 15), (5, 10), (25, 55)]
            .map(|(s, e)| calendar.book(s, e));
        assert_eq!(answers, [1, 1, 2, 3, 3, 3]);
    }

    #[test]
    fn intersections() {
        assert!(interval_intersections(&[(1, 3), (5, 9)], &[]).is_empty());
        assert_eq!(interval_intersections(&[(1, 7)], &[(3, 10)]), vec![(3, 7)]);
        // touching endpoints intersect in a single point
        assert_eq!(interval_intersections(&[(1, 3)], &[(3, 4)]), vec![(3, 3)]);
        assert_eq!(
            interval_intersections(&[(0, 10)], &[(1, 2), (4, 5), (9, 12)]),
            vec![(1, 2), (4, 5), (9, 10)]
        );
        assert!(interval_intersections(&[(1, 2)], &[(3, 4)]).is_empty());
    }

    #[test]
    fn difference_array() {
        let mut array = DifferenceArray::new(4);
        assert_eq!(array.values(), vec![0; 4]);
        array.add(.., 1);
        array.add(1..3, 5);
        array.add(3.., -2);
        assert_eq!(array.values(), vec![1, 6, 6, -1]);
        assert_eq!(array.len(), 4);
        assert!(DifferenceArray::new(0).values().is_empty());
    }

    #[test]
    fn range_additions() {
        assert_eq!(
            range_addition(10, &[(2, 4, 6), (5, 6, 8), (1, 9, -4)]).unwrap(),
            vec![0, -4, 2, 2, 2, 4, 4, -4, -4, -4]
        );
        assert_eq!(range_addition(3, &[]).unwrap(), vec![0, 0, 0]);
        assert!(matches!(
            range_addition(3, &[(0, 1, 1), (1, 3, 1)]),
            Err(Error::Parse { line: 2, .. })
        ));
        assert!(range_addition(3, &[(2, 1, 1)]).is_err());
    }

    #[test]
    fn flight_bookings() {
        assert_eq!(
            corporate_flight_bookings(&[(1, 2, 10), (2, 2, 15)], 2).unwrap(),
            vec![10, 25]
        );
        assert_eq!(corporate_flight_bookings(&[], 3).unwrap(), vec![0, 0, 0]);
        assert!(matches!(
            corporate_flight_bookings(&[(1, 4, 10)], 3),
            Err(Error::NodeOutOfRange { node: 4, n: 3 })
        ));
        assert!(corporate_flight_bookings(&[(0, 1, 10)], 3).is_err());
    }
}
