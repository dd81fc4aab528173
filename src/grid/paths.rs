//! Distances on grids: multi-source BFS, shortest paths with obstacle elimination and minimum effort paths.

use std::{cmp::Reverse, collections::BinaryHeap};

use tracing::{debug, trace};

use super::*;
use crate::Weight;

impl Grid<u8> {
    /// Minutes until no fresh orange is left, or `None` if some fresh orange can never rot (LC 994).
    ///
    /// Cells are `0` (empty), `1` (fresh) or `2` (rotten); every minute, rotten oranges
    /// infect their fresh orthogonal neighbors.
    ///
    /// # Examples
    /// ```
    /// use dsakit::grid::Grid;
    ///
    /// let grid = Grid::<u8>::try_from_rows(vec![vec![2, 1, 1], vec![1, 1, 0], vec![0, 1, 1]]).unwrap();
    /// assert_eq!(grid.oranges_rotting(), Some(4));
    /// ```
    pub fn oranges_rotting(&self) -> Option<usize> {
        let graph = GridGraph::undirected(self, |a, b| self[a] != 0 && self[b] != 0);
        let dist = graph.distances_from(self.positions().filter(|&pos| self[pos] == 2));

        self.iter()
            .filter(|&(_, &cell)| cell == 1)
            .try_fold(0, |minutes, (pos, _)| Some(minutes.max(dist[pos]?)))
    }
}

impl Grid<bool> {
    /// Number of cells on a shortest 8-connected path of free cells from the top-left to the
    /// bottom-right corner, where `true` marks a blocked cell (LC 1091).
    /// Returns `None` if no such path exists.
    ///
    /// # Examples
    /// ```
    /// use dsakit::grid::Grid;
    ///
    /// let grid: Grid<char> = "000\n110\n110".parse().unwrap();
    /// assert_eq!(grid.map(|&c| c == '1').shortest_path_binary_matrix(), Some(4));
    /// ```
    pub fn shortest_path_binary_matrix(&self) -> Option<usize> {
        let start = GridPos::default();
        let target = GridPos::new(self.rows().checked_sub(1)?, self.cols().checked_sub(1)?);
        if self[start] || self[target] {
            return None;
        }

        let graph = GridGraph::undirected(self, |a, b| !self[a] && !self[b]).with_diagonals();
        graph.distances_from([start])[target].map(|hops| hops + 1)
    }

    /// Largest Manhattan distance from a water cell (`false`) to its closest land cell (`true`),
    /// or `None` if the grid contains no land or no water (LC 1162).
    pub fn max_distance_from_land(&self) -> Option<usize> {
        let graph = GridGraph::undirected(self, |_, _| true);
        let dist = graph.distances_from(self.positions().filter(|&pos| self[pos]));

        self.iter()
            .filter(|&(_, &land)| !land)
            .filter_map(|(pos, _)| dist[pos])
            .max()
    }

    /// Distance of every cell to the closest `false` cell (LC 542); `None` if there is none.
    ///
    /// # Examples
    /// ```
    /// use dsakit::grid::Grid;
    ///
    /// let grid: Grid<char> = "000\n010\n111".parse().unwrap();
    /// let dist = grid.map(|&c| c == '1').nearest_zero_distances();
    /// assert_eq!(dist.row(2), &[Some(1), Some(2), Some(1)]);
    /// ```
    pub fn nearest_zero_distances(&self) -> Grid<Option<usize>> {
        let graph = GridGraph::undirected(self, |_, _| true);
        graph.distances_from(self.positions().filter(|&pos| !self[pos]))
    }

    /// Fewest steps from the top-left to the bottom-right corner when up to `k` obstacle cells
    /// (`true`) may be removed on the way, or `None` if that is impossible (LC 1293).
    ///
    /// A blocked start cell costs one removal as well. An empty grid has no path.
    /// A cell is only revisited if it is reached with strictly more removals left than before.
    ///
    /// # Examples
    /// ```
    /// use dsakit::grid::Grid;
    ///
    /// let grid: Grid<char> = "000\n110\n000\n011\n000".parse().unwrap();
    /// let grid = grid.map(|&c| c == '1');
    /// assert_eq!(grid.shortest_path_with_eliminations(1), Some(6));
    /// assert_eq!(grid.shortest_path_with_eliminations(0), Some(10));
    /// ```
    pub fn shortest_path_with_eliminations(&self, k: usize) -> Option<usize> {
        if self.is_empty() {
            return None;
        }

        let start = GridPos::default();
        let manhattan = self.rows() + self.cols() - 2;
        if k >= manhattan + self[start] as usize {
            // a monotone path passes `manhattan` cells besides the start
            return Some(manhattan);
        }

        let target = GridPos::new(self.rows() - 1, self.cols() - 1);

        // most removals left on arrival at each cell
        let mut best: Grid<Option<usize>> = Grid::new(self.rows(), self.cols(), None);
        let left = k.checked_sub(self[start] as usize)?;
        best[start] = Some(left);

        let mut frontier = vec![(start, left)];
        let mut steps = 0;
        let mut states = 1usize;
        while !frontier.is_empty() {
            steps += 1;
            let mut next_frontier = Vec::new();
            for (pos, left) in frontier {
                for next in self.neighbors4(pos) {
                    let Some(rem) = left.checked_sub(self[next] as usize) else {
                        continue;
                    };
                    if next == target {
                        debug!(steps, states, "reached target");
                        return Some(steps);
                    }
                    if best[next].is_some_and(|b| b >= rem) {
                        continue;
                    }
                    best[next] = Some(rem);
                    next_frontier.push((next, rem));
                    states += 1;
                }
            }
            trace!(steps, frontier = next_frontier.len(), "expanded layer");
            frontier = next_frontier;
        }

        debug!(states, "target unreachable");
        None
    }
}

impl Grid<Weight> {
    /// Smallest possible maximum absolute height difference between consecutive cells on a
    /// 4-connected path from the top-left to the bottom-right corner (LC 1631).
    ///
    /// # Examples
    /// ```
    /// use dsakit::grid::Grid;
    ///
    /// let heights = Grid::<i64>::try_from_rows(vec![vec![1, 2, 2], vec![3, 8, 2], vec![5, 3, 5]]).unwrap();
    /// assert_eq!(heights.minimum_effort_path(), 2);
    /// ```
    pub fn minimum_effort_path(&self) -> Weight {
        if self.is_empty() {
            return 0;
        }
        let start = GridPos::default();
        let target = GridPos::new(self.rows() - 1, self.cols() - 1);

        let mut effort = Grid::new(self.rows(), self.cols(), Weight::MAX);
        effort[start] = 0;
        let mut heap = BinaryHeap::from([Reverse((0, self.node_of(start)))]);

        while let Some(Reverse((current, u))) = heap.pop() {
            let pos = self.pos_of(u);
            if current > effort[pos] {
                continue;
            }
            if pos == target {
                return current;
            }

            for next in self.neighbors4(pos) {
                let candidate = current.max((self[next] - self[pos]).abs());
                if candidate < effort[next] {
                    effort[next] = candidate;
                    heap.push(Reverse((candidate, self.node_of(next))));
                }
            }
        }

        effort[target]
    }
}
