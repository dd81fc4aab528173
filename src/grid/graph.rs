use std::marker::PhantomData;

use super::*;
use crate::{
    INVALID_NODE, NumNodes,
    algo::{Traversal, TraversalTree},
    ops::*,
};

/// View of a [`Grid`] as a graph on the cell indices (see [`Grid::node_of`]).
///
/// There is an edge from cell `a` to a neighboring cell `b` iff `step(a, b)` holds.
/// Graphs built with [`GridGraph::undirected`] promise a symmetric predicate and thus support
/// the algorithms for undirected graphs, such as [`crate::algo::Connectivity`].
pub struct GridGraph<'a, T, S, D = Directed> {
    grid: &'a Grid<T>,
    step: S,
    diagonal: bool,
    _dir: PhantomData<D>,
}

impl<'a, T, S> GridGraph<'a, T, S, Directed>
where
    S: Fn(GridPos, GridPos) -> bool,
{
    pub fn directed(grid: &'a Grid<T>, step: S) -> Self {
        Self {
            grid,
            step,
            diagonal: false,
            _dir: PhantomData,
        }
    }
}

impl<'a, T, S> GridGraph<'a, T, S, Undirected>
where
    S: Fn(GridPos, GridPos) -> bool,
{
    /// `step(a, b)` must equal `step(b, a)` for all neighboring cells
    pub fn undirected(grid: &'a Grid<T>, step: S) -> Self {
        Self {
            grid,
            step,
            diagonal: false,
            _dir: PhantomData,
        }
    }
}

impl<'a, T, S, D> GridGraph<'a, T, S, D>
where
    S: Fn(GridPos, GridPos) -> bool,
{
    /// Also connects diagonally adjacent cells
    pub fn with_diagonals(mut self) -> Self {
        self.diagonal = true;
        self
    }

    pub fn grid(&self) -> &'a Grid<T> {
        self.grid
    }

    /// Hop distance of every cell from the closest of `sources`; `None` for unreachable cells.
    ///
    /// # Examples
    /// ```
    /// use dsakit::grid::*;
    ///
    /// let grid = Grid::new(1, 5, ());
    /// let graph = GridGraph::undirected(&grid, |_, _| true);
    /// let dist = graph.distances_from([GridPos::new(0, 0), GridPos::new(0, 4)]);
    /// assert_eq!(dist.row(0), &[Some(0), Some(1), Some(2), Some(1), Some(0)]);
    /// ```
    pub fn distances_from(&self, sources: impl IntoIterator<Item = GridPos>) -> Grid<Option<usize>> {
        let mut sources = sources.into_iter().map(|pos| self.grid.node_of(pos));
        let depths = match sources.next() {
            None => vec![INVALID_NODE; self.grid.len()],
            Some(first) => sources
                .fold(self.bfs_with_predecessor(first), |bfs, u| {
                    bfs.with_additional_start(u)
                })
                .depths(),
        };

        Grid::from_cells(
            self.grid.rows(),
            self.grid.cols(),
            depths
                .into_iter()
                .map(|d| (d != INVALID_NODE).then_some(d as usize))
                .collect(),
        )
    }
}

impl<T, S, D> GraphNodeOrder for GridGraph<'_, T, S, D>
where
    S: Fn(GridPos, GridPos) -> bool,
{
    fn number_of_nodes(&self) -> NumNodes {
        self.grid.len() as NumNodes
    }
}

impl<T, S, D> AdjacencyList for GridGraph<'_, T, S, D>
where
    S: Fn(GridPos, GridPos) -> bool,
{
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        let pos = self.grid.pos_of(u);
        let dirs: &'static [(isize, isize)] = if self.diagonal { &DIRS8 } else { &DIRS4 };
        dirs.iter()
            .filter_map(move |&d| self.grid.step(pos, d))
            .filter(move |&next| (self.step)(pos, next))
            .map(|next| self.grid.node_of(next))
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.neighbors_of(u).count() as NumNodes
    }
}

impl<T, S, D: GraphDir> GraphType for GridGraph<'_, T, S, D> {
    type Dir = D;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algo::Connectivity;
    use itertools::Itertools;

    #[test]
    fn neighbors_follow_predicate() {
        let grid = binary("110\n011\n000");
        let graph = GridGraph::undirected(&grid, |a, b| grid[a] && grid[b]);

        let center = grid.node_of(GridPos::new(1, 1));
        assert_eq!(
            graph.neighbors_of(center).sorted().collect_vec(),
            vec![1, 5]
        );
        assert_eq!(graph.degree_of(8), 0);
        assert_eq!(graph.number_of_connected_components(), 6);

        let diagonal = GridGraph::undirected(&grid, |a, b| grid[a] && grid[b]).with_diagonals();
        assert_eq!(diagonal.degree_of(0), 2);
    }

    #[test]
    fn directed_steps() {
        let heights = Grid::try_from_rows(vec![vec![1, 2, 3]]).unwrap();
        let uphill = GridGraph::directed(&heights, |a, b| heights[b] > heights[a]);
        assert!(uphill.is_directed());
        assert!(uphill.is_reachable(0, 2));
        assert!(!uphill.is_reachable(2, 0));
    }

    #[test]
    fn no_sources() {
        let grid = Grid::new(2, 2, ());
        let graph = GridGraph::directed(&grid, |_, _| true);
        assert!(
            graph
                .distances_from(std::iter::empty())
                .iter()
                .all(|(_, d)| d.is_none())
        );
    }
}
