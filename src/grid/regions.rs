//! Connected regions of cells: islands, flood fills and regions cut off from the border.

use itertools::Itertools;
use tracing::debug;

use super::*;
use crate::{Weight, algo::*};

/// Grids of land (`true`) and water (`false`); islands are 4-connected.
impl Grid<bool> {
    fn islands(&self) -> Vec<Vec<Node>> {
        let graph = GridGraph::undirected(self, |a, b| self[a] && self[b]);
        graph
            .connected_components()
            .filter(|cc| self[self.pos_of(cc[0])])
            .collect()
    }

    /// Number of islands (LC 200)
    ///
    /// # Examples
    /// ```
    /// use dsakit::grid::Grid;
    ///
    /// let grid: Grid<char> = "11000\n11000\n00100\n00011".parse().unwrap();
    /// assert_eq!(grid.map(|&c| c == '1').number_of_islands(), 3);
    /// ```
    pub fn number_of_islands(&self) -> usize {
        self.islands().len()
    }

    /// Number of cells of the largest island, or `0` without land (LC 695)
    pub fn max_area_of_island(&self) -> usize {
        self.islands().iter().map(|island| island.len()).max().unwrap_or(0)
    }

    /// Number of land cells from which the border cannot be reached over land (LC 1020)
    pub fn number_of_enclaves(&self) -> usize {
        let graph = GridGraph::undirected(self, |a, b| self[a] && self[b]);
        let dist = graph.distances_from(self.border().filter(|&pos| self[pos]));
        self.iter()
            .filter(|&(pos, &land)| land && dist[pos].is_none())
            .count()
    }
}

impl Grid<char> {
    /// Replaces every region of `'O'` cells that does not touch the border by `'X'` (LC 130)
    ///
    /// # Examples
    /// ```
    /// use dsakit::grid::Grid;
    ///
    /// let mut board: Grid<char> = "XXXX\nXOOX\nXXOX\nXOXX".parse().unwrap();
    /// board.capture_surrounded();
    /// assert_eq!(board.to_string(), "XXXX\nXXXX\nXXXX\nXOXX\n");
    /// ```
    pub fn capture_surrounded(&mut self) {
        let captured = {
            let graph = GridGraph::undirected(&*self, |a, b| self[a] == 'O' && self[b] == 'O');
            let dist = graph.distances_from(self.border().filter(|&pos| self[pos] == 'O'));
            self.positions()
                .filter(|&pos| self[pos] == 'O' && dist[pos].is_none())
                .collect_vec()
        };

        debug!(captured = captured.len(), "capture surrounded regions");
        for pos in captured {
            self[pos] = 'X';
        }
    }
}

impl<T: Clone + PartialEq> Grid<T> {
    /// Recolors the 4-connected region of equally colored cells around `start` to `color` (LC 733).
    /// Panics if `start` is out of bounds.
    ///
    /// # Examples
    /// ```
    /// use dsakit::grid::{Grid, GridPos};
    ///
    /// let mut image = Grid::try_from_rows(vec![vec![1, 1, 1], vec![1, 1, 0], vec![1, 0, 1]]).unwrap();
    /// image.flood_fill(GridPos::new(1, 1), 2);
    /// assert_eq!(image, Grid::try_from_rows(vec![vec![2, 2, 2], vec![2, 2, 0], vec![2, 0, 1]]).unwrap());
    /// ```
    pub fn flood_fill(&mut self, start: GridPos, color: T) {
        if self[start] == color {
            return;
        }

        let region = {
            let original = &self[start];
            let graph =
                GridGraph::undirected(&*self, |a, b| self[a] == *original && self[b] == *original);
            graph.bfs(self.node_of(start)).collect_vec()
        };

        for u in region {
            let pos = self.pos_of(u);
            self[pos] = color.clone();
        }
    }
}

impl Grid<Weight> {
    /// Cells of a height map from which water can flow both to the top/left border (Pacific)
    /// and to the bottom/right border (Atlantic), in row-major order (LC 417).
    /// Water flows to orthogonal neighbors of equal or lower height.
    ///
    /// # Examples
    /// ```
    /// use dsakit::grid::{Grid, GridPos};
    ///
    /// let heights = Grid::<i64>::try_from_rows(vec![vec![1, 2], vec![4, 3]]).unwrap();
    /// assert_eq!(
    ///     heights.pacific_atlantic(),
    ///     vec![GridPos::new(0, 1), GridPos::new(1, 0), GridPos::new(1, 1)]
    /// );
    /// ```
    pub fn pacific_atlantic(&self) -> Vec<GridPos> {
        if self.is_empty() {
            return Vec::new();
        }

        // search uphill from each ocean
        let graph = GridGraph::directed(self, |a, b| self[b] >= self[a]);
        let last_row = self.rows() - 1;
        let last_col = self.cols() - 1;

        let pacific = graph.distances_from(self.border().filter(|pos| pos.row == 0 || pos.col == 0));
        let atlantic = graph.distances_from(
            self.border()
                .filter(|pos| pos.row == last_row || pos.col == last_col),
        );

        self.positions()
            .filter(|&pos| pacific[pos].is_some() && atlantic[pos].is_some())
            .collect()
    }
}
