/*!
# Grids

A [`Grid`] stores `rows × cols` cells in row-major order. Cells are addressed by [`GridPos`].

Most searches on grids are ordinary graph searches: [`GridGraph`] exposes a grid as a graph whose nodes are
the cell indices `row * cols + col`, so the traversals of [`crate::algo`] apply unchanged.
Binary grids use `bool` cells; what `true` stands for (land, obstacle, ...) is stated per operation.
*/

use std::{
    fmt::{self, Display},
    ops::{Index, IndexMut},
    str::FromStr,
};

use crate::{Error, Node, Result};

mod graph;
mod paths;
mod regions;

pub use graph::*;

/// Position of a cell
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GridPos {
    pub row: usize,
    pub col: usize,
}

impl GridPos {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for GridPos {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl Display for GridPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

pub(crate) const DIRS4: [(isize, isize); 4] = [(-1, 0), (0, 1), (1, 0), (0, -1)];
pub(crate) const DIRS8: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A rectangular grid of cells
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid<T> {
    rows: usize,
    cols: usize,
    cells: Vec<T>,
}

impl<T: Clone> Grid<T> {
    /// Creates a `rows × cols` grid with every cell set to `fill`
    pub fn new(rows: usize, cols: usize, fill: T) -> Self {
        Self {
            rows,
            cols,
            cells: vec![fill; rows * cols],
        }
    }
}

impl<T> Grid<T> {
    /// Builds a grid from its rows.
    ///
    /// Fails with [`Error::EmptyGrid`] if there are no rows or the first row is empty,
    /// and with [`Error::RaggedGrid`] if the rows differ in length.
    ///
    /// # Examples
    /// ```
    /// use dsakit::{Error, grid::Grid};
    ///
    /// let grid = Grid::try_from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
    /// assert_eq!((grid.rows(), grid.cols()), (2, 3));
    ///
    /// assert!(matches!(
    ///     Grid::try_from_rows(vec![vec![1, 2], vec![3]]),
    ///     Err(Error::RaggedGrid { row: 1, expected: 2, found: 1 })
    /// ));
    /// ```
    pub fn try_from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        if cols == 0 {
            return Err(Error::EmptyGrid);
        }

        let num_rows = rows.len();
        let mut cells = Vec::with_capacity(num_rows * cols);
        for (row, cells_of_row) in rows.into_iter().enumerate() {
            if cells_of_row.len() != cols {
                return Err(Error::RaggedGrid {
                    row,
                    expected: cols,
                    found: cells_of_row.len(),
                });
            }
            cells.extend(cells_of_row);
        }

        Ok(Self {
            rows: num_rows,
            cols,
            cells,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns `true` if `pos` lies within the grid
    pub fn contains(&self, pos: GridPos) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    pub fn get(&self, pos: GridPos) -> Option<&T> {
        self.contains(pos).then(|| &self.cells[pos.row * self.cols + pos.col])
    }

    pub fn get_mut(&mut self, pos: GridPos) -> Option<&mut T> {
        if self.contains(pos) {
            Some(&mut self.cells[pos.row * self.cols + pos.col])
        } else {
            None
        }
    }

    /// Replaces the cell at `pos` and returns the previous value.
    /// Panics if `pos` is out of bounds.
    pub fn set(&mut self, pos: GridPos, value: T) -> T {
        std::mem::replace(&mut self[pos], value)
    }

    /// Cells of row `row`
    pub fn row(&self, row: usize) -> &[T] {
        &self.cells[row * self.cols..(row + 1) * self.cols]
    }

    /// All positions in row-major order
    pub fn positions(&self) -> impl Iterator<Item = GridPos> + use<T> {
        let cols = self.cols;
        (0..self.cells.len()).map(move |i| GridPos::new(i / cols, i % cols))
    }

    /// All cells with their positions in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (GridPos, &T)> + '_ {
        self.positions().zip(self.cells.iter())
    }

    /// Returns `true` if `pos` is in the first or last row or column
    pub fn is_border(&self, pos: GridPos) -> bool {
        pos.row == 0 || pos.col == 0 || pos.row + 1 == self.rows || pos.col + 1 == self.cols
    }

    /// Positions of all border cells in row-major order
    pub fn border(&self) -> impl Iterator<Item = GridPos> + '_ {
        self.positions().filter(move |&pos| self.is_border(pos))
    }

    /// Node index of a cell, as used by [`GridGraph`]
    pub fn node_of(&self, pos: GridPos) -> Node {
        (pos.row * self.cols + pos.col) as Node
    }

    /// Inverse of [`Grid::node_of`]
    pub fn pos_of(&self, u: Node) -> GridPos {
        GridPos::new(u as usize / self.cols, u as usize % self.cols)
    }

    pub(crate) fn step(&self, pos: GridPos, (dr, dc): (isize, isize)) -> Option<GridPos> {
        let row = pos.row.checked_add_signed(dr)?;
        let col = pos.col.checked_add_signed(dc)?;
        let next = GridPos::new(row, col);
        self.contains(next).then_some(next)
    }

    /// Up to four orthogonal neighbors of `pos` within the grid
    ///
    /// # Examples
    /// ```
    /// use dsakit::grid::{Grid, GridPos};
    ///
    /// let grid = Grid::new(2, 3, 0u8);
    /// assert_eq!(grid.neighbors4(GridPos::new(0, 0)).count(), 2);
    /// assert_eq!(grid.neighbors4(GridPos::new(0, 1)).count(), 3);
    /// ```
    pub fn neighbors4(&self, pos: GridPos) -> impl Iterator<Item = GridPos> + '_ {
        DIRS4.iter().filter_map(move |&d| self.step(pos, d))
    }

    /// Up to eight orthogonal or diagonal neighbors of `pos` within the grid
    pub fn neighbors8(&self, pos: GridPos) -> impl Iterator<Item = GridPos> + '_ {
        DIRS8.iter().filter_map(move |&d| self.step(pos, d))
    }

    /// Applies `f` to every cell
    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> Grid<U> {
        Grid {
            rows: self.rows,
            cols: self.cols,
            cells: self.cells.iter().map(f).collect(),
        }
    }

    pub(crate) fn from_cells(rows: usize, cols: usize, cells: Vec<T>) -> Self {
        debug_assert_eq!(rows * cols, cells.len());
        Self { rows, cols, cells }
    }
}

impl<T> Index<GridPos> for Grid<T> {
    type Output = T;

    fn index(&self, pos: GridPos) -> &T {
        assert!(self.contains(pos), "position {pos} out of bounds");
        &self.cells[pos.row * self.cols + pos.col]
    }
}

impl<T> IndexMut<GridPos> for Grid<T> {
    fn index_mut(&mut self, pos: GridPos) -> &mut T {
        assert!(self.contains(pos), "position {pos} out of bounds");
        &mut self.cells[pos.row * self.cols + pos.col]
    }
}

/// Parses one row per line, one cell per character
impl FromStr for Grid<char> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::try_from_rows(s.lines().map(|line| line.chars().collect()).collect())
    }
}

impl<T: Display> Display for Grid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            for cell in self.row(row) {
                write!(f, "{cell}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Parses a grid of `'0'`/`'1'` characters into `bool` cells, panicking on malformed input
#[cfg(test)]
pub(crate) fn binary(text: &str) -> Grid<bool> {
    text.parse::<Grid<char>>().unwrap().map(|&c| c == '1')
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn construction() {
        let grid = Grid::new(3, 4, 7u8);
        assert_eq!(grid.len(), 12);
        assert_eq!(grid[GridPos::new(2, 3)], 7);
        assert_eq!(grid.get(GridPos::new(3, 0)), None);

        assert!(matches!(
            Grid::<u8>::try_from_rows(vec![]),
            Err(Error::EmptyGrid)
        ));
        assert!(matches!(
            Grid::<u8>::try_from_rows(vec![vec![]]),
            Err(Error::EmptyGrid)
        ));
        assert!(matches!(
            "abc\nab\nabc".parse::<Grid<char>>(),
            Err(Error::RaggedGrid {
                row: 1,
                expected: 3,
                found: 2
            })
        ));
    }

    #[test]
    fn access() {
        let mut grid: Grid<char> = "ab\ncd".parse().unwrap();
        assert_eq!(grid.set(GridPos::new(1, 0), 'x'), 'c');
        assert_eq!(grid.row(1), &['x', 'd']);
        *grid.get_mut(GridPos::new(0, 1)).unwrap() = 'y';
        assert_eq!(grid.to_string(), "ay\nxd\n");

        for pos in grid.positions() {
            assert_eq!(grid.pos_of(grid.node_of(pos)), pos);
        }
    }

    #[test]
    fn neighborhoods() {
        let grid = Grid::new(3, 3, ());
        let center = GridPos::new(1, 1);
        assert_eq!(grid.neighbors4(center).count(), 4);
        assert_eq!(grid.neighbors8(center).count(), 8);
        assert_eq!(
            grid.neighbors8(GridPos::new(2, 2)).sorted().collect_vec(),
            vec![GridPos::new(1, 1), GridPos::new(1, 2), GridPos::new(2, 1)]
        );
        assert_eq!(grid.border().count(), 8);

        let line = Grid::new(1, 1, ());
        assert_eq!(line.neighbors8(GridPos::new(0, 0)).count(), 0);
    }
}
