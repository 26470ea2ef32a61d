//! Path reconstruction from a DP direction table.

use crate::cost::{edge_cost, Cost};
use crate::direction::Direction;
use crate::grid::ElevationGrid;
use crate::solvers::dp::DpTable;

/// Ordered `(row, col)` cells from column 0 to the last column.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Path {
    cells: Vec<(usize, usize)>,
}

impl Path {
    /// Wrap an explicit cell sequence. No validation is performed; see
    /// [`Path::is_valid_for`].
    pub fn from_cells(cells: Vec<(usize, usize)>) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[(usize, usize)] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Row of the first cell, if any.
    pub fn start_row(&self) -> Option<usize> {
        self.cells.first().map(|&(row, _)| row)
    }

    /// Whether this is a complete west-to-east path on a `height x width` grid:
    /// one cell per column in order, every row in range, and consecutive rows
    /// differing by at most one.
    pub fn is_valid_for(&self, height: usize, width: usize) -> bool {
        self.cells.len() == width
            && self
                .cells
                .iter()
                .enumerate()
                .all(|(col, &(row, c))| c == col && row < height)
            && self
                .cells
                .windows(2)
                .all(|w| w[0].0.abs_diff(w[1].0) <= 1)
    }

    /// Sum of edge costs along the path over `grid`.
    pub fn cost(&self, grid: &ElevationGrid) -> Cost {
        self.cells
            .windows(2)
            .map(|w| edge_cost(grid.elevation(w[0].0, w[0].1), grid.elevation(w[1].0, w[1].1)))
            .sum()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, (usize, usize)> {
        self.cells.iter()
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a (usize, usize);
    type IntoIter = std::slice::Iter<'a, (usize, usize)>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

/// Follow the direction table from `(start_row, 0)` to the last column.
///
/// The returned path has exactly `table.width()` cells. The table only records
/// directions whose target row exists, so the walk never leaves the grid.
///
/// # Panics
/// Panics if `start_row >= table.height()`.
pub fn reconstruct_path(table: &DpTable, start_row: usize) -> Path {
    assert!(
        start_row < table.height(),
        "start row {start_row} outside table of height {}",
        table.height()
    );
    let width = table.width();
    let mut cells = Vec::with_capacity(width);
    let mut row = start_row;
    for col in 0..width {
        cells.push((row, col));
        if let Some(dir) = table.direction(row, col) {
            row = next_row(row, dir, table.height());
        }
    }
    Path { cells }
}

/// Paths traced from every start row, indexed by start row.
///
/// Together they cover every cell reachable by following the direction field
/// from column 0.
pub fn reachability_fan(table: &DpTable) -> Vec<Path> {
    (0..table.height())
        .map(|row| reconstruct_path(table, row))
        .collect()
}

#[inline]
fn next_row(row: usize, dir: Direction, height: usize) -> usize {
    let next = row
        .checked_add_signed(dir.delta())
        .filter(|&next| next < height);
    debug_assert!(
        next.is_some(),
        "direction {dir} from row {row} leaves a grid of height {height}"
    );
    next.unwrap_or(row)
}
