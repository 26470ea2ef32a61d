//! Exhaustive recursive search.
//!
//! No memoisation: every path from the start cell to the east edge is
//! enumerated. Callers bound the grid width before using this solver (see
//! [`crate::builder::PathEngineBuilder::with_recursion_limit`]).

use crate::cost::{edge_cost, Cost};
use crate::direction::Direction;
use crate::grid::ElevationGrid;
use crate::traits::PathSolver;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Stateless handle for the exhaustive solver.
#[derive(Clone, Copy, Debug, Default)]
pub struct RecursiveSolver;

/// Total cost of the cheapest path starting at `(start_row, 0)` and ending
/// anywhere in the last column.
///
/// # Panics
/// Panics if `start_row >= grid.height()`.
pub fn recursive_min_cost(grid: &ElevationGrid, start_row: usize) -> Cost {
    assert!(
        start_row < grid.height(),
        "start row {start_row} outside grid of height {}",
        grid.height()
    );
    cost_to_east(grid, start_row, 0)
}

fn cost_to_east(grid: &ElevationGrid, row: usize, col: usize) -> Cost {
    if col + 1 == grid.width() {
        return 0;
    }
    let here = grid.elevation(row, col);
    let next_col = col + 1;
    let via = |next_row: usize| {
        edge_cost(here, grid.elevation(next_row, next_col)) + cost_to_east(grid, next_row, next_col)
    };

    // Staying is always available; the diagonals only when they stay on the grid.
    let mut best = via(row);
    for dir in [Direction::North, Direction::South] {
        if let Some(next_row) = dir.step(row, grid.height()) {
            best = best.min(via(next_row));
        }
    }
    best
}

impl PathSolver for RecursiveSolver {
    fn name(&self) -> &'static str {
        "recursive"
    }

    fn min_cost_from(&self, grid: &ElevationGrid, start_row: usize) -> Cost {
        recursive_min_cost(grid, start_row)
    }

    #[cfg(feature = "parallel")]
    fn costs_by_start_row(&self, grid: &ElevationGrid) -> Vec<Cost> {
        // Each start row reads only the shared grid; results keep row order.
        (0..grid.height())
            .into_par_iter()
            .map(|row| recursive_min_cost(grid, row))
            .collect()
    }
}
