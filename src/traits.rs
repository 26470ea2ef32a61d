//! Core trait shared by the path-cost solvers.
//!
//! Both solvers answer the same two questions over a validated
//! [`ElevationGrid`]:
//! - what is the cheapest west-to-east cost starting from a given row, and
//! - which start row yields the grid-wide optimum.
//!
//! The movement rule is common to every implementation: from `(row, col)` a
//! path may continue to `(row - 1, col + 1)`, `(row, col + 1)` or
//! `(row + 1, col + 1)`, with moves off the top or bottom edge unavailable.
//! A path starts in column 0 and ends anywhere in the last column.

use crate::cost::Cost;
use crate::grid::ElevationGrid;
use crate::utils::argmin_first;

/// A strategy for computing minimum west-to-east traversal costs.
pub trait PathSolver {
    /// Short label used in logs and reports.
    fn name(&self) -> &'static str;

    /// Minimum total cost of a path starting at `(start_row, 0)`.
    ///
    /// # Panics
    /// Implementations panic if `start_row >= grid.height()`.
    fn min_cost_from(&self, grid: &ElevationGrid, start_row: usize) -> Cost;

    /// Minimum cost for every start row, indexed by row.
    fn costs_by_start_row(&self, grid: &ElevationGrid) -> Vec<Cost> {
        (0..grid.height())
            .map(|row| self.min_cost_from(grid, row))
            .collect()
    }

    /// Grid-wide optimum as `(cost, start_row)`, taking the lowest row on ties.
    ///
    /// Every row `0..height` is a candidate start.
    fn best_start(&self, grid: &ElevationGrid) -> (Cost, usize) {
        let (row, cost) = argmin_first(self.costs_by_start_row(grid)).unwrap_or((0, 0));
        (cost, row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solvers::{DpSolver, RecursiveSolver};

    /// Costs each start row by the magnitude of its first cell.
    struct FirstStep;

    impl PathSolver for FirstStep {
        fn name(&self) -> &'static str {
            "first-step"
        }

        fn min_cost_from(&self, grid: &ElevationGrid, start_row: usize) -> Cost {
            grid.row(start_row).first().copied().map_or(0, |e| e.unsigned_abs().into())
        }
    }

    #[test]
    fn default_best_start_takes_lowest_row_on_ties() {
        let grid = ElevationGrid::from_rows(vec![vec![4], vec![-2], vec![2]]).unwrap();
        assert_eq!(FirstStep.costs_by_start_row(&grid), vec![4, 2, 2]);
        assert_eq!(FirstStep.best_start(&grid), (2, 1));
    }

    #[test]
    fn solver_names_are_distinct() {
        assert_eq!(DpSolver.name(), "dynamic-programming");
        assert_eq!(RecursiveSolver.name(), "recursive");
        assert_ne!(FirstStep.name(), DpSolver.name());
    }
}
