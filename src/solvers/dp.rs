//! Bottom-up dynamic programming over columns.
//!
//! Columns are processed from east to west. The last column is the base case
//! (cost 0, no direction); every other cell takes the cheapest available move
//! into the already-finished column to its east. Ties prefer `Stay`, then
//! `North`, then `South`.
//!
//! The table is stored column-major so that each step reads one finished
//! column slice and writes the next one.

use crate::cost::{edge_cost, Cost};
use crate::direction::Direction;
use crate::grid::ElevationGrid;
use crate::traits::PathSolver;
use crate::utils::argmin_first;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Per-cell minimum cost to the east edge and the direction achieving it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DpTable {
    height: usize,
    width: usize,
    /// Column-major: `cost[col * height + row]`.
    cost: Vec<Cost>,
    /// Column-major; `None` only in the last column.
    dir: Vec<Option<Direction>>,
}

impl DpTable {
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Minimum accumulated cost from `(row, col)` to any cell of the last column.
    #[inline]
    pub fn cost(&self, row: usize, col: usize) -> Cost {
        self.cost[self.index(row, col)]
    }

    /// Direction taken from `(row, col)`; `None` in the last column.
    #[inline]
    pub fn direction(&self, row: usize, col: usize) -> Option<Direction> {
        self.dir[self.index(row, col)]
    }

    /// Costs of column 0, indexed by start row.
    pub fn start_costs(&self) -> &[Cost] {
        &self.cost[..self.height]
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.height && col < self.width,
            "({row}, {col}) outside {}x{} table",
            self.height,
            self.width
        );
        col * self.height + row
    }
}

/// Result of a DP solve: the global optimum, where it starts, and the full table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DpSolution {
    pub cost: Cost,
    pub start_row: usize,
    pub table: DpTable,
}

/// Stateless handle for the DP solver.
#[derive(Clone, Copy, Debug, Default)]
pub struct DpSolver;

/// Build the DP table for `grid` and pick the best start row.
///
/// Runs in `O(height * width)` time and space. Every row is a candidate
/// start; the lowest row index wins ties.
pub fn dp_solve(grid: &ElevationGrid) -> DpSolution {
    #[cfg(feature = "tracing")]
    let span = tracing::debug_span!("dp_solve", height = grid.height(), width = grid.width());
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    let table = build_table(grid);
    let (start_row, cost) = argmin_first(table.start_costs().iter().copied()).unwrap_or((0, 0));

    #[cfg(feature = "tracing")]
    tracing::debug!(cost, start_row, "dp optimum");

    DpSolution {
        cost,
        start_row,
        table,
    }
}

fn build_table(grid: &ElevationGrid) -> DpTable {
    let height = grid.height();
    let width = grid.width();
    // Last column is already correct: cost 0, no direction.
    let mut cost = vec![0; height * width];
    let mut dir = vec![None; height * width];

    for col in (0..width.saturating_sub(1)).rev() {
        let (head, tail) = cost.split_at_mut((col + 1) * height);
        let current = &mut head[col * height..];
        let east = &tail[..height];
        let dirs = &mut dir[col * height..(col + 1) * height];
        fill_column(grid, col, east, current, dirs);
    }

    DpTable {
        height,
        width,
        cost,
        dir,
    }
}

#[cfg(feature = "parallel")]
fn fill_column(
    grid: &ElevationGrid,
    col: usize,
    east: &[Cost],
    costs: &mut [Cost],
    dirs: &mut [Option<Direction>],
) {
    // Rows of one column only read the finished column to the east.
    costs
        .par_iter_mut()
        .zip(dirs.par_iter_mut())
        .enumerate()
        .for_each(|(row, (c, d))| {
            let (best_cost, best_dir) = best_move(grid, east, row, col);
            *c = best_cost;
            *d = Some(best_dir);
        });
}

#[cfg(not(feature = "parallel"))]
fn fill_column(
    grid: &ElevationGrid,
    col: usize,
    east: &[Cost],
    costs: &mut [Cost],
    dirs: &mut [Option<Direction>],
) {
    for (row, (c, d)) in costs.iter_mut().zip(dirs.iter_mut()).enumerate() {
        let (best_cost, best_dir) = best_move(grid, east, row, col);
        *c = best_cost;
        *d = Some(best_dir);
    }
}

/// Cheapest available move from `(row, col)` into the finished column `east`.
///
/// Availability is decided by whether the target row exists, never by the
/// candidate's cost, so zero-cost moves compete like any other.
#[inline]
fn best_move(grid: &ElevationGrid, east: &[Cost], row: usize, col: usize) -> (Cost, Direction) {
    let here = grid.elevation(row, col);
    let mut best: Option<(Cost, Direction)> = None;
    for dir in Direction::PREFERENCE {
        let Some(next_row) = dir.step(row, grid.height()) else {
            continue;
        };
        let cand = edge_cost(here, grid.elevation(next_row, col + 1)) + east[next_row];
        match best {
            Some((b, _)) if cand >= b => {}
            _ => best = Some((cand, dir)),
        }
    }
    // `Stay` always targets a valid row, so a candidate exists.
    best.unwrap_or((0, Direction::Stay))
}

impl PathSolver for DpSolver {
    fn name(&self) -> &'static str {
        "dynamic-programming"
    }

    fn min_cost_from(&self, grid: &ElevationGrid, start_row: usize) -> Cost {
        assert!(
            start_row < grid.height(),
            "start row {start_row} outside grid of height {}",
            grid.height()
        );
        build_table(grid).cost(start_row, 0)
    }

    fn costs_by_start_row(&self, grid: &ElevationGrid) -> Vec<Cost> {
        build_table(grid).start_costs().to_vec()
    }

    fn best_start(&self, grid: &ElevationGrid) -> (Cost, usize) {
        let solution = dp_solve(grid);
        (solution.cost, solution.start_row)
    }
}
