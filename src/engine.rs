//! Top-level solve entry point.
//!
//! [`PathEngine`] validates the request against its configuration, runs the
//! selected solver, and packages the result as a [`Solution`] that renderers
//! can consume without touching any solver state.

use std::fmt;
use std::str::FromStr;

use crate::cost::Cost;
use crate::error::{Error, Result};
use crate::grid::ElevationGrid;
use crate::path::{reconstruct_path, Path};
use crate::solvers::dp::{dp_solve, DpTable};
use crate::solvers::recursive::RecursiveSolver;
use crate::traits::PathSolver;
use crate::utils::DEFAULT_RECURSION_LIMIT;

/// Which solver the caller wants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum SolveMode {
    Recursive,
    #[default]
    DynamicProgramming,
}

impl FromStr for SolveMode {
    type Err = String;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        match value {
            "recursive" | "recursion" => Ok(Self::Recursive),
            "dp" | "dynamic-programming" | "dynamic" => Ok(Self::DynamicProgramming),
            other => Err(format!("unknown solve mode '{other}'")),
        }
    }
}

impl fmt::Display for SolveMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolveMode::Recursive => f.write_str("recursive"),
            SolveMode::DynamicProgramming => f.write_str("dynamic-programming"),
        }
    }
}

/// Outcome of a solve.
///
/// The DP mode always carries the winning `path` and the full direction
/// `table`; the recursive mode only reports the optimum and its start row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    pub mode: SolveMode,
    pub cost: Cost,
    pub start_row: usize,
    pub path: Option<Path>,
    pub table: Option<DpTable>,
}

/// Solver front-end for a given configuration.
///
/// Typical usage:
/// ```
/// use terrain_path::{ElevationGrid, PathEngine, SolveMode};
///
/// let grid = ElevationGrid::from_rows(vec![vec![3, 4, 9], vec![8, 2, 2]]).unwrap();
/// let solution = PathEngine::new(SolveMode::DynamicProgramming).run(&grid).unwrap();
/// assert_eq!(solution.cost, 1);
/// assert_eq!(solution.path.unwrap().cells(), &[(0, 0), (1, 1), (1, 2)]);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct PathEngine {
    mode: SolveMode,
    recursion_limit: usize,
}

impl PathEngine {
    /// Create an engine with the default recursion limit.
    pub fn new(mode: SolveMode) -> Self {
        Self::with_recursion_limit(mode, DEFAULT_RECURSION_LIMIT)
    }

    /// Create an engine whose recursive solver accepts grids of at most
    /// `recursion_limit` columns.
    ///
    /// # Panics
    /// Panics if `recursion_limit == 0`.
    pub fn with_recursion_limit(mode: SolveMode, recursion_limit: usize) -> Self {
        assert!(recursion_limit > 0, "recursion_limit must be positive");
        Self {
            mode,
            recursion_limit,
        }
    }

    pub fn mode(&self) -> SolveMode {
        self.mode
    }

    pub fn recursion_limit(&self) -> usize {
        self.recursion_limit
    }

    /// Solve `grid` with the configured mode.
    ///
    /// Fails only with [`Error::RecursionLimit`] when the recursive mode is
    /// asked to walk a grid wider than the configured limit.
    pub fn run(&self, grid: &ElevationGrid) -> Result<Solution> {
        #[cfg(feature = "tracing")]
        let span = tracing::info_span!(
            "path_engine_run",
            mode = %self.mode,
            height = grid.height(),
            width = grid.width()
        );
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let solution = match self.mode {
            SolveMode::Recursive => self.run_recursive(grid)?,
            SolveMode::DynamicProgramming => run_dp(grid),
        };

        #[cfg(feature = "tracing")]
        tracing::info!(
            cost = solution.cost,
            start_row = solution.start_row,
            "optimal path found"
        );

        Ok(solution)
    }

    fn run_recursive(&self, grid: &ElevationGrid) -> Result<Solution> {
        if grid.width() > self.recursion_limit {
            return Err(Error::RecursionLimit {
                width: grid.width(),
                limit: self.recursion_limit,
            });
        }
        #[cfg(feature = "tracing")]
        let span = tracing::debug_span!("recursive_solve");
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let (cost, start_row) = RecursiveSolver.best_start(grid);
        Ok(Solution {
            mode: SolveMode::Recursive,
            cost,
            start_row,
            path: None,
            table: None,
        })
    }
}

impl Default for PathEngine {
    fn default() -> Self {
        Self::new(SolveMode::default())
    }
}

fn run_dp(grid: &ElevationGrid) -> Solution {
    let dp = dp_solve(grid);
    let path = reconstruct_path(&dp.table, dp.start_row);
    Solution {
        mode: SolveMode::DynamicProgramming,
        cost: dp.cost,
        start_row: dp.start_row,
        path: Some(path),
        table: Some(dp.table),
    }
}

/// Solve `grid` with `mode` and the default configuration.
pub fn solve(grid: &ElevationGrid, mode: SolveMode) -> Result<Solution> {
    PathEngine::new(mode).run(grid)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario() -> ElevationGrid {
        ElevationGrid::from_rows(vec![vec![1, 5, 1], vec![2, 2, 8]]).unwrap()
    }

    #[test]
    fn modes_agree_on_cost_and_start() {
        let grid = scenario();
        let dp = solve(&grid, SolveMode::DynamicProgramming).unwrap();
        let rec = solve(&grid, SolveMode::Recursive).unwrap();
        assert_eq!(dp.cost, rec.cost);
        assert_eq!(dp.start_row, rec.start_row);
        assert!(dp.path.is_some() && dp.table.is_some());
        assert!(rec.path.is_none() && rec.table.is_none());
    }

    #[test]
    fn recursion_limit_is_enforced_before_solving() {
        let grid = ElevationGrid::from_rows(vec![vec![0; 5]]).unwrap();
        let err = PathEngine::with_recursion_limit(SolveMode::Recursive, 4)
            .run(&grid)
            .unwrap_err();
        assert!(matches!(err, Error::RecursionLimit { width: 5, limit: 4 }));
        // The DP mode ignores the limit.
        let ok = PathEngine::with_recursion_limit(SolveMode::DynamicProgramming, 4).run(&grid);
        assert_eq!(ok.unwrap().cost, 0);
    }

    #[test]
    fn mode_parsing() {
        assert_eq!("recursive".parse::<SolveMode>(), Ok(SolveMode::Recursive));
        assert_eq!("dp".parse::<SolveMode>(), Ok(SolveMode::DynamicProgramming));
        assert_eq!(
            "dynamic-programming".parse::<SolveMode>(),
            Ok(SolveMode::DynamicProgramming)
        );
        assert!("greedy".parse::<SolveMode>().is_err());
        assert_eq!(SolveMode::Recursive.to_string(), "recursive");
    }

    #[test]
    #[should_panic(expected = "recursion_limit must be positive")]
    fn zero_limit_panics() {
        let _ = PathEngine::with_recursion_limit(SolveMode::Recursive, 0);
    }
}
