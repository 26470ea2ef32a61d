//! Solver implementations.
//!
//! - [`recursive`] : exhaustive enumeration of every west-to-east path. Slow
//!   (`O(3^width)` per start row) but simple; used as the correctness oracle.
//! - [`dp`]        : bottom-up table construction in `O(height * width)`,
//!   yielding the optimum together with a direction for every cell.

pub mod dp;
pub mod recursive;

pub use dp::{dp_solve, DpSolution, DpSolver, DpTable};
pub use recursive::{recursive_min_cost, RecursiveSolver};
