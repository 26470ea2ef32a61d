//! Minimum-cost west-to-east traversal of elevation grids.
//!
//! A path starts anywhere in the leftmost column, moves one column east per
//! step (optionally shifting one row up or down), and ends anywhere in the
//! rightmost column. Each step costs the absolute elevation difference
//! between the two cells; the goal is the path with the smallest total.
//!
//! ## Solvers
//! - [`solvers::recursive`] enumerates every path. Exponential in the grid
//!   width, it exists as a simple reference implementation.
//! - [`solvers::dp`] fills a per-cell table of best cost and direction in
//!   `O(height * width)`, from which [`path::reconstruct_path`] recovers the
//!   winning path.
//!
//! Both plug into [`PathSolver`] and must agree on the optimal cost.
//!
//! ## Quick start
//! ```
//! use terrain_path::{solve, ElevationGrid, SolveMode};
//!
//! let grid = ElevationGrid::from_rows(vec![
//!     vec![1, 5, 1],
//!     vec![2, 2, 8],
//! ]).unwrap();
//! let solution = solve(&grid, SolveMode::DynamicProgramming).unwrap();
//! assert_eq!(solution.cost, 1);
//! assert_eq!(solution.start_row, 1);
//! assert_eq!(solution.path.unwrap().cells(), &[(1, 0), (1, 1), (0, 2)]);
//! ```
//!
//! ## Rendering
//! [`render::RenderPlan`] turns a grid and a solution into plain data
//! (normalised intensities, direction field, traced fan, optimal path), and
//! [`raster`] paints that plan into an image.

pub mod builder;
pub mod cost;
pub mod direction;
pub mod engine;
pub mod error;
pub mod grid;
pub mod loader;
pub mod path;
pub mod raster;
pub mod render;
pub mod solvers;
pub mod traits;
pub mod utils;

pub use crate::builder::PathEngineBuilder;
pub use crate::cost::{edge_cost, Cost};
pub use crate::direction::Direction;
pub use crate::engine::{solve, PathEngine, Solution, SolveMode};
pub use crate::error::{Error, InvalidGrid, Result};
pub use crate::grid::{Elevation, ElevationGrid};
pub use crate::path::{reconstruct_path, Path};
pub use crate::traits::PathSolver;
