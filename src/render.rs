//! Plain-data description of what a renderer should draw.
//!
//! The plan is built once from a grid and a [`Solution`] and then handed to a
//! painter (see [`crate::raster`]). Nothing here owns a pixel buffer.

use crate::direction::Direction;
use crate::engine::Solution;
use crate::grid::{Elevation, ElevationGrid};
use crate::path::{reachability_fan, Path};

/// Intensity used for every cell when the grid is perfectly flat.
pub const FLAT_INTENSITY: u8 = 0;

/// Normalise `elevation` into `0..=255`:
/// `round((elevation - min) * 255 / (max - min))`.
///
/// A degenerate range (`max == min`) maps to [`FLAT_INTENSITY`].
#[inline]
pub fn intensity(elevation: Elevation, min: Elevation, max: Elevation) -> u8 {
    debug_assert!(min <= elevation && elevation <= max);
    let range = u64::from(max.abs_diff(min));
    if range == 0 {
        return FLAT_INTENSITY;
    }
    let offset = u64::from(elevation.abs_diff(min));
    // Round half up in integer arithmetic.
    let scaled = (2 * offset * 255 + range) / (2 * range);
    scaled.min(255) as u8
}

/// Row-major intensities for every cell of `grid`.
pub fn intensity_map(grid: &ElevationGrid) -> Vec<u8> {
    let (min, max) = grid.min_max();
    grid.cells()
        .iter()
        .map(|&e| intensity(e, min, max))
        .collect()
}

/// Everything a painter needs: base intensities, the DP direction field,
/// the cells covered by the reachability fan, and the optimal path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderPlan {
    height: usize,
    width: usize,
    intensities: Vec<u8>,
    directions: Option<Vec<Option<Direction>>>,
    fan: Vec<bool>,
    best_path: Option<Path>,
}

impl RenderPlan {
    /// Plan that only shows the elevation map.
    pub fn map_only(grid: &ElevationGrid) -> Self {
        Self {
            height: grid.height(),
            width: grid.width(),
            intensities: intensity_map(grid),
            directions: None,
            fan: vec![false; grid.height() * grid.width()],
            best_path: None,
        }
    }

    /// Plan for `solution` over `grid`.
    ///
    /// When the solution carries a DP table, the fan marks every cell visited
    /// by following the direction field from each start row.
    pub fn from_solution(grid: &ElevationGrid, solution: &Solution) -> Self {
        let mut plan = Self::map_only(grid);
        if let Some(table) = &solution.table {
            let width = plan.width;
            let mut directions = vec![None; plan.height * width];
            for row in 0..plan.height {
                for col in 0..width {
                    directions[row * width + col] = table.direction(row, col);
                }
            }
            for path in reachability_fan(table) {
                for &(row, col) in &path {
                    plan.fan[row * width + col] = true;
                }
            }
            plan.directions = Some(directions);
        }
        plan.best_path = solution.path.clone();
        plan
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn intensity(&self, row: usize, col: usize) -> u8 {
        self.intensities[row * self.width + col]
    }

    pub fn intensities(&self) -> &[u8] {
        &self.intensities
    }

    /// DP direction at `(row, col)`, if the plan carries a direction field.
    pub fn direction(&self, row: usize, col: usize) -> Option<Direction> {
        self.directions
            .as_ref()
            .and_then(|dirs| dirs[row * self.width + col])
    }

    pub fn has_direction_field(&self) -> bool {
        self.directions.is_some()
    }

    /// Whether `(row, col)` lies on some start row's traced path.
    #[inline]
    pub fn on_fan(&self, row: usize, col: usize) -> bool {
        self.fan[row * self.width + col]
    }

    pub fn best_path(&self) -> Option<&Path> {
        self.best_path.as_ref()
    }
}
