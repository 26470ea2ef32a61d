//! Edge-cost rule between horizontally adjacent columns.

use crate::grid::Elevation;

/// Accumulated traversal cost. Sums of absolute elevation differences are
/// never negative.
pub type Cost = u64;

/// Cost of stepping between two cells with elevations `a` and `b`: `|a - b|`.
///
/// Total over every pair of elevations and symmetric. A result of zero is a
/// real, legal cost.
#[inline]
pub fn edge_cost(a: Elevation, b: Elevation) -> Cost {
    Cost::from(a.abs_diff(b))
}
