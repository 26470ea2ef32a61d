//! Immutable elevation grid.
//!
//! The grid is validated once on construction and never mutated afterwards;
//! solvers and the render plan only ever borrow it.

use crate::error::{InvalidGrid, Result};

/// A single elevation sample.
pub type Elevation = i32;

/// Rectangular, row-major table of elevations with `height` rows and
/// `width` columns (both at least 1).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ElevationGrid {
    height: usize,
    width: usize,
    cells: Vec<Elevation>,
}

impl ElevationGrid {
    /// Build a grid from `height` rows of `width` values each.
    ///
    /// Fails with [`InvalidGrid`] if either dimension is zero or the rows
    /// do not match the declared shape.
    pub fn new(height: usize, width: usize, rows: Vec<Vec<Elevation>>) -> Result<Self> {
        let len = check_dimensions(height, width)?;
        if rows.len() != height {
            return Err(InvalidGrid::RowCount {
                expected: height,
                found: rows.len(),
            }
            .into());
        }
        let mut cells = Vec::with_capacity(len);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != width {
                return Err(InvalidGrid::RowLength {
                    row,
                    expected: width,
                    found: values.len(),
                }
                .into());
            }
            cells.extend(values);
        }
        Ok(Self {
            height,
            width,
            cells,
        })
    }

    /// Build a grid from a flat row-major buffer of exactly `height * width` values.
    pub fn from_row_major(height: usize, width: usize, cells: Vec<Elevation>) -> Result<Self> {
        let len = check_dimensions(height, width)?;
        if cells.len() != len {
            // Report the first row that comes up short (or the surplus as a row count).
            let full_rows = cells.len() / width;
            let rem = cells.len() % width;
            let err = if full_rows < height && rem != 0 {
                InvalidGrid::RowLength {
                    row: full_rows,
                    expected: width,
                    found: rem,
                }
            } else {
                InvalidGrid::RowCount {
                    expected: height,
                    found: full_rows + usize::from(rem != 0),
                }
            };
            return Err(err.into());
        }
        Ok(Self {
            height,
            width,
            cells,
        })
    }

    /// Convenience constructor deriving the shape from the rows themselves.
    pub fn from_rows(rows: Vec<Vec<Elevation>>) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        Self::new(height, width, rows)
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Elevation at `(row, col)`.
    ///
    /// # Panics
    /// Panics if the coordinate lies outside the grid.
    #[inline]
    pub fn elevation(&self, row: usize, col: usize) -> Elevation {
        assert!(
            row < self.height && col < self.width,
            "({row}, {col}) outside {}x{} grid",
            self.height,
            self.width
        );
        self.cells[row * self.width + col]
    }

    /// Elevations of one row.
    pub fn row(&self, row: usize) -> &[Elevation] {
        let start = row * self.width;
        &self.cells[start..start + self.width]
    }

    /// All elevations in row-major order.
    pub fn cells(&self) -> &[Elevation] {
        &self.cells
    }

    /// Grid-wide `(min, max)` elevation.
    pub fn min_max(&self) -> (Elevation, Elevation) {
        self.cells
            .iter()
            .fold((Elevation::MAX, Elevation::MIN), |(lo, hi), &e| {
                (lo.min(e), hi.max(e))
            })
    }
}

/// Cell count for a `height x width` grid, or why that shape is unusable.
fn check_dimensions(height: usize, width: usize) -> Result<usize> {
    if height == 0 || width == 0 {
        return Err(InvalidGrid::ZeroDimension { height, width }.into());
    }
    height
        .checked_mul(width)
        .ok_or_else(|| InvalidGrid::TooLarge { height, width }.into())
}
