//! Error types shared by the grid model, the engine and the I/O collaborators.
//!
//! Only malformed input is an error. Once a grid has been validated both
//! solvers are total, so the solve path can only fail on the recursion guard.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Why a candidate elevation table was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidGrid {
    /// `height` or `width` is zero.
    ZeroDimension { height: usize, width: usize },
    /// `height * width` does not fit in `usize`.
    TooLarge { height: usize, width: usize },
    /// The table does not hold exactly `height` rows.
    RowCount { expected: usize, found: usize },
    /// Row `row` does not hold exactly `width` values.
    RowLength {
        row: usize,
        expected: usize,
        found: usize,
    },
}

impl std::fmt::Display for InvalidGrid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            InvalidGrid::ZeroDimension { height, width } => {
                write!(f, "dimensions must be positive, got {height}x{width}")
            }
            InvalidGrid::TooLarge { height, width } => {
                write!(f, "{height}x{width} cells overflow the address space")
            }
            InvalidGrid::RowCount { expected, found } => {
                write!(f, "expected {expected} rows, found {found}")
            }
            InvalidGrid::RowLength {
                row,
                expected,
                found,
            } => write!(f, "row {row}: expected {expected} values, found {found}"),
        }
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid grid: {0}")]
    InvalidGrid(InvalidGrid),

    /// The exhaustive solver was asked to walk a grid wider than its guard.
    #[error("grid width {width} exceeds the recursive solver limit of {limit} columns")]
    RecursionLimit { width: usize, limit: usize },

    #[error("parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}

impl From<InvalidGrid> for Error {
    fn from(reason: InvalidGrid) -> Self {
        Error::InvalidGrid(reason)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_grid_messages_name_the_offender() {
        let err = Error::from(InvalidGrid::RowLength {
            row: 2,
            expected: 4,
            found: 3,
        });
        assert_eq!(
            err.to_string(),
            "invalid grid: row 2: expected 4 values, found 3"
        );
    }

    #[test]
    fn recursion_limit_message() {
        let err = Error::RecursionLimit {
            width: 40,
            limit: 16,
        };
        assert!(err.to_string().contains("40"));
        assert!(err.to_string().contains("16"));
    }
}
