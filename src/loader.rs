//! Text elevation-file loader.
//!
//! Format:
//! ```text
//! ncols 4
//! nrows 2
//! 10 12 15 11
//! 9 9 14 20
//! ```
//! The first line's last all-digit token is the width, the second line's is
//! the height. Everything after is whitespace-separated integer elevations in
//! row-major order; line breaks inside the body are not significant.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::grid::{Elevation, ElevationGrid};

/// Read and parse an elevation file.
pub fn load_grid<P: AsRef<Path>>(path: P) -> Result<ElevationGrid> {
    let text = fs::read_to_string(path)?;
    parse_grid(&text)
}

/// Parse elevation data already held in memory.
///
/// A body holding more or fewer than `width * height` values is rejected as
/// an invalid grid.
pub fn parse_grid(text: &str) -> Result<ElevationGrid> {
    let mut lines = text.lines().enumerate().map(|(idx, line)| (idx + 1, line));

    let width = header_value(lines.next(), 1, "width")?;
    let height = header_value(lines.next(), 2, "height")?;

    // The headers are unchecked until the body has been counted.
    let mut values: Vec<Elevation> = Vec::new();
    for (line_no, line) in lines {
        for token in line.split_whitespace() {
            let value = token.parse::<Elevation>().map_err(|_| Error::Parse {
                line: line_no,
                message: format!("invalid elevation '{token}'"),
            })?;
            values.push(value);
        }
    }

    ElevationGrid::from_row_major(height, width, values)
}

fn header_value(line: Option<(usize, &str)>, line_no: usize, what: &str) -> Result<usize> {
    let missing = || Error::Parse {
        line: line_no,
        message: format!("missing {what} header"),
    };
    let (_, text) = line.ok_or_else(missing)?;
    let token = text
        .split_whitespace()
        .rev()
        .find(|tok| tok.bytes().all(|b| b.is_ascii_digit()))
        .ok_or_else(missing)?;
    token.parse::<usize>().map_err(|_| Error::Parse {
        line: line_no,
        message: format!("{what} '{token}' out of range"),
    })
}
