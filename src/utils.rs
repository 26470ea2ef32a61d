//! Assorted utilities and helpers.

use crate::cost::Cost;

/// Widest grid the exhaustive solver accepts unless configured otherwise.
///
/// The search visits up to `3^(width-1)` paths per start row, so this bounds
/// both run time and recursion depth.
pub const DEFAULT_RECURSION_LIMIT: usize = 16;

/// Index and value of the smallest cost, preferring the lowest index on ties.
///
/// Returns `None` for an empty sequence.
#[inline]
pub fn argmin_first<I>(costs: I) -> Option<(usize, Cost)>
where
    I: IntoIterator<Item = Cost>,
{
    let mut best: Option<(usize, Cost)> = None;
    for (idx, cost) in costs.into_iter().enumerate() {
        match best {
            Some((_, b)) if cost >= b => {}
            _ => best = Some((idx, cost)),
        }
    }
    best
}
