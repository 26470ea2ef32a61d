//! Row shift taken when moving one column east.

use std::fmt;

/// Direction attached to a cell: the move taken *from* that cell toward the
/// next column.
///
/// `North` moves one row up (towards row 0), `South` one row down.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    North,
    #[default]
    Stay,
    South,
}

impl Direction {
    /// Candidate order used to break ties: the first direction in this list
    /// with the minimum cost wins.
    pub const PREFERENCE: [Direction; 3] = [Direction::Stay, Direction::North, Direction::South];

    /// Row delta for this direction.
    #[inline]
    pub fn delta(self) -> isize {
        match self {
            Direction::North => -1,
            Direction::Stay => 0,
            Direction::South => 1,
        }
    }

    /// Target row when stepping from `row` in a grid of `height` rows, or
    /// `None` if the move would leave the grid. Moves off an edge are
    /// unavailable, never wrapped.
    #[inline]
    pub fn step(self, row: usize, height: usize) -> Option<usize> {
        let target = match self {
            Direction::North => row.checked_sub(1)?,
            Direction::Stay => row,
            Direction::South => row + 1,
        };
        (target < height).then_some(target)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Direction::North => "north",
            Direction::Stay => "stay",
            Direction::South => "south",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::Direction;

    #[test]
    fn deltas() {
        assert_eq!(Direction::North.delta(), -1);
        assert_eq!(Direction::Stay.delta(), 0);
        assert_eq!(Direction::South.delta(), 1);
    }

    #[test]
    fn steps_are_clipped_at_edges() {
        assert_eq!(Direction::North.step(0, 3), None);
        assert_eq!(Direction::North.step(2, 3), Some(1));
        assert_eq!(Direction::South.step(2, 3), None);
        assert_eq!(Direction::South.step(0, 3), Some(1));
        assert_eq!(Direction::Stay.step(0, 1), Some(0));
        assert_eq!(Direction::North.step(0, 1), None);
        assert_eq!(Direction::South.step(0, 1), None);
    }

    #[test]
    fn preference_starts_with_stay() {
        assert_eq!(Direction::PREFERENCE[0], Direction::Stay);
        assert_eq!(Direction::PREFERENCE[1], Direction::North);
        assert_eq!(Direction::PREFERENCE[2], Direction::South);
    }
}
