//! Reading directions and the coordinate generator.
//!
//! A word can be read along four [`Axis`] lines, each in two senses, which
//! gives the eight [`Direction`]s. Every direction reduces to one affine
//! formula: cell `i` of a word of length `len` anchored at `(r, c)` is
//!
//! ```text
//! k = i               (forward directions)
//! k = len - 1 - i     (reversed directions)
//! (r + k * row_step, c + k * col_step)
//! ```
//!
//! where the anchor is the first cell the *scan* touched (the top/left end
//! of the match along its axis). For reversed directions this means the
//! positions run from the far end back to the anchor, so reading the grid at
//! the returned positions in order always spells the word forward.

use std::fmt;

use serde::Serialize;

use crate::grid::Position;

/// One of the four scan lines, in search priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    /// Rows, left to right.
    Horizontal,
    /// Columns, top to bottom.
    Vertical,
    /// Top-left to bottom-right.
    DiagonalDownRight,
    /// Top-right to bottom-left.
    DiagonalDownLeft,
}

impl Axis {
    /// All axes in the order they are searched.
    pub const ALL: [Axis; 4] = [
        Axis::Horizontal,
        Axis::Vertical,
        Axis::DiagonalDownRight,
        Axis::DiagonalDownLeft,
    ];

    /// `(row_step, col_step)` of a scan along this axis.
    #[must_use]
    pub const fn step(self) -> (isize, isize) {
        match self {
            Axis::Horizontal => (0, 1),
            Axis::Vertical => (1, 0),
            Axis::DiagonalDownRight => (1, 1),
            Axis::DiagonalDownLeft => (1, -1),
        }
    }

    /// Direction reported when the word is read along the scan.
    #[must_use]
    pub const fn forward(self) -> Direction {
        match self {
            Axis::Horizontal => Direction::Right,
            Axis::Vertical => Direction::Down,
            Axis::DiagonalDownRight => Direction::DownRight,
            Axis::DiagonalDownLeft => Direction::DownLeft,
        }
    }

    /// Direction reported when the reversed word is read along the scan.
    #[must_use]
    pub const fn backward(self) -> Direction {
        match self {
            Axis::Horizontal => Direction::Left,
            Axis::Vertical => Direction::Up,
            Axis::DiagonalDownRight => Direction::UpLeft,
            Axis::DiagonalDownLeft => Direction::UpRight,
        }
    }
}

/// The eight orientations a word can be hidden in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Right,
    Left,
    Down,
    Up,
    DownRight,
    UpLeft,
    DownLeft,
    UpRight,
}

impl Direction {
    /// All directions in search priority order (forward before reverse on each axis).
    pub const ALL: [Direction; 8] = [
        Direction::Right,
        Direction::Left,
        Direction::Down,
        Direction::Up,
        Direction::DownRight,
        Direction::UpLeft,
        Direction::DownLeft,
        Direction::UpRight,
    ];

    #[must_use]
    pub const fn axis(self) -> Axis {
        match self {
            Direction::Right | Direction::Left => Axis::Horizontal,
            Direction::Down | Direction::Up => Axis::Vertical,
            Direction::DownRight | Direction::UpLeft => Axis::DiagonalDownRight,
            Direction::DownLeft | Direction::UpRight => Axis::DiagonalDownLeft,
        }
    }

    /// Whether positions are emitted from the far end of the scan back to the anchor.
    #[must_use]
    pub const fn is_reversed(self) -> bool {
        matches!(self, Direction::Left | Direction::Up | Direction::UpLeft | Direction::UpRight)
    }

    /// Scan vector `(row_step, col_step)`; shared by both senses of an axis.
    #[must_use]
    pub const fn step(self) -> (isize, isize) {
        self.axis().step()
    }

    #[must_use]
    pub const fn arrow(self) -> &'static str {
        match self {
            Direction::Right => "➡️",
            Direction::Left => "⬅️",
            Direction::Down => "⬇️",
            Direction::Up => "⬆️",
            Direction::DownRight => "↘️",
            Direction::UpLeft => "↖️",
            Direction::DownLeft => "↙️",
            Direction::UpRight => "↗️",
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Direction::Right => "right",
            Direction::Left => "left",
            Direction::Down => "down",
            Direction::Up => "up",
            Direction::DownRight => "down_right",
            Direction::UpLeft => "up_left",
            Direction::DownLeft => "down_left",
            Direction::UpRight => "up_right",
        }
    }

    /// Cell occupied by letter `i` of a `len`-letter word anchored at `anchor`.
    ///
    /// Returns `None` when the formula would leave the non-negative quadrant
    /// (e.g. a `DownLeft` anchor too close to column 0).
    #[must_use]
    pub fn position_at(self, anchor: Position, len: usize, i: usize) -> Option<Position> {
        let k = if self.is_reversed() { len.checked_sub(i + 1)? } else { i };
        let k = isize::try_from(k).ok()?;
        let (row_step, col_step) = self.step();
        anchor.offset(k * row_step, k * col_step)
    }

    /// Full ordered position sequence for a `len`-letter word anchored at `anchor`.
    ///
    /// Pure: the same inputs always give the same sequence. `None` if any cell
    /// would have a negative coordinate.
    #[must_use]
    pub fn positions(self, anchor: Position, len: usize) -> Option<Vec<Position>> {
        (0..len).map(|i| self.position_at(anchor, len, i)).collect()
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(row: usize, col: usize) -> Position {
        Position::new(row, col)
    }

    #[test]
    fn test_forward_positions() {
        let a = p(2, 3);
        assert_eq!(Direction::Right.positions(a, 3).unwrap(), vec![p(2, 3), p(2, 4), p(2, 5)]);
        assert_eq!(Direction::Down.positions(a, 3).unwrap(), vec![p(2, 3), p(3, 3), p(4, 3)]);
        assert_eq!(Direction::DownRight.positions(a, 3).unwrap(), vec![p(2, 3), p(3, 4), p(4, 5)]);
        assert_eq!(Direction::DownLeft.positions(a, 3).unwrap(), vec![p(2, 3), p(3, 2), p(4, 1)]);
    }

    #[test]
    fn test_reversed_positions() {
        let a = p(2, 3);
        // col + len - i - 1
        assert_eq!(Direction::Left.positions(a, 3).unwrap(), vec![p(2, 5), p(2, 4), p(2, 3)]);
        // row + len - i - 1
        assert_eq!(Direction::Up.positions(a, 3).unwrap(), vec![p(4, 3), p(3, 3), p(2, 3)]);
        // (row + len - i - 1, col + len - i - 1)
        assert_eq!(Direction::UpLeft.positions(a, 3).unwrap(), vec![p(4, 5), p(3, 4), p(2, 3)]);
        // (row + len - i - 1, col - len + i + 1)
        assert_eq!(Direction::UpRight.positions(a, 3).unwrap(), vec![p(4, 1), p(3, 2), p(2, 3)]);
    }

    #[test]
    fn test_positions_are_deterministic() {
        for dir in Direction::ALL {
            let first = dir.positions(p(5, 5), 4);
            for _ in 0..3 {
                assert_eq!(dir.positions(p(5, 5), 4), first, "{dir} not deterministic");
            }
        }
    }

    #[test]
    fn test_reversed_is_forward_backwards() {
        for axis in Axis::ALL {
            let mut fwd = axis.forward().positions(p(4, 4), 4).unwrap();
            let bwd = axis.backward().positions(p(4, 4), 4).unwrap();
            fwd.reverse();
            assert_eq!(fwd, bwd, "{axis:?}");
        }
    }

    #[test]
    fn test_negative_coordinates_are_none() {
        assert_eq!(Direction::DownLeft.positions(p(0, 1), 3), None);
        assert_eq!(Direction::UpRight.positions(p(0, 1), 3), None);
        assert!(Direction::DownLeft.positions(p(0, 2), 3).is_some());
    }

    #[test]
    fn test_zero_length() {
        for dir in Direction::ALL {
            assert_eq!(dir.positions(p(0, 0), 0), Some(vec![]));
        }
    }

    #[test]
    fn test_axis_round_trip() {
        for axis in Axis::ALL {
            assert_eq!(axis.forward().axis(), axis);
            assert_eq!(axis.backward().axis(), axis);
            assert!(!axis.forward().is_reversed());
            assert!(axis.backward().is_reversed());
        }
    }

    #[test]
    fn test_names_unique() {
        let names: std::collections::HashSet<_> = Direction::ALL.iter().map(|d| d.name()).collect();
        assert_eq!(names.len(), 8);
    }
}
