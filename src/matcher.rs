//! Directional matchers.
//!
//! [`search`] tries the four axes in priority order (horizontal, vertical,
//! down-right diagonal, down-left diagonal) and stops at the first hit. On each
//! scan line or start cell the forward word is tried before the reversed word.
//! Reversal is done by indexing (`len - 1 - i`) rather than building a
//! reversed string.
//!
//! All grid reads go through [`Grid::get`]/[`Grid::get_signed`], so an
//! out-of-range probe is an ordinary mismatch.

use log::trace;
use serde::Serialize;

use crate::direction::{Axis, Direction};
use crate::grid::{Grid, Position};

/// A located word: its text, orientation and the cells it occupies in spelling order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchResult {
    pub word: String,
    pub direction: Direction,
    pub positions: Vec<Position>,
}

/// Records which axes a search actually scanned.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanTrace {
    pub axes: Vec<Axis>,
}

/// The word as the scan sees it: forward or reversed.
#[derive(Clone, Copy)]
struct Needle<'a> {
    chars: &'a [char],
    reversed: bool,
}

impl<'a> Needle<'a> {
    fn forward(chars: &'a [char]) -> Self {
        Needle { chars, reversed: false }
    }

    fn reversed(chars: &'a [char]) -> Self {
        Needle { chars, reversed: true }
    }

    fn len(&self) -> usize {
        self.chars.len()
    }

    fn at(&self, i: usize) -> char {
        if self.reversed {
            self.chars[self.chars.len() - 1 - i]
        } else {
            self.chars[i]
        }
    }
}

/// Locate `word` in `grid`.
///
/// Returns `None` if the word (or its reverse) appears on no axis, or if the
/// word is empty.
#[must_use]
pub fn search(grid: &Grid, word: &str) -> Option<MatchResult> {
    search_traced(grid, word, &mut ScanTrace::default())
}

/// [`search`], additionally recording every axis scanned into `trace`.
pub fn search_traced(grid: &Grid, word: &str, trace: &mut ScanTrace) -> Option<MatchResult> {
    let chars: Vec<char> = word.chars().collect();
    if chars.is_empty() {
        return None;
    }

    for axis in Axis::ALL {
        trace.axes.push(axis);
        trace!("scanning {axis:?} for {word}");

        let hit = match axis {
            Axis::Horizontal => search_horizontal(grid, &chars),
            Axis::Vertical => search_vertical(grid, &chars),
            Axis::DiagonalDownRight | Axis::DiagonalDownLeft => search_diagonal(grid, &chars, axis),
        };

        if let Some((direction, anchor)) = hit {
            let positions = direction.positions(anchor, chars.len())?;
            return Some(MatchResult { word: word.to_string(), direction, positions });
        }
    }

    None
}

/// Rows top to bottom; forward before reverse within a row.
fn search_horizontal(grid: &Grid, word: &[char]) -> Option<(Direction, Position)> {
    for row in 0..grid.num_rows() {
        let cell = |k: usize| grid.get(Position::new(row, k));

        if let Some(col) = find_in_line(grid.num_cols(), cell, Needle::forward(word)) {
            return Some((Direction::Right, Position::new(row, col)));
        }
        if let Some(col) = find_in_line(grid.num_cols(), cell, Needle::reversed(word)) {
            return Some((Direction::Left, Position::new(row, col)));
        }
    }
    None
}

/// Columns left to right; forward before reverse within a column.
fn search_vertical(grid: &Grid, word: &[char]) -> Option<(Direction, Position)> {
    for col in 0..grid.num_cols() {
        let cell = |k: usize| grid.get(Position::new(k, col));

        if let Some(row) = find_in_line(grid.num_rows(), cell, Needle::forward(word)) {
            return Some((Direction::Down, Position::new(row, col)));
        }
        if let Some(row) = find_in_line(grid.num_rows(), cell, Needle::reversed(word)) {
            return Some((Direction::Up, Position::new(row, col)));
        }
    }
    None
}

/// Every start cell row-major; forward before reverse at each cell.
fn search_diagonal(grid: &Grid, word: &[char], axis: Axis) -> Option<(Direction, Position)> {
    let (row_step, col_step) = axis.step();

    for row in 0..grid.num_rows() {
        for col in 0..grid.num_cols() {
            let (r, c) = (row as isize, col as isize);
            if check_needle(grid, Needle::forward(word), r, c, row_step, col_step) {
                return Some((axis.forward(), Position::new(row, col)));
            }
            if check_needle(grid, Needle::reversed(word), r, c, row_step, col_step) {
                return Some((axis.backward(), Position::new(row, col)));
            }
        }
    }
    None
}

/// First index `k` in a line of `line_len` cells where the needle starts.
fn find_in_line<F>(line_len: usize, cell: F, needle: Needle<'_>) -> Option<usize>
where
    F: Fn(usize) -> Option<char>,
{
    let len = needle.len();
    if len > line_len {
        return None;
    }
    (0..=line_len - len).find(|&start| (0..len).all(|i| cell(start + i) == Some(needle.at(i))))
}

/// Whether `word` is spelled starting at `(start_row, start_col)` and stepping by
/// `(row_step, col_step)`.
///
/// Any cell outside the grid makes this `false`; it never panics.
#[must_use]
pub fn check_diagonal(
    grid: &Grid,
    word: &[char],
    start_row: isize,
    start_col: isize,
    row_step: isize,
    col_step: isize,
) -> bool {
    check_needle(grid, Needle::forward(word), start_row, start_col, row_step, col_step)
}

fn check_needle(
    grid: &Grid,
    needle: Needle<'_>,
    start_row: isize,
    start_col: isize,
    row_step: isize,
    col_step: isize,
) -> bool {
    (0..needle.len()).all(|i| {
        let i_signed = i as isize;
        let r = start_row + i_signed * row_step;
        let c = start_col + i_signed * col_step;
        grid.get_signed(r, c) == Some(needle.at(i))
    })
}
