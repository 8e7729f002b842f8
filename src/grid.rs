//! The character grid a puzzle is played on.
//!
//! A [`Grid`] is an immutable, rectangular block of `char`s addressed by
//! [`Position`] (`row`, `col`, both 0-indexed from the top-left corner).
//! Every accessor is bounds-checked: asking for a cell outside the grid
//! yields `None` instead of panicking, which is what lets the diagonal
//! scanners probe freely past the edges.

use std::fmt;

use serde::Serialize;

use crate::errors::GridError;

/// A `(row, col)` coordinate inside a [`Grid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Position { row, col }
    }

    /// Move by a signed offset, or `None` if either coordinate would go negative.
    #[must_use]
    pub fn offset(self, d_row: isize, d_col: isize) -> Option<Position> {
        Some(Position {
            row: self.row.checked_add_signed(d_row)?,
            col: self.col.checked_add_signed(d_col)?,
        })
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Position { row, col }
    }
}

/// Rectangular grid of characters, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Grid {
    cells: Vec<char>,
    num_rows: usize,
    num_cols: usize,
}

impl Grid {
    /// Build a grid from its rows.
    ///
    /// Rows are taken verbatim (no trimming); each `char` is one cell.
    /// An empty slice gives an empty grid, which is valid and simply
    /// contains no words.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::RaggedRows`] if any row's length differs from the first row's.
    pub fn new<S: AsRef<str>>(rows: &[S]) -> Result<Grid, GridError> {
        let num_cols = rows.first().map_or(0, |r| r.as_ref().chars().count());
        let mut cells = Vec::with_capacity(rows.len() * num_cols);

        for (row_idx, row) in rows.iter().enumerate() {
            let before = cells.len();
            cells.extend(row.as_ref().chars());
            let len = cells.len() - before;
            if len != num_cols {
                return Err(GridError::RaggedRows { row: row_idx, len, expected: num_cols });
            }
        }

        Ok(Grid { cells, num_rows: rows.len(), num_cols })
    }

    #[must_use]
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    #[must_use]
    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The character at `pos`, or `None` if it lies outside the grid.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<char> {
        if pos.row < self.num_rows && pos.col < self.num_cols {
            Some(self.cells[pos.row * self.num_cols + pos.col])
        } else {
            None
        }
    }

    /// Signed lookup used by the diagonal scans; negative indices are simply out of bounds.
    #[must_use]
    pub fn get_signed(&self, row: isize, col: isize) -> Option<char> {
        let row = usize::try_from(row).ok()?;
        let col = usize::try_from(col).ok()?;
        self.get(Position { row, col })
    }

    /// One row as a slice, or `None` past the last row.
    #[must_use]
    pub fn row(&self, row: usize) -> Option<&[char]> {
        if row < self.num_rows {
            let start = row * self.num_cols;
            Some(&self.cells[start..start + self.num_cols])
        } else {
            None
        }
    }

    /// Every cell with its position, row-major.
    pub fn cells(&self) -> impl Iterator<Item = (Position, char)> + '_ {
        let num_cols = self.num_cols.max(1);
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &c)| (Position::new(i / num_cols, i % num_cols), c))
    }

    /// Rows rendered back to strings.
    #[must_use]
    pub fn to_rows(&self) -> Vec<String> {
        (0..self.num_rows)
            .filter_map(|r| self.row(r))
            .map(|row| row.iter().collect())
            .collect()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.to_rows().iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{row}")?;
        }
        Ok(())
    }
}
