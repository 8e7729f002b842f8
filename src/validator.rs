//! Custom-puzzle ingestion.
//!
//! A user-entered grid is raw text, one row per line. Each line is trimmed;
//! the grid is accepted only if it has between [`MIN_GRID_SIZE`] and
//! [`MAX_GRID_SIZE`] rows and every row is exactly as long as the row count
//! (square). The search core handles any rectangle, but entered puzzles are
//! held to this stricter shape.
//!
//! Every `\n`-separated line counts as a row, including blank lines at the
//! end of the text.

use log::{debug, warn};

use crate::errors::GridError;
use crate::grid::Grid;
use crate::word_list::WordList;

pub const MIN_GRID_SIZE: usize = 10;
pub const MAX_GRID_SIZE: usize = 20;

/// A grid and word list that passed validation, ready to hand to the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomPuzzle {
    pub grid: Grid,
    pub words: WordList,
}

/// Checks the shape of user-entered grids.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridValidator {
    pub min_size: usize,
    pub max_size: usize,
}

impl Default for GridValidator {
    fn default() -> Self {
        GridValidator { min_size: MIN_GRID_SIZE, max_size: MAX_GRID_SIZE }
    }
}

impl GridValidator {
    /// Parse and validate grid text.
    ///
    /// # Errors
    ///
    /// - [`GridError::RowCountOutOfRange`] if the number of rows is outside `min_size..=max_size`
    /// - [`GridError::NotSquare`] for the first row whose length differs from the row count
    pub fn validate_grid(&self, text: &str) -> Result<Grid, GridError> {
        let rows: Vec<&str> = text.split('\n').map(str::trim).collect();
        let size = rows.len();

        if !(self.min_size..=self.max_size).contains(&size) {
            warn!("rejected grid with {size} rows");
            return Err(GridError::RowCountOutOfRange { rows: size, min: self.min_size, max: self.max_size });
        }

        if let Some((row, len)) = rows
            .iter()
            .map(|r| r.chars().count())
            .enumerate()
            .find(|&(_, len)| len != size)
        {
            warn!("rejected grid: row {row} has {len} characters, expected {size}");
            return Err(GridError::NotSquare { row, len, expected: size });
        }

        debug!("accepted {size}x{size} grid");
        Grid::new(&rows)
    }

    /// Validate a grid and parse its accompanying word list together.
    ///
    /// # Errors
    ///
    /// Any error from [`GridValidator::validate_grid`]; the word list itself cannot fail.
    pub fn validate(&self, grid_text: &str, words_text: &str) -> Result<CustomPuzzle, GridError> {
        let grid = self.validate_grid(grid_text)?;
        let words = WordList::parse_from_str(words_text);
        Ok(CustomPuzzle { grid, words })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(size: usize) -> String {
        (0..size)
            .map(|r| (0..size).map(|c| char::from(b'A' + ((r + c) % 26) as u8)).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_accepts_boundary_sizes() {
        let v = GridValidator::default();
        assert_eq!(v.validate_grid(&square(10)).unwrap().num_rows(), 10);
        assert_eq!(v.validate_grid(&square(20)).unwrap().num_cols(), 20);
    }

    #[test]
    fn test_rejects_too_small_and_too_large() {
        let v = GridValidator::default();
        assert!(matches!(v.validate_grid(&square(9)), Err(GridError::RowCountOutOfRange { rows: 9, .. })));
        assert!(matches!(v.validate_grid(&square(21)), Err(GridError::RowCountOutOfRange { rows: 21, .. })));
    }

    #[test]
    fn test_rejects_non_square() {
        let v = GridValidator::default();
        let mut text = square(10);
        text.push('X');
        let err = v.validate_grid(&text).unwrap_err();
        assert!(matches!(err, GridError::NotSquare { row: 9, len: 11, expected: 10 }));
    }

    #[test]
    fn test_rejects_rectangular_grid() {
        let v = GridValidator::default();
        let text = vec!["ABCDEFGHIJKL"; 10].join("\n");
        assert!(matches!(v.validate_grid(&text), Err(GridError::NotSquare { row: 0, len: 12, expected: 10 })));
    }

    #[test]
    fn test_rows_are_trimmed() {
        let v = GridValidator::default();
        let text = square(10)
            .lines()
            .map(|l| format!("  {l}\t"))
            .collect::<Vec<_>>()
            .join("\r\n");
        let grid = v.validate_grid(&text).unwrap();
        assert_eq!(grid.to_string(), square(10));
    }

    #[test]
    fn test_trailing_newline_counts_as_row() {
        let v = GridValidator::default();
        let err = v.validate_grid(&format!("{}\n", square(10))).unwrap_err();
        assert!(matches!(err, GridError::NotSquare { row: 0, len: 10, expected: 11 }));
    }

    #[test]
    fn test_trailing_blank_and_whitespace_rows_rejected_alike() {
        let v = GridValidator::default();
        let blank = v.validate_grid(&format!("{}\n\n", square(10))).unwrap_err();
        assert!(matches!(blank, GridError::NotSquare { row: 0, len: 10, expected: 12 }));

        let spaces = v.validate_grid(&format!("{}\n   ", square(10))).unwrap_err();
        assert!(matches!(spaces, GridError::NotSquare { row: 0, len: 10, expected: 11 }));

        let blank_line = v.validate_grid(&format!("{}\n", square(10))).unwrap_err();
        assert_eq!(blank_line.to_string(), spaces.to_string());
    }

    #[test]
    fn test_empty_text_rejected() {
        let v = GridValidator::default();
        assert!(matches!(v.validate_grid(""), Err(GridError::RowCountOutOfRange { rows: 1, .. })));
    }

    #[test]
    fn test_validate_with_words() {
        let v = GridValidator::default();
        let puzzle = v.validate(&square(12), "ABC  BCD").unwrap();
        assert_eq!(puzzle.grid.num_rows(), 12);
        assert_eq!(puzzle.words.words, vec!["ABC", "BCD"]);
    }

    #[test]
    fn test_custom_bounds() {
        let v = GridValidator { min_size: 2, max_size: 3 };
        assert!(v.validate_grid("AB\nCD").is_ok());
        assert!(v.validate_grid("A").is_err());
    }
}
