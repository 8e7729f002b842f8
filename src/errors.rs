//! Error types for grid construction and custom-puzzle ingestion.
//!
//! The search itself never fails: a missing word is simply absent from the
//! results. Errors only arise when a grid or word list is built from outside
//! input.
//!
//! # Error Codes
//!
//! - G001: `RowCountOutOfRange` (Grid has too few or too many rows)
//! - G002: `NotSquare` (A row's length differs from the row count)
//! - G003: `RaggedRows` (Rows of differing lengths)
//! - G004: `Io` (Reading a grid or word-list file failed)
//!
//! # Examples
//!
//! ```
//! use osmismerka::errors::GridError;
//! use osmismerka::validator::GridValidator;
//!
//! match GridValidator::default().validate_grid("ABC\nDEF\nGHI") {
//!     Err(e) => {
//!         assert_eq!(e.code(), "G001");
//!         println!("{}", e.display_detailed());
//!     }
//!     Ok(_) => unreachable!("3x3 is below the minimum size"),
//! }
//! ```

use std::io;
use std::path::PathBuf;

/// Errors raised while building a [`Grid`](crate::grid::Grid) or loading puzzle input.
#[derive(Debug, thiserror::Error)]
pub enum GridError {
    #[error("grid has {rows} rows (must be between {min} and {max})")]
    RowCountOutOfRange { rows: usize, min: usize, max: usize },

    #[error("row {row} has {len} characters but the grid has {expected} rows")]
    NotSquare { row: usize, len: usize, expected: usize },

    #[error("row {row} has {len} characters, expected {expected}")]
    RaggedRows { row: usize, len: usize, expected: usize },

    #[error("failed to read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl GridError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            GridError::RowCountOutOfRange { .. } => "G001",
            GridError::NotSquare { .. } => "G002",
            GridError::RaggedRows { .. } => "G003",
            GridError::Io { .. } => "G004",
        }
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            GridError::RowCountOutOfRange { .. } => "Grid has too few or too many rows",
            GridError::NotSquare { .. } => "Grid is not square",
            GridError::RaggedRows { .. } => "Grid rows have differing lengths",
            GridError::Io { .. } => "Failed to read puzzle input",
        }
    }

    /// Returns detailed explanation of this error type (for documentation)
    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            GridError::RowCountOutOfRange { .. } => "Custom grids are entered one row per line. The number of lines (after trimming each one) must be between 10 and 20 inclusive.",
            GridError::NotSquare { .. } => "Custom grids must be square: every row needs exactly as many characters as there are rows.",
            GridError::RaggedRows { .. } => "A grid is a rectangle of single characters, so every row must have the same number of characters as the first row.",
            GridError::Io { .. } => "The grid or word-list file could not be opened or is not valid UTF-8.",
        }
    }

    /// Returns a helpful suggestion for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            GridError::RowCountOutOfRange { .. } => Some("Enter between 10 and 20 rows, one per line"),
            GridError::NotSquare { .. } => Some("A 12-row grid needs 12 letters in every row"),
            GridError::RaggedRows { .. } => Some("Pad or trim rows so they all have the same length"),
            GridError::Io { .. } => None,
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

impl From<GridError> for io::Error {
    fn from(ge: GridError) -> Self {
        match ge {
            GridError::Io { source, .. } => source,
            other => io::Error::new(io::ErrorKind::InvalidInput, other.to_string()),
        }
    }
}

/// Helper function to format error messages with code and optional help text
pub(crate) fn format_error_with_code_and_help(base_msg: &str, code: &str, help: Option<&str>) -> String {
    if let Some(help_text) = help {
        format!("{base_msg} ({code})\n{help_text}")
    } else {
        format!("{base_msg} ({code})")
    }
}
