//! Generate error code documentation from the source of truth (the error enum).
//!
//! Reads codes, descriptions, details and help text directly from
//! `GridError` via its `code()`, `description()`, `details()` and `help()` methods.
//!
//! Run with:
//! ```bash
//! cargo run --bin generate_error_docs > docs/ERROR_CODES.md
//! ```

use std::io;
use std::path::PathBuf;

use osmismerka::errors::GridError;
use osmismerka::validator::{MAX_GRID_SIZE, MIN_GRID_SIZE};

/// One sample of each `GridError` variant, in code order.
fn all_grid_error_variants() -> Vec<GridError> {
    vec![
        GridError::RowCountOutOfRange { rows: 8, min: MIN_GRID_SIZE, max: MAX_GRID_SIZE },
        GridError::NotSquare { row: 3, len: 11, expected: 12 },
        GridError::RaggedRows { row: 1, len: 4, expected: 5 },
        GridError::Io {
            path: PathBuf::from("puzzle.txt"),
            source: io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
        },
    ]
}

fn main() {
    println!("# Error Codes\n");
    println!("Grid and puzzle-input errors reported by the solver (codes `G001`-`G004`).");
    println!("Words that cannot be found are not errors; they are simply omitted from the results.\n");

    for error in all_grid_error_variants() {
        println!("### {}: {}\n", error.code(), error.description());
        println!("**Details:** {}\n", error.details());

        if let Some(help_text) = error.help() {
            println!("**How to fix:**");
            println!("```");
            println!("{help_text}");
            println!("```\n");
        }

        println!("**Example error message:**");
        println!("```");
        println!("{error}");
        println!("```\n");

        println!("**Detailed format:**");
        println!("```");
        println!("{}", error.display_detailed());
        println!("```\n");

        println!("---\n");
    }
}
