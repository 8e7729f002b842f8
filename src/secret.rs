//! Secret-message derivation: the letters no found word uses, read row-major.

use std::collections::HashSet;

use serde::Serialize;

use crate::grid::{Grid, Position};
use crate::matcher::MatchResult;

/// Residual text of a solved puzzle and the cells it came from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SecretMessage {
    /// Uncovered characters in row-major order, trimmed of surrounding whitespace.
    pub text: String,
    /// Every uncovered cell in row-major order (not affected by the trim).
    pub positions: Vec<Position>,
}

/// Collect the cells of `grid` not covered by any of `matches`.
#[must_use]
pub fn generate_secret_message(grid: &Grid, matches: &[MatchResult]) -> SecretMessage {
    let covered: HashSet<Position> = matches
        .iter()
        .flat_map(|m| m.positions.iter().copied())
        .collect();

    let mut text = String::new();
    let mut positions = Vec::new();
    for (pos, c) in grid.cells() {
        if !covered.contains(&pos) {
            text.push(c);
            positions.push(pos);
        }
    }

    SecretMessage { text: text.trim().to_string(), positions }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::direction::Direction;

    fn covering(word: &str, positions: &[(usize, usize)]) -> MatchResult {
        MatchResult {
            word: word.to_string(),
            direction: Direction::Right,
            positions: positions.iter().map(|&p| p.into()).collect(),
        }
    }

    #[test]
    fn test_no_matches_gives_whole_grid() {
        let grid = Grid::new(&["AB", "CD"]).unwrap();
        let secret = generate_secret_message(&grid, &[]);
        assert_eq!(secret.text, "ABCD");
        assert_eq!(secret.positions.len(), 4);
    }

    #[test]
    fn test_covered_cells_skipped() {
        let grid = Grid::new(&["CAT", "DOG", "OWL"]).unwrap();
        let secret = generate_secret_message(&grid, &[covering("CAT", &[(0, 0), (0, 1), (0, 2)])]);
        assert_eq!(secret.text, "DOGOWL");
        assert_eq!(secret.positions.first(), Some(&Position::new(1, 0)));
        assert_eq!(secret.positions.last(), Some(&Position::new(2, 2)));
    }

    #[test]
    fn test_overlapping_matches_counted_once() {
        let grid = Grid::new(&["AB", "CD"]).unwrap();
        let matches = [covering("AB", &[(0, 0), (0, 1)]), covering("AC", &[(0, 0), (1, 0)])];
        let secret = generate_secret_message(&grid, &matches);
        assert_eq!(secret.text, "D");
        assert_eq!(secret.positions, vec![Position::new(1, 1)]);
    }

    #[test]
    fn test_edge_whitespace_trimmed_but_positions_kept() {
        let grid = Grid::new(&[" AB", "CD "]).unwrap();
        let secret = generate_secret_message(&grid, &[]);
        assert_eq!(secret.text, "ABCD");
        assert_eq!(secret.positions.len(), 6);
    }

    #[test]
    fn test_fully_covered_grid() {
        let grid = Grid::new(&["AB"]).unwrap();
        let secret = generate_secret_message(&grid, &[covering("AB", &[(0, 0), (0, 1)])]);
        assert!(secret.text.is_empty());
        assert!(secret.positions.is_empty());
    }
}
