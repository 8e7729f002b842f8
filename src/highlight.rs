//! Hover highlight state: the cells of whichever result is currently pointed at.

use crate::grid::Position;
use crate::matcher::MatchResult;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HighlightSet {
    positions: Vec<Position>,
}

impl HighlightSet {
    /// Replace the highlight with the cells of `result`.
    pub fn highlight(&mut self, result: &MatchResult) {
        self.highlight_positions(&result.positions);
    }

    pub fn highlight_positions(&mut self, positions: &[Position]) {
        self.positions.clear();
        self.positions.extend_from_slice(positions);
    }

    pub fn clear(&mut self) {
        self.positions.clear();
    }

    #[must_use]
    pub fn is_highlighted(&self, row: usize, col: usize) -> bool {
        self.positions.contains(&Position::new(row, col))
    }

    #[must_use]
    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}
