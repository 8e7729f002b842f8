//! The word-search engine: a grid, a word list, and the report derived from them.
//!
//! # Examples
//!
//! ```
//! use osmismerka::engine::WordSearchEngine;
//! use osmismerka::grid::Grid;
//! use osmismerka::word_list::WordList;
//!
//! let grid = Grid::new(&["CAT", "DOG", "OWL"])?;
//! let engine = WordSearchEngine::new(grid, WordList::parse_from_str("CAT"));
//!
//! let report = engine.report();
//! assert_eq!(report.matches.len(), 1);
//! assert_eq!(report.secret.text, "DOGOWL");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! The engine keeps the latest [`SearchReport`]; it is rebuilt from scratch
//! whenever the grid or word list is replaced. [`WordSearchEngine::search_all_words`]
//! only borrows the engine, so a report can also be computed on demand
//! without touching the cached one.

use instant::Instant;
use log::{debug, info};
use serde::Serialize;

use crate::errors::GridError;
use crate::grid::Grid;
use crate::matcher::{self, MatchResult};
use crate::puzzle;
use crate::secret::{generate_secret_message, SecretMessage};
use crate::validator::GridValidator;
use crate::word_list::WordList;

/// Everything a full search produces.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchReport {
    /// One entry per found word, in word-list order.
    pub matches: Vec<MatchResult>,
    pub secret: SecretMessage,
}

impl SearchReport {
    /// Words from `words` with no match, in list order.
    #[must_use]
    pub fn missing<'a>(&self, words: &'a WordList) -> Vec<&'a str> {
        words
            .words
            .iter()
            .filter(|w| !self.matches.iter().any(|m| &m.word == *w))
            .map(String::as_str)
            .collect()
    }

    /// The match for `word`, if it was found.
    #[must_use]
    pub fn find(&self, word: &str) -> Option<&MatchResult> {
        self.matches.iter().find(|m| m.word == word)
    }
}

#[derive(Debug, Clone)]
pub struct WordSearchEngine {
    grid: Grid,
    words: WordList,
    report: SearchReport,
}

impl WordSearchEngine {
    /// Build an engine and run the initial search.
    #[must_use]
    pub fn new(grid: Grid, words: WordList) -> Self {
        let mut engine = WordSearchEngine { grid, words, report: SearchReport::default() };
        engine.report = engine.search_all_words();
        engine
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub fn words(&self) -> &WordList {
        &self.words
    }

    /// The report from the most recent search.
    #[must_use]
    pub fn report(&self) -> &SearchReport {
        &self.report
    }

    /// Locate a single word in the current grid.
    #[must_use]
    pub fn search(&self, word: &str) -> Option<MatchResult> {
        matcher::search(&self.grid, word)
    }

    /// Search every word in list order and derive the secret message.
    #[must_use]
    pub fn search_all_words(&self) -> SearchReport {
        let start = Instant::now();

        let matches: Vec<MatchResult> = self
            .words
            .words
            .iter()
            .filter_map(|word| {
                let found = self.search(word);
                match &found {
                    Some(m) => debug!("{word}: {} at {}", m.direction, m.positions[0]),
                    None => debug!("{word}: not found"),
                }
                found
            })
            .collect();

        let secret = generate_secret_message(&self.grid, &matches);

        info!(
            "found {}/{} words in {:?}; secret message \"{}\"",
            matches.len(),
            self.words.len(),
            start.elapsed(),
            secret.text
        );

        SearchReport { matches, secret }
    }

    /// Swap in a new grid and word list and recompute the report.
    pub fn replace(&mut self, grid: Grid, words: WordList) -> &SearchReport {
        self.grid = grid;
        self.words = words;
        self.report = self.search_all_words();
        &self.report
    }

    /// Validate user-entered text and, if it passes, load it as the new puzzle.
    ///
    /// # Errors
    ///
    /// Returns the validation error and leaves the engine untouched if the grid
    /// text is not an acceptable square.
    pub fn set_custom_puzzle(
        &mut self,
        validator: &GridValidator,
        grid_text: &str,
        words_text: &str,
    ) -> Result<&SearchReport, GridError> {
        let puzzle = validator.validate(grid_text, words_text)?;
        Ok(self.replace(puzzle.grid, puzzle.words))
    }
}

impl Default for WordSearchEngine {
    /// The built-in puzzle.
    fn default() -> Self {
        WordSearchEngine::new(puzzle::default_grid(), puzzle::default_words())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::direction::Direction;
    use crate::grid::Position;

    fn engine(rows: &[&str], words: &str) -> WordSearchEngine {
        WordSearchEngine::new(Grid::new(rows).unwrap(), WordList::parse_from_str(words))
    }

    #[test]
    fn test_cat_dog_owl() {
        let e = engine(&["CAT", "DOG", "OWL"], "CAT");
        let report = e.report();
        assert_eq!(
            report.matches,
            vec![MatchResult {
                word: "CAT".to_string(),
                direction: Direction::Right,
                positions: vec![Position::new(0, 0), Position::new(0, 1), Position::new(0, 2)],
            }]
        );
        assert_eq!(report.secret.text, "DOGOWL");
        assert_eq!(
            report.secret.positions,
            (1..3).flat_map(|r| (0..3).map(move |c| Position::new(r, c))).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_missing_words_are_omitted() {
        let e = engine(&["CAT", "DOG", "OWL"], "EMU DOG YAK");
        let report = e.report();
        assert_eq!(report.matches.len(), 1);
        assert_eq!(report.matches[0].word, "DOG");
        assert_eq!(report.missing(e.words()), vec!["EMU", "YAK"]);
        assert!(report.find("DOG").is_some());
        assert!(report.find("EMU").is_none());
    }

    #[test]
    fn test_results_follow_word_list_order() {
        let e = engine(&["CAT", "DOG", "OWL"], "OWL CAT");
        let words: Vec<_> = e.report().matches.iter().map(|m| m.word.as_str()).collect();
        assert_eq!(words, vec!["OWL", "CAT"]);
    }

    #[test]
    fn test_duplicate_words_reported_twice() {
        let e = engine(&["CAT", "DOG", "OWL"], "CAT CAT");
        assert_eq!(e.report().matches.len(), 2);
        assert_eq!(e.report().secret.text, "DOGOWL");
    }

    #[test]
    fn test_search_all_words_is_idempotent() {
        let e = WordSearchEngine::default();
        assert_eq!(e.search_all_words(), e.search_all_words());
        assert_eq!(&e.search_all_words(), e.report());
    }

    #[test]
    fn test_default_puzzle_secret() {
        let e = WordSearchEngine::default();
        assert_eq!(e.report().matches.len(), 30);
        assert_eq!(e.report().secret.text, "PACIFIK");
    }

    #[test]
    fn test_replace_recomputes() {
        let mut e = engine(&["CAT", "DOG", "OWL"], "CAT");
        let report = e.replace(Grid::new(&["AB", "CD"]).unwrap(), WordList::parse_from_str("DB"));
        assert_eq!(report.matches[0].direction, Direction::Up);
        assert_eq!(report.secret.text, "AC");
        assert_eq!(e.grid().num_rows(), 2);
    }

    #[test]
    fn test_invalid_custom_puzzle_leaves_engine_untouched() {
        let mut e = WordSearchEngine::default();
        let before = e.report().clone();
        let err = e.set_custom_puzzle(&GridValidator::default(), "ABC\nDEF\nGHI", "ABC").unwrap_err();
        assert_eq!(err.code(), "G001");
        assert_eq!(e.report(), &before);
        assert_eq!(e.grid().num_rows(), 11);
        assert_eq!(e.words().len(), 30);
    }

    #[test]
    fn test_valid_custom_puzzle_replaces_state() {
        let mut e = WordSearchEngine::default();
        let grid_text = vec!["ABCDEFGHIJ"; 10].join("\n");
        let report = e.set_custom_puzzle(&GridValidator::default(), &grid_text, "CDE JIH").unwrap();
        assert_eq!(report.matches.len(), 2);
        assert_eq!(report.matches[1].direction, Direction::Left);
        assert_eq!(report.secret.positions.len(), 100 - 6);
        assert_eq!(e.words().words, vec!["CDE", "JIH"]);
    }

    #[test]
    fn test_empty_word_list() {
        let e = engine(&["AB", "CD"], "");
        assert!(e.report().matches.is_empty());
        assert_eq!(e.report().secret.text, "ABCD");
    }
}
