//! `word_list` — the words to look for in a puzzle.
//!
//! Words are entered separated by spaces (the CLI also accepts a file, where
//! newlines work as separators too). Parsing is deliberately light:
//! - tokens are split on whitespace, so runs of spaces never produce empty words;
//! - case is preserved, since matching is case-sensitive;
//! - order is preserved and duplicates are kept, because result order follows list order.
//!
//! Like the grid parser, `parse_from_str(...)` works everywhere (including
//! WASM), while `load_from_path(...)` is a native-only convenience.

#[cfg(not(target_arch = "wasm32"))]
use crate::errors::GridError;

/// Ordered list of words to search for.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    /// Example: `["ALKA", "HORA", "JUTA", ...]`
    pub words: Vec<String>,
}

impl WordList {
    /// Parse a whitespace-separated word list.
    ///
    /// # Example
    /// ```
    /// use osmismerka::word_list::WordList;
    /// let list = WordList::parse_from_str("CAT  DOG OWL ");
    /// assert_eq!(list.words, vec!["CAT", "DOG", "OWL"]);
    /// ```
    #[must_use]
    pub fn parse_from_str(contents: &str) -> WordList {
        let words = contents.split_whitespace().map(str::to_string).collect();
        WordList { words }
    }

    /// Native-only convenience method: read from a file path and parse.
    ///
    /// # Errors
    ///
    /// Will return [`GridError::Io`] if unable to read a file at `path`.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<WordList, GridError> {
        let path_ref = path.as_ref();
        let data = std::fs::read_to_string(path_ref)
            .map_err(|source| GridError::Io { path: path_ref.to_path_buf(), source })?;
        Ok(Self::parse_from_str(&data))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for WordList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        WordList { words: iter.into_iter().map(|s| s.as_ref().to_string()).collect() }
    }
}
