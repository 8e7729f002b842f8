//! The built-in puzzle shipped with the solver.
//!
//! An 11×10 Czech osmisměrka with 30 hidden words; the unused letters spell
//! `PACIFIK`.

use crate::grid::Grid;
use crate::word_list::WordList;

pub const DEFAULT_GRID: [&str; 11] = [
    "KALTJSHODA",
    "LLPUKLTOAT",
    "AKTAAKAARR",
    "SAANLAKPEA",
    "ARPOVPTOKK",
    "RHOMOLICEA",
    "KOLSPEKESR",
    "ORAOCAALTP",
    "SPOKVSTIAA",
    "MATKAFTKAT",
    "AIAKOSTKAY",
];

pub const DEFAULT_WORDS: [&str; 30] = [
    "ALKA", "HORA", "JUTA", "KAPLE", "KARPATY", "KARTA", "KASA", "KAVKA",
    "KLAS", "KOSMONAUT", "KOST", "KROK", "LAPKA", "MATKA", "OKRASA", "OPAT",
    "OSMA", "PAKT", "PATKA", "PIETA", "POCEL", "POVLAK", "PROHRA", "SEKERA",
    "SHODA", "SOPKA", "TAKT", "TAKTIKA", "TLAK", "VOLHA",
];

/// The built-in grid. Not run through the custom-grid validator (it is 11×10).
#[must_use]
pub fn default_grid() -> Grid {
    Grid::new(&DEFAULT_GRID).expect("built-in grid rows all have the same length")
}

#[must_use]
pub fn default_words() -> WordList {
    DEFAULT_WORDS.iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_grid_shape() {
        let grid = default_grid();
        assert_eq!(grid.num_rows(), 11);
        assert_eq!(grid.num_cols(), 10);
    }

    #[test]
    fn test_default_words() {
        let words = default_words();
        assert_eq!(words.len(), 30);
        assert_eq!(words.words.first().map(String::as_str), Some("ALKA"));
    }
}
