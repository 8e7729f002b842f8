//! `bench_local.rs` — quick local timing runner (no Criterion)
//!
//! PURPOSE
//! -------
//! - Fast, ad-hoc timing of `search_all_words` on a few fixed puzzles.
//! - Each timed run solves the puzzle `--iterations` times; the median over
//!   `--repeats` runs is reported per puzzle.
//!
//! HOW TO RUN
//! ----------
//! - Optimized build:                `cargo run --bin bench_local --release`
//! - Multiple repeats:               `cargo run --bin bench_local --release -- -r 5`
//! - See all flags:                  `cargo run --bin bench_local -- --help`
//!
//! NOTES
//! -----
//! - Not statistically rigorous; use the same machine and `--release` for comparable numbers.
//! - One warm-up solve per case is done (not included in timing).
//! - The synthetic grids come from a fixed LCG so every run sees the same letters.

use clap::Parser;
use std::hint::black_box;
use std::time::Instant;

use osmismerka::engine::WordSearchEngine;
use osmismerka::grid::Grid;
use osmismerka::puzzle;
use osmismerka::validator::MAX_GRID_SIZE;
use osmismerka::word_list::WordList;

/// Simple local benchmark runner for the word search.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Number of repeats per case (median is reported)
    #[arg(short = 'r', long = "repeats", default_value_t = 3)]
    num_repeats: usize,

    /// Solves per timed run
    #[arg(short = 'i', long = "iterations", default_value_t = 1_000)]
    iterations: usize,
}

struct Case {
    name: &'static str,
    grid: Grid,
    words: WordList,
}

/// Deterministic pseudo-random uppercase rows.
fn synthetic_rows(size: usize, seed: u64) -> Vec<String> {
    let mut state = seed;
    (0..size)
        .map(|_| {
            (0..size)
                .map(|_| {
                    state = state.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1_442_695_040_888_963_407);
                    char::from(b'A' + ((state >> 33) % 26) as u8)
                })
                .collect()
        })
        .collect()
}

/// Plant `word` reading up-right from the bottom-left corner, the last direction searched.
fn plant_up_right(rows: &mut [String], word: &str) {
    let size = rows.len();
    for (i, c) in word.chars().enumerate() {
        let row = size - 1 - i;
        let mut chars: Vec<char> = rows[row].chars().collect();
        chars[i] = c;
        rows[row] = chars.into_iter().collect();
    }
}

fn get_cases() -> Result<Vec<Case>, Box<dyn std::error::Error>> {
    let absent = WordList::parse_from_str("QQQQQ ZZZZZZ XJXJXJ QZQZQZQZ JJJJ VVVVVVVVVV");

    let mut planted_rows = synthetic_rows(MAX_GRID_SIZE, 7);
    plant_up_right(&mut planted_rows, "KOSMONAUT");

    Ok(vec![
        Case { name: "built-in 11x10 puzzle", grid: puzzle::default_grid(), words: puzzle::default_words() },
        Case { name: "20x20, absent words", grid: Grid::new(&synthetic_rows(MAX_GRID_SIZE, 42))?, words: absent },
        Case {
            name: "20x20, word on last axis",
            grid: Grid::new(&planted_rows)?,
            words: WordList::parse_from_str("KOSMONAUT"),
        },
    ])
}

/// Small helper: robust central tendency for small samples.
fn median(mut xs: Vec<f64>) -> f64 {
    if xs.is_empty() {
        return 0.0;
    }
    xs.sort_by(f64::total_cmp);
    let n = xs.len();
    if n % 2 == 1 {
        xs[n / 2]
    } else {
        0.5 * (xs[n / 2 - 1] + xs[n / 2])
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let cases = get_cases()?;
    let mut summary: Vec<(&str, f64, usize)> = Vec::with_capacity(cases.len());

    for (idx, case) in cases.into_iter().enumerate() {
        eprintln!("\n[{:02}] {}", idx + 1, case.name);

        let engine = WordSearchEngine::new(case.grid, case.words);
        let found = engine.report().matches.len();

        let mut times = Vec::with_capacity(cli.num_repeats);
        for rep in 0..cli.num_repeats {
            let t = Instant::now();
            for _ in 0..cli.iterations {
                let _ = black_box(black_box(&engine).search_all_words());
            }
            let per_solve_us = t.elapsed().as_secs_f64() * 1e6 / cli.iterations.max(1) as f64;
            times.push(per_solve_us);
            eprintln!("  run {:>2}/{:>2}: {per_solve_us:.2}µs per solve", rep + 1, cli.num_repeats);
        }

        let med = median(times);
        eprintln!("  → median {med:.2}µs; {found} word(s) found, secret \"{}\"", engine.report().secret.text);
        summary.push((case.name, med, found));
    }

    eprintln!("\n==== Summary ====");
    eprintln!("{:<28} | {:>12} | {:>7}", "case", "median (µs)", "# found");
    eprintln!("{:-<28}-+-{:-<12}-+-{:-<7}", "", "", "");
    for (name, med, found) in &summary {
        eprintln!("{name:<28} | {med:>12.2} | {found:>7}");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_median() {
        assert_eq!(median(vec![]), 0.0);
        assert_eq!(median(vec![3.0, 1.0, 2.0]), 2.0);
        assert_eq!(median(vec![4.0, 1.0, 2.0, 3.0]), 2.5);
    }

    #[test]
    fn test_planted_word_found_up_right() {
        let mut rows = synthetic_rows(MAX_GRID_SIZE, 7);
        plant_up_right(&mut rows, "KOSMONAUT");
        let engine = WordSearchEngine::new(Grid::new(&rows).unwrap(), WordList::parse_from_str("KOSMONAUT"));
        let m = &engine.report().matches[0];
        let spelled: String = m.positions.iter().map(|&p| engine.grid().get(p).unwrap()).collect();
        assert_eq!(spelled, "KOSMONAUT");
    }
}
