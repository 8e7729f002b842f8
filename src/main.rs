use std::fmt::Write as _;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use osmismerka::engine::{SearchReport, WordSearchEngine};
use osmismerka::errors::GridError;
use osmismerka::highlight::HighlightSet;
use osmismerka::validator::GridValidator;
use osmismerka::word_list::WordList;
use osmismerka::{puzzle, Grid};

const LONG_VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")");

/// Eight-direction word search solver
///
/// Finds every word of the list in the grid (across, down and both diagonals,
/// forwards or backwards) and prints the secret message spelled by the letters
/// left over. Without --grid the built-in puzzle is solved.
#[derive(Parser, Debug)]
#[command(author, version, long_version = LONG_VERSION, about, long_about = None)]
struct Cli {
    /// Grid file: one row per line, square, 10 to 20 rows
    #[arg(short, long)]
    grid: Option<PathBuf>,

    /// Space-separated words to find (defaults to the built-in list when no grid is given)
    #[arg(short, long, conflicts_with = "words_file")]
    words: Option<String>,

    /// File containing whitespace-separated words to find
    #[arg(long)]
    words_file: Option<PathBuf>,

    /// Print the full report as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Print the grid with the cells of this word bracketed
    #[arg(long, value_name = "WORD")]
    highlight: Option<String>,
}

/// Entry point of the solver CLI.
///
/// Delegates to [`try_main`]; any error is printed with its code and help
/// text before exiting with code 1.
fn main() -> ExitCode {
    let debug_enabled = std::env::var(osmismerka::log::DEBUG_ENV_VAR).is_ok();
    osmismerka::log::init_logger(debug_enabled);

    if let Err(e) = try_main() {
        if let Some(grid_err) = e.downcast_ref::<GridError>() {
            eprintln!("Error: {}", grid_err.display_detailed());
        } else {
            eprintln!("Error: {e}");
        }
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Core application logic.
///
/// 1. Build the puzzle: the built-in one, or a validated grid file.
/// 2. Search all words.
/// 3. Print matches and the secret message (text or JSON) on stdout.
/// 4. Print timing on stderr.
fn try_main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let words = match (&cli.words, &cli.words_file) {
        (Some(text), _) => Some(WordList::parse_from_str(text)),
        (None, Some(path)) => Some(WordList::load_from_path(path)?),
        (None, None) => None,
    };

    let grid = match &cli.grid {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .map_err(|source| GridError::Io { path: path.clone(), source })?;
            GridValidator::default().validate_grid(strip_terminating_newline(&text))?
        }
        None => puzzle::default_grid(),
    };

    let words = words.unwrap_or_else(|| {
        if cli.grid.is_some() {
            log::warn!("no word list given; only the secret message will be shown");
            WordList::default()
        } else {
            puzzle::default_words()
        }
    });

    let t_solve = Instant::now();
    let engine = WordSearchEngine::new(grid, words);
    let solve_secs = t_solve.elapsed().as_secs_f64();
    let report = engine.report();

    if cli.json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        print!("{}", format_report(report, engine.words()));
    }

    if let Some(word) = &cli.highlight {
        let mut highlight = HighlightSet::default();
        match report.find(word) {
            Some(m) => highlight.highlight(m),
            None => eprintln!("'{word}' was not found; nothing to highlight"),
        }
        println!();
        print!("{}", format_grid(engine.grid(), &highlight));
    }

    eprintln!(
        "Searched {} words in a {}x{} grid in {:.3}ms ({} found).",
        engine.words().len(),
        engine.grid().num_rows(),
        engine.grid().num_cols(),
        solve_secs * 1000.0,
        report.matches.len()
    );

    Ok(())
}

fn format_report(report: &SearchReport, words: &WordList) -> String {
    let mut out = String::new();
    let width = report.matches.iter().map(|m| m.word.chars().count()).max().unwrap_or(0);

    for m in &report.matches {
        let cells: Vec<String> = m.positions.iter().map(ToString::to_string).collect();
        // NB: writing to a String never fails
        let _ = writeln!(out, "{:<width$} {} {}", m.word, m.direction.arrow(), cells.join(" "));
    }

    let missing = report.missing(words);
    if !missing.is_empty() {
        let _ = writeln!(out, "Not found: {}", missing.join(", "));
    }

    let _ = writeln!(out, "Secret message: {}", report.secret.text);
    out
}

/// Drop the single line ending a text file conventionally ends with.
fn strip_terminating_newline(text: &str) -> &str {
    text.strip_suffix("\r\n").or_else(|| text.strip_suffix('\n')).unwrap_or(text)
}

fn format_grid(grid: &Grid, highlight: &HighlightSet) -> String {
    let mut out = String::new();
    for row in 0..grid.num_rows() {
        for (col, c) in grid.row(row).unwrap_or_default().iter().enumerate() {
            if highlight.is_highlighted(row, col) {
                let _ = write!(out, "[{c}]");
            } else {
                let _ = write!(out, " {c} ");
            }
        }
        out.push('\n');
    }
    out
}
