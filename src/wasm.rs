use crate::engine::{SearchReport, WordSearchEngine};
use crate::errors::GridError;
use crate::highlight::HighlightSet;
use crate::log::init_logger;
use crate::validator::GridValidator;
use wasm_bindgen::prelude::*;

/// Structured error information for JavaScript consumers
#[derive(serde::Serialize)]
struct WasmError {
    /// Error code (e.g., "G001", "WASM001")
    code: String,
    /// Display message
    message: String,
    /// Short description of error type
    description: String,
    /// Detailed explanation
    details: String,
    /// Optional helpful suggestion
    #[serde(skip_serializing_if = "Option::is_none")]
    help: Option<String>,
}

impl From<GridError> for WasmError {
    fn from(e: GridError) -> Self {
        WasmError {
            code: e.code().to_string(),
            message: e.to_string(),
            description: e.description().to_string(),
            details: e.details().to_string(),
            help: e.help().map(str::to_string),
        }
    }
}

impl WasmError {
    fn serialization(what: &str, e: &serde_wasm_bindgen::Error) -> Self {
        WasmError {
            code: "WASM001".to_string(),
            message: format!("serialization failed: {e}"),
            description: format!("Failed to serialize {what}"),
            details: format!("The {what} could not be converted to JavaScript format."),
            help: Some("This is an internal error. Please report this issue.".to_string()),
        }
    }
}

impl From<WasmError> for JsValue {
    fn from(e: WasmError) -> Self {
        let mut msg = format!("Error {}: {}", e.code, e.message);

        if !e.details.is_empty() {
            msg.push_str(&format!("\n\n{}", e.details));
        }

        if let Some(help) = e.help {
            msg.push_str(&format!("\n\nSuggestion: {help}"));
        }

        let err = js_sys::Error::new(&msg);
        err.set_name(&e.code);
        err.into()
    }
}

/// Shape handed to JavaScript after a solve.
#[derive(serde::Serialize)]
struct WasmSolveResult {
    grid: Vec<String>,
    words: Vec<String>,
    matches: Vec<WasmMatch>,
    secret_message: String,
    secret_positions: Vec<[usize; 2]>,
}

#[derive(serde::Serialize)]
struct WasmMatch {
    word: String,
    direction: &'static str,
    arrow: &'static str,
    positions: Vec<[usize; 2]>,
}

impl WasmSolveResult {
    fn from_engine(engine: &WordSearchEngine) -> Self {
        let SearchReport { matches, secret } = engine.report();
        WasmSolveResult {
            grid: engine.grid().to_rows(),
            words: engine.words().words.clone(),
            matches: matches
                .iter()
                .map(|m| WasmMatch {
                    word: m.word.clone(),
                    direction: m.direction.name(),
                    arrow: m.direction.arrow(),
                    positions: m.positions.iter().map(|p| [p.row, p.col]).collect(),
                })
                .collect(),
            secret_message: secret.text.clone(),
            secret_positions: secret.positions.iter().map(|p| [p.row, p.col]).collect(),
        }
    }
}

fn to_js(engine: &WordSearchEngine) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(&WasmSolveResult::from_engine(engine))
        .map_err(|e| WasmError::serialization("search result", &e).into())
}

/// Initialize the panic hook and logging.
///
/// This function must be called from JavaScript after the WASM module loads.
#[wasm_bindgen]
pub fn initialize(debug_enabled: bool) {
    console_error_panic_hook::set_once();
    init_logger(debug_enabled);
    log::info!("WASM module initialized");
}

/// Solve the built-in puzzle.
///
/// Returns `{ grid, words, matches: [{ word, direction, arrow, positions }],
/// secret_message, secret_positions }`; positions are `[row, col]` pairs.
#[wasm_bindgen]
pub fn default_puzzle_wasm() -> Result<JsValue, JsValue> {
    to_js(&WordSearchEngine::default())
}

/// JS entry: (grid_text: string, words_text: string) → same shape as
/// [`default_puzzle_wasm`]. Rows are newline-separated and the grid must be a
/// square between 10×10 and 20×20; words are space-separated.
///
/// # Errors
/// Throws a JS `Error` named after the error code (e.g. `G002`) when the grid is rejected.
#[wasm_bindgen]
pub fn solve_puzzle_wasm(grid_text: &str, words_text: &str) -> Result<JsValue, JsValue> {
    let puzzle = GridValidator::default()
        .validate(grid_text, words_text)
        .map_err(WasmError::from)?;
    to_js(&WordSearchEngine::new(puzzle.grid, puzzle.words))
}

/// A live puzzle for an interactive page: holds the engine plus hover state.
#[wasm_bindgen]
pub struct PuzzleSession {
    engine: WordSearchEngine,
    validator: GridValidator,
    highlight: HighlightSet,
}

#[wasm_bindgen]
impl PuzzleSession {
    /// Start on the built-in puzzle.
    #[wasm_bindgen(constructor)]
    pub fn new() -> PuzzleSession {
        PuzzleSession {
            engine: WordSearchEngine::default(),
            validator: GridValidator::default(),
            highlight: HighlightSet::default(),
        }
    }

    /// Current grid, matches and secret message.
    pub fn result(&self) -> Result<JsValue, JsValue> {
        to_js(&self.engine)
    }

    /// Replace the puzzle with user input. On rejection the current puzzle is kept.
    pub fn set_custom_grid(&mut self, grid_text: &str, words_text: &str) -> Result<JsValue, JsValue> {
        self.engine
            .set_custom_puzzle(&self.validator, grid_text, words_text)
            .map_err(WasmError::from)?;
        self.highlight.clear();
        to_js(&self.engine)
    }

    /// Highlight the cells of the `index`-th match (as ordered in `result().matches`).
    /// Returns false, and clears the highlight, if there is no such match.
    pub fn highlight_match(&mut self, index: usize) -> bool {
        match self.engine.report().matches.get(index) {
            Some(m) => {
                self.highlight.highlight(m);
                true
            }
            None => {
                self.highlight.clear();
                false
            }
        }
    }

    pub fn clear_highlight(&mut self) {
        self.highlight.clear();
    }

    pub fn is_highlighted(&self, row: usize, col: usize) -> bool {
        self.highlight.is_highlighted(row, col)
    }
}

impl Default for PuzzleSession {
    fn default() -> Self {
        Self::new()
    }
}
