// Reusable library API — shared by the CLI, the bench runner and the WASM build
pub mod direction;
pub mod engine;
pub mod errors;
pub mod grid;
pub mod highlight;
pub mod log;
pub mod matcher;
pub mod puzzle;
pub mod secret;
pub mod validator;
pub mod word_list;

// Compile the wasm glue only when targeting wasm32.
#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use direction::{Axis, Direction};
pub use engine::{SearchReport, WordSearchEngine};
pub use grid::{Grid, Position};
pub use matcher::MatchResult;
pub use secret::SecretMessage;
