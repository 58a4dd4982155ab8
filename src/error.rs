//! Error types for the Hopfield engine.

use crate::kernel::{Mode, Pattern};
use std::path::PathBuf;
use thiserror::Error;

/// Hopfield error types.
#[derive(Error, Debug)]
pub enum HopfieldError {
    /// A training or query vector disagrees with the established length N
    #[error("Dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    /// No training vectors were supplied
    #[error("Empty training set: at least one pattern is required to build a weight matrix")]
    EmptyTrainingSet,

    /// Mode tag outside {binary, bipolar}
    #[error("Invalid mode: {0:?} (expected \"binary\" or \"bipolar\")")]
    InvalidMode(String),

    /// Recall requested in a different encoding than the matrix was trained in
    #[error("Mode mismatch: matrix trained as {trained}, recall requested as {requested}")]
    ModeMismatch { trained: Mode, requested: Mode },

    /// Relaxation ran out of sweeps before reaching a fixed point.
    ///
    /// Recoverable: the last computed state is carried along.
    #[error("No fixed point after {sweeps} sweeps")]
    NonConvergence { sweeps: usize, last_state: Pattern },

    /// Reshape target does not cover the vector exactly
    #[error("Invalid shape: {rows}x{cols} cannot hold a vector of length {len}")]
    InvalidShape { rows: usize, cols: usize, len: usize },

    /// Non-integer token in a pattern file
    #[error("Parse error in {}: {:?} is not an integer", .path.display(), .token)]
    Parse { path: PathBuf, token: String },

    /// Filesystem error while reading patterns or configuration
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),
}

/// Result type alias for Hopfield operations.
pub type Result<T> = std::result::Result<T, HopfieldError>;
