//! Setup-time error taxonomy
//!
//! Every variant is fatal at setup. The per-frame path has no error returns;
//! out-of-range input events are ignored rather than rejected.

use thiserror::Error;

/// Errors that can occur while loading a map and building a level
#[derive(Debug, Error)]
pub enum SetupError {
    /// Map text is not a rectangular grid of integers
    #[error("malformed map at line {line}: {reason}")]
    MalformedMap { line: usize, reason: String },

    /// Grid cell holds a code outside the recognized set
    #[error("unknown tile code {code} at row {row}, column {col}")]
    UnknownTileCode { row: usize, col: usize, code: i32 },

    /// Map, image, or sound resource could not be read
    #[error("failed to load asset {path}")]
    AssetLoad {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl SetupError {
    pub(crate) fn malformed(line: usize, reason: impl Into<String>) -> Self {
        Self::MalformedMap {
            line,
            reason: reason.into(),
        }
    }
}
