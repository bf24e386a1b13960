//! Error types for the board engine.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while building a board or a game.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("board size {size} is too small (minimum is 2)")]
    BoardTooSmall { size: usize },

    #[error("row {row} has {len} cells, expected {size}")]
    RaggedBoard { row: usize, len: usize, size: usize },

    #[error("cell ({row}, {col}) holds {value}, which is not a power of two")]
    InvalidTile { row: usize, col: usize, value: u32 },
}

/// Errors from a high-score backend.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("high score file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("high score record {content:?} is not a decimal integer")]
    Parse { content: String },
}
