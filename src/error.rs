use crate::board::Player;

/// Errors surfaced by the engine and its text codec.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid move: {player} cannot play ({row}, {col})")]
    InvalidMove { row: usize, col: usize, player: Player },

    #[error("invalid board dimensions {rows}x{cols} (need at least 2x2)")]
    InvalidDimensions { rows: usize, cols: usize },

    #[error("invalid cell at ({row}, {col}): {reason}")]
    InvalidCell { row: usize, col: usize, reason: String },

    #[error("parse error on line {line}, token '{token}': {reason}")]
    Parse { line: usize, token: String, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
