use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by the arcade
#[derive(Error, Debug)]
pub enum ArcadeError {
    #[error("position ({row}, {col}) is outside the {rows}x{cols} board")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("cell ({row}, {col}) is already occupied")]
    CellOccupied { row: usize, col: usize },

    #[error("column {0} is full")]
    ColumnFull(usize),

    #[error("the game is not in progress")]
    NotPlaying,

    #[error("there is no move to undo")]
    NothingToUndo,

    #[error("move does not belong to the game being played")]
    MismatchedMove,

    #[error("cannot read move {text:?}: {reason}")]
    InvalidMove { text: String, reason: String },

    #[error("unknown game: {0}")]
    UnknownGame(String),

    #[error("score file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("score file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience Result type for arcade operations
pub type Result<T> = std::result::Result<T, ArcadeError>;
