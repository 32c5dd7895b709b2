//! Error types for request decoding and configuration.

use thiserror::Error;

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("malformed request: {0}")]
    Json(#[from] serde_json::Error),

    #[error("board must have 8 rows, got {rows}")]
    BoardRows { rows: usize },

    #[error("board row {row} must have 8 cells, got {cells}")]
    BoardColumns { row: usize, cells: usize },

    #[error("invalid cell value {value} at {coord} (expected 0, 1 or 2)")]
    InvalidCell { value: u8, coord: String },

    #[error("invalid side to move {0} (expected 1 or 2)")]
    InvalidSide(u8),

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("invalid configuration file: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
