//! Error types for board construction and configuration.

use thiserror::Error;

use crate::types::Tile;

/// Errors raised while validating a configuration or building a board.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("board size {0} is not supported (expected 2..=16)")]
    InvalidSize(usize),

    #[error("row {row} has {len} cells, expected {expected}")]
    RaggedGrid {
        row: usize,
        len: usize,
        expected: usize,
    },

    #[error("tile value {value} at ({row}, {col}) is not zero or a power of two >= 2")]
    InvalidTile { row: usize, col: usize, value: Tile },
}
