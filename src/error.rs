//! Error types for the eight-puzzle crate

use thiserror::Error;

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid tile {tile} at row {row}, column {col} (expected 0-8)")]
    InvalidTile { tile: u8, row: usize, col: usize },

    #[error("tile {tile} appears more than once")]
    DuplicateTile { tile: u8 },

    #[error("board has no blank tile")]
    MissingBlank,

    #[error("board string must hold 9 tiles, got {got} in '{context}'")]
    InvalidBoardLength { got: usize, context: String },

    #[error("invalid character '{character}' in '{context}'")]
    InvalidCharacter { character: char, context: String },

    #[error("invalid path: {message}")]
    InvalidPath { message: String },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
