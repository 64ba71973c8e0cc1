//! Error types for the eight-puzzle crate

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the eight-puzzle crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("shape must be 3x3, got {rows} rows with lengths {row_lengths:?}")]
    InvalidShape {
        rows: usize,
        row_lengths: Vec<usize>,
    },

    #[error("unknown symbol '{symbol}' at row {row}, column {col}")]
    UnknownSymbol {
        symbol: String,
        row: usize,
        col: usize,
    },

    #[error("tiles must be the blank and 1..8 exactly once, got {values:?}")]
    InvalidTiles { values: Vec<u8> },

    #[error("puzzle file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
