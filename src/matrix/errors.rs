// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for matrix construction.

use thiserror::Error;

/// Reasons a grid of rows cannot be treated as a square matrix.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatrixError {
    /// The grid has no rows.
    #[error("Matrix is empty")]
    Empty,

    /// A row's length does not match the number of rows.
    #[error("Row {row} has {found} columns, expected {expected} for a square matrix")]
    NotSquare {
        row: usize,
        expected: usize,
        found: usize,
    },
}

pub type Result<T> = std::result::Result<T, MatrixError>;
