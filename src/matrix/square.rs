// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! SquareMatrix: an N×N grid stored row-major.
//!
//! Construction validates the shape once, so every other operation can rely on
//! `cells.len() == dim * dim` and `dim >= 1`.
//!
//! # Examples
//!
//! ```
//! use arrays_and_strings::matrix::SquareMatrix;
//!
//! let matrix = SquareMatrix::try_from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
//! assert_eq!(matrix.dim(), 2);
//! assert_eq!(matrix.get(1, 0), Some(&3));
//! assert_eq!(format!("{}", matrix), "1 2\n3 4");
//! ```

use super::errors::{MatrixError, Result};
use super::TRACE_TARGET;
use std::fmt;
use tracing::debug;

/// An N×N matrix with N >= 1.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SquareMatrix<T = i64> {
    /// Number of rows (and columns).
    dim: usize,
    /// Row-major cells, `dim * dim` of them.
    pub(super) cells: Vec<T>,
}

impl<T> SquareMatrix<T> {
    /// Build a matrix from rows, rejecting empty or non-square grids.
    pub fn try_from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let dim = rows.len();
        if dim == 0 {
            debug!(target: TRACE_TARGET, "rejecting empty matrix");
            return Err(MatrixError::Empty);
        }
        if let Some((row, found)) = rows
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != dim)
        {
            debug!(target: TRACE_TARGET, row, found, expected = dim, "rejecting non-square matrix");
            return Err(MatrixError::NotSquare {
                row,
                expected: dim,
                found,
            });
        }

        Ok(Self {
            dim,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    /// Number of rows, which is also the number of columns.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// The cell at (`row`, `col`), or None if out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row < self.dim && col < self.dim {
            self.cells.get(self.index(row, col))
        } else {
            None
        }
    }

    /// Iterate over rows as slices, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        self.cells.chunks(self.dim)
    }

    /// Consume the matrix, returning its rows.
    pub fn into_rows(self) -> Vec<Vec<T>> {
        let dim = self.dim;
        let mut cells = self.cells.into_iter();
        (0..dim)
            .map(|_| cells.by_ref().take(dim).collect())
            .collect()
    }

    /// Flat index of (`row`, `col`).
    #[inline]
    pub(super) fn index(&self, row: usize, col: usize) -> usize {
        row * self.dim + col
    }
}

impl<T> TryFrom<Vec<Vec<T>>> for SquareMatrix<T> {
    type Error = MatrixError;

    fn try_from(rows: Vec<Vec<T>>) -> Result<Self> {
        Self::try_from_rows(rows)
    }
}

impl<T: fmt::Display> fmt::Display for SquareMatrix<T> {
    /// Format as space-separated values, one row per line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.rows().enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for (c, cell) in row.iter().enumerate() {
                if c > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", cell)?;
            }
        }
        Ok(())
    }
}
