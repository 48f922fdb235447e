// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! 90° clockwise rotation.
//!
//! The cell at (row r, column c) moves to (row c, column N-1-r).
//!
//! Rotation in place works ring by ring from the outside in. Within a ring,
//! each group of four cells (top, right, bottom, left) is cycled one step
//! clockwise with three swaps, so no cell needs to be cloned.

use super::errors::Result;
use super::square::SquareMatrix;

impl<T> SquareMatrix<T> {
    /// Rotate 90° clockwise in place.
    ///
    /// ```
    /// use arrays_and_strings::matrix::SquareMatrix;
    ///
    /// let mut matrix = SquareMatrix::try_from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
    /// matrix.rotate_clockwise();
    /// assert_eq!(matrix.into_rows(), vec![vec![3, 1], vec![4, 2]]);
    /// ```
    pub fn rotate_clockwise(&mut self) {
        let n = self.dim();
        for layer in 0..n / 2 {
            let first = layer;
            let last = n - 1 - layer;
            for i in first..last {
                let offset = i - first;
                let top = self.index(first, i);
                let right = self.index(i, last);
                let bottom = self.index(last, last - offset);
                let left = self.index(last - offset, first);

                // top <- left, right <- top, bottom <- right, left <- bottom
                self.cells.swap(top, left);
                self.cells.swap(left, bottom);
                self.cells.swap(bottom, right);
            }
        }
    }
}

impl<T: Clone> SquareMatrix<T> {
    /// A copy of this matrix rotated 90° clockwise.
    pub fn rotated_clockwise(&self) -> Self {
        let mut rotated = self.clone();
        rotated.rotate_clockwise();
        rotated
    }
}

/// Rotate a grid of rows 90° clockwise.
///
/// Fails with [`MatrixError`](super::MatrixError) if the grid is empty or not
/// square.
///
/// ```
/// use arrays_and_strings::rotate_matrix;
///
/// let rotated = rotate_matrix(vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]]).unwrap();
/// assert_eq!(rotated, vec![vec![7, 4, 1], vec![8, 5, 2], vec![9, 6, 3]]);
///
/// assert!(rotate_matrix(vec![vec![1, 2]]).is_err());
/// ```
pub fn rotate_matrix<T>(rows: Vec<Vec<T>>) -> Result<Vec<Vec<T>>> {
    let mut matrix = SquareMatrix::try_from_rows(rows)?;
    matrix.rotate_clockwise();
    Ok(matrix.into_rows())
}
