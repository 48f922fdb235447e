// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Square matrices of integers and their rotation.
//!
//! This module contains:
//! - SquareMatrix: validated N×N row-major storage
//! - Rotation: 90° clockwise, in place or by copy
//! - MatrixError: why a grid is not a square matrix

pub mod errors;
pub mod rotation;
pub mod square;

pub use errors::{MatrixError, Result};
pub use rotation::rotate_matrix;
pub use square::SquareMatrix;

pub(crate) const TRACE_TARGET: &str = "arrays_and_strings::matrix";
