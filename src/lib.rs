// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Array and string manipulation exercises.
//!
//! A flat library of pure functions, grouped by concern:
//!
//! - [`charset`]: uniqueness, permutation and palindrome-of-permutation checks
//! - [`edit`]: one-edit-away check and run-length compression
//! - [`encoding`]: URL space-encoding
//! - [`matrix`]: 90° clockwise rotation of square matrices
//! - [`text`]: whitespace handling and the character multiset shared by the above
//!
//! # Absent vs. empty text
//!
//! Functions that accept text which may be missing take `Option<&str>`.
//! `None` is not the same as `Some("")`: URL-encoding and compression echo
//! `None` back unchanged, and the palindrome check rejects both.
//!
//! # Example
//!
//! ```
//! use arrays_and_strings::{compress, is_one_away, rotate_matrix, urlify};
//!
//! assert_eq!(urlify(Some("a b")).as_deref(), Some("a%20b"));
//! assert_eq!(compress(Some("aaabccc")).as_deref(), Some("3a1b3c"));
//! assert!(is_one_away("pales", "pale"));
//! assert_eq!(rotate_matrix(vec![vec![1, 2], vec![3, 4]]).unwrap(), vec![vec![3, 1], vec![4, 2]]);
//! ```
//!
//! # Logging
//!
//! Short-circuit decisions are reported through `tracing` at `trace` level and
//! rejected matrices at `debug` level. The library never installs a subscriber.

pub mod charset;
pub mod edit;
pub mod encoding;
pub mod matrix;
pub mod text;

// Re-export commonly used items
pub use charset::{
    is_palindrome_permutation, is_permutation, is_permutation_sorted,
    is_permutation_with_hash_table, is_unique, is_unique_sorted, is_unique_with_hash_table,
    Strategy,
};
pub use edit::{compress, is_one_away};
pub use encoding::urlify;
pub use matrix::{rotate_matrix, MatrixError, SquareMatrix};
