// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Character-set checks over a single text or a pair of texts.
//!
//! This module contains:
//! - `strategy`: hash-table vs. sorted variants of the checks below
//! - `unique`: are all characters distinct?
//! - `permutation`: is one text a rearrangement of another?
//! - `palindrome`: can the text be rearranged into a palindrome?
//!
//! Every check is pure; auxiliary multisets and sort buffers live only for
//! the duration of one call.

pub mod palindrome;
pub mod permutation;
pub mod strategy;
pub mod unique;

pub use palindrome::is_palindrome_permutation;
pub use permutation::{is_permutation, is_permutation_sorted, is_permutation_with_hash_table};
pub use strategy::Strategy;
pub use unique::{is_unique, is_unique_sorted, is_unique_with_hash_table};

pub(crate) const TRACE_TARGET: &str = "arrays_and_strings::charset";
