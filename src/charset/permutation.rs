// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Permutation check: is one text a rearrangement of the other?

use super::strategy::{sorted_chars, Strategy};
use super::TRACE_TARGET;
use crate::text::{char_len, CharMultiset};
use tracing::trace;

/// Whether `first` and `second` contain the same characters with the same
/// counts, using the given strategy.
///
/// ```
/// use arrays_and_strings::{is_permutation, Strategy};
///
/// assert!(is_permutation("qwertyui", "qweriuyt", Strategy::HashTable));
/// assert!(!is_permutation("", " ", Strategy::Sorted));
/// ```
pub fn is_permutation(first: &str, second: &str, strategy: Strategy) -> bool {
    match strategy {
        Strategy::HashTable => is_permutation_with_hash_table(first, second),
        Strategy::Sorted => is_permutation_sorted(first, second),
    }
}

/// Count `first`, then consume the counts while scanning `second`.
pub fn is_permutation_with_hash_table(first: &str, second: &str) -> bool {
    if !same_length(first, second) {
        return false;
    }

    let mut counts = CharMultiset::from_text(first);
    for ch in second.chars() {
        if !counts.remove_one(ch) {
            trace!(target: TRACE_TARGET, %ch, "character missing or over-consumed");
            return false;
        }
    }
    counts.is_empty()
}

/// Sort copies of both texts and compare them element by element.
pub fn is_permutation_sorted(first: &str, second: &str) -> bool {
    if !same_length(first, second) {
        return false;
    }
    sorted_chars(first) == sorted_chars(second)
}

fn same_length(first: &str, second: &str) -> bool {
    let (len_a, len_b) = (char_len(first), char_len(second));
    if len_a != len_b {
        trace!(target: TRACE_TARGET, len_a, len_b, "length mismatch");
        return false;
    }
    true
}
