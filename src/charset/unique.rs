// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Uniqueness check: are all characters of a text distinct?
//!
//! Whitespace counts as a character, and the empty text is vacuously unique.

use super::strategy::{sorted_chars, Strategy};
use crate::text::CharMultiset;

/// Whether every character in `text` is distinct, using the given strategy.
///
/// ```
/// use arrays_and_strings::{is_unique, Strategy};
///
/// assert!(is_unique("123456789", Strategy::HashTable));
/// assert!(!is_unique("lkjlkj", Strategy::Sorted));
/// ```
pub fn is_unique(text: &str, strategy: Strategy) -> bool {
    match strategy {
        Strategy::HashTable => is_unique_with_hash_table(text),
        Strategy::Sorted => is_unique_sorted(text),
    }
}

/// Build a multiset incrementally and stop at the first repeated character.
pub fn is_unique_with_hash_table(text: &str) -> bool {
    let mut seen = CharMultiset::new();
    for ch in text.chars() {
        if seen.insert(ch) > 0 {
            return false;
        }
    }
    true
}

/// Sort a copy of the characters; any equal neighbours mean a duplicate.
pub fn is_unique_sorted(text: &str) -> bool {
    sorted_chars(text).windows(2).all(|pair| pair[0] != pair[1])
}
