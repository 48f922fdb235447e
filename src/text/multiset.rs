// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! CharMultiset: a mapping from character to occurrence count.
//!
//! Built transiently inside a single call and discarded on return.
//! Entries with a zero count are never stored, so `len()` is the number of
//! distinct characters currently present.
//!
//! # Examples
//!
//! ```
//! use arrays_and_strings::text::CharMultiset;
//!
//! let mut counts = CharMultiset::from_text("abba");
//! assert_eq!(counts.count('a'), 2);
//! assert_eq!(counts.len(), 2);
//!
//! assert!(counts.remove_one('b'));
//! assert!(counts.remove_one('b'));
//! assert!(!counts.remove_one('b'));
//! assert_eq!(counts.len(), 1);
//! ```

use std::collections::HashMap;

/// A multiset of characters keyed by code point.
///
/// No ordering guarantee is made when iterating.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharMultiset(HashMap<char, usize>);

impl CharMultiset {
    /// Create an empty multiset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count every character of `text`.
    pub fn from_text(text: &str) -> Self {
        text.chars().collect()
    }

    /// Add one occurrence of `ch`, returning the count before insertion.
    pub fn insert(&mut self, ch: char) -> usize {
        let entry = self.0.entry(ch).or_insert(0);
        let previous = *entry;
        *entry += 1;
        previous
    }

    /// Remove one occurrence of `ch`.
    ///
    /// Returns false if `ch` was not present. The entry is deleted when its
    /// count reaches zero.
    pub fn remove_one(&mut self, ch: char) -> bool {
        match self.0.get_mut(&ch) {
            None => false,
            Some(count) if *count == 1 => {
                self.0.remove(&ch);
                true
            }
            Some(count) => {
                *count -= 1;
                true
            }
        }
    }

    /// Occurrences of `ch` (zero if absent).
    pub fn count(&self, ch: char) -> usize {
        self.0.get(&ch).copied().unwrap_or(0)
    }

    /// Number of distinct characters.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Total number of occurrences across all characters.
    pub fn total(&self) -> usize {
        self.0.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over `(character, count)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (char, usize)> + '_ {
        self.0.iter().map(|(&ch, &count)| (ch, count))
    }
}

impl FromIterator<char> for CharMultiset {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl Extend<char> for CharMultiset {
    fn extend<I: IntoIterator<Item = char>>(&mut self, iter: I) {
        for ch in iter {
            self.insert(ch);
        }
    }
}
