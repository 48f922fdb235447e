// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! ParitySet: the set of characters seen an odd number of times.

use std::collections::HashSet;

/// Tracks occurrence parity by toggling membership.
///
/// After feeding a sequence through [`ParitySet::toggle`], the set holds exactly
/// the characters whose total count is odd.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParitySet(HashSet<char>);

impl ParitySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the parity of `ch`. Returns true if `ch` is now odd.
    pub fn toggle(&mut self, ch: char) -> bool {
        if self.0.remove(&ch) {
            false
        } else {
            self.0.insert(ch);
            true
        }
    }

    /// Whether `ch` has been seen an odd number of times.
    pub fn contains(&self, ch: char) -> bool {
        self.0.contains(&ch)
    }

    /// Number of characters with an odd count.
    pub fn odd_count(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<char> for ParitySet {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        let mut set = Self::new();
        for ch in iter {
            set.toggle(ch);
        }
        set
    }
}
