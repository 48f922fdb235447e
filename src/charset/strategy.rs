// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Strategy selection for the checks that come in two variants.

use strum_macros::{Display, EnumCount as EnumCountMacro, EnumIter, EnumString};

/// How a character-set check is carried out.
///
/// Both strategies compute the same predicate; they differ only in cost.
///
/// ```
/// use std::str::FromStr;
/// use arrays_and_strings::Strategy;
///
/// assert_eq!(Strategy::HashTable.to_string(), "hash-table");
/// assert_eq!(Strategy::from_str("sorted").unwrap(), Strategy::Sorted);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, EnumIter, EnumCountMacro,
)]
#[strum(serialize_all = "kebab-case")]
pub enum Strategy {
    /// Build a character multiset while scanning. O(n) time, O(k) space.
    #[default]
    HashTable,

    /// Sort a copy of the characters and compare neighbours. O(n log n) time,
    /// no auxiliary lookup structure.
    Sorted,
}

/// Sorted copy of the characters of `text`.
pub(crate) fn sorted_chars(text: &str) -> Vec<char> {
    let mut chars: Vec<char> = text.chars().collect();
    chars.sort_unstable();
    chars
}
