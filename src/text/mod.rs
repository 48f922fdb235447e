// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Text primitives shared by the string exercises.
//!
//! Present text is a `&str`; text that may be absent is an `Option<&str>`, where
//! `None` is a distinct signal from `Some("")`. A character is a Unicode scalar
//! value and lengths are counted in `char`s.
//!
//! This module contains:
//! - Whitespace classification and trimming/stripping helpers
//! - CharMultiset: character -> occurrence count
//! - ParitySet: characters seen an odd number of times

pub mod multiset;
pub mod parity;

pub use multiset::CharMultiset;
pub use parity::ParitySet;

/// U+FEFF ZERO WIDTH NO-BREAK SPACE, treated as whitespace alongside the
/// Unicode `White_Space` property.
const BYTE_ORDER_MARK: char = '\u{FEFF}';

/// Whether `ch` counts as whitespace for trimming, encoding and stripping.
#[inline]
pub fn is_blank(ch: char) -> bool {
    ch.is_whitespace() || ch == BYTE_ORDER_MARK
}

/// Remove leading and trailing whitespace.
pub fn trim_blanks(text: &str) -> &str {
    text.trim_matches(is_blank)
}

/// Copy of `text` with every whitespace character removed.
pub fn strip_blanks(text: &str) -> String {
    text.chars().filter(|&ch| !is_blank(ch)).collect()
}

/// Number of characters (not bytes) in `text`.
#[inline]
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}
