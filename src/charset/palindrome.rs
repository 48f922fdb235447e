// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Palindrome-of-permutation check.
//!
//! Whitespace is ignored, case is significant, and characters are compared by
//! code point. Absent or empty input is rejected outright, while non-empty
//! input made only of whitespace is accepted (its stripped form is trivially a
//! palindrome).

use super::TRACE_TARGET;
use crate::text::{strip_blanks, ParitySet};
use tracing::trace;

/// Whether some rearrangement of the non-whitespace characters of `text`
/// reads the same forwards and backwards.
///
/// A rearrangement exists iff at most one character occurs an odd number of
/// times.
///
/// ```
/// use arrays_and_strings::is_palindrome_permutation;
///
/// assert!(is_palindrome_permutation(Some("taco cat")));
/// assert!(!is_palindrome_permutation(Some("taco catp")));
/// assert!(!is_palindrome_permutation(Some("")));
/// assert!(!is_palindrome_permutation(None));
/// ```
pub fn is_palindrome_permutation(text: Option<&str>) -> bool {
    let text = match text {
        Some(text) if !text.is_empty() => text,
        _ => return false,
    };

    let odd: ParitySet = strip_blanks(text).chars().collect();
    trace!(target: TRACE_TARGET, odd = odd.odd_count(), "parity scan complete");
    odd.odd_count() < 2
}
