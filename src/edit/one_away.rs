// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! One-edit-away check.
//!
//! Two texts are one edit away when they are identical, or when one can be
//! reached from the other by a single character insertion, deletion or
//! substitution. Identical texts count as one edit away.

use super::TRACE_TARGET;
use tracing::trace;

/// Whether `first` and `second` are at most one edit apart.
///
/// ```
/// use arrays_and_strings::is_one_away;
///
/// assert!(is_one_away("pale", "bale"));
/// assert!(is_one_away("pales", "pale"));
/// assert!(!is_one_away("pale", "bake"));
/// assert!(!is_one_away("abc", "abcde"));
/// ```
pub fn is_one_away(first: &str, second: &str) -> bool {
    let first: Vec<char> = first.chars().collect();
    let second: Vec<char> = second.chars().collect();

    if first.len().abs_diff(second.len()) > 1 {
        trace!(
            target: TRACE_TARGET,
            len_a = first.len(),
            len_b = second.len(),
            "lengths differ by more than one"
        );
        return false;
    }

    if first.len() == second.len() {
        return at_most_one_substitution(&first, &second);
    }

    let (shorter, longer) = if first.len() < second.len() {
        (&first, &second)
    } else {
        (&second, &first)
    };
    one_insertion_apart(shorter, longer)
}

/// Equal lengths: at most one position may differ.
fn at_most_one_substitution(first: &[char], second: &[char]) -> bool {
    let mut differences = first.iter().zip(second).filter(|(a, b)| a != b);
    differences.next();
    if differences.next().is_some() {
        trace!(target: TRACE_TARGET, "second substitution found");
        return false;
    }
    true
}

/// `longer` has exactly one more character than `shorter`.
///
/// Walks both with independent cursors. On a mismatch only the longer cursor
/// advances, and that may happen once: once the cursors have drifted apart,
/// any further mismatch fails.
fn one_insertion_apart(shorter: &[char], longer: &[char]) -> bool {
    let mut short_idx = 0;
    let mut long_idx = 0;
    while long_idx < longer.len() {
        if shorter.get(short_idx) == Some(&longer[long_idx]) {
            short_idx += 1;
        } else if short_idx != long_idx {
            trace!(target: TRACE_TARGET, short_idx, long_idx, "second divergence");
            return false;
        }
        long_idx += 1;
    }
    true
}
