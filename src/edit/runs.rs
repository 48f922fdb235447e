// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Maximal runs of identical consecutive characters.
//!
//! # Examples
//!
//! ```
//! use arrays_and_strings::edit::{runs, Run};
//!
//! let found: Vec<Run> = runs("aaab").collect();
//! assert_eq!(found, vec![Run { ch: 'a', len: 3 }, Run { ch: 'b', len: 1 }]);
//! assert_eq!(found[0].to_string(), "3a");
//! ```

use std::fmt;
use std::iter::Peekable;
use std::str::Chars;

/// A maximal run: `len` consecutive copies of `ch`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    pub ch: char,
    pub len: usize,
}

impl fmt::Display for Run {
    /// Format a run as "<len><ch>", e.g. "3a".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.len, self.ch)
    }
}

/// Iterate over the maximal runs of `text`, left to right.
pub fn runs(text: &str) -> Runs<'_> {
    Runs {
        chars: text.chars().peekable(),
    }
}

/// Iterator returned by [`runs`].
#[derive(Debug, Clone)]
pub struct Runs<'a> {
    chars: Peekable<Chars<'a>>,
}

impl Iterator for Runs<'_> {
    type Item = Run;

    fn next(&mut self) -> Option<Self::Item> {
        let ch = self.chars.next()?;
        let mut len = 1;
        while self.chars.next_if_eq(&ch).is_some() {
            len += 1;
        }
        Some(Run { ch, len })
    }
}
