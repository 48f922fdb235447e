// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! URL space-encoding.
//!
//! Leading and trailing whitespace is removed, then every remaining whitespace
//! character becomes the three characters "%20". Literal "%20" already in the
//! input is left alone.

use crate::text::{is_blank, trim_blanks};
use std::borrow::Cow;

/// Replacement for one whitespace character.
pub const ENCODED_SPACE: &str = "%20";

/// URL-encode the whitespace in `text`. Absent input is echoed back as `None`.
///
/// ```
/// use arrays_and_strings::urlify;
///
/// assert_eq!(urlify(Some("  Mr Cem Kebabson  ")).as_deref(), Some("Mr%20Cem%20Kebabson"));
/// assert_eq!(urlify(Some("   ")).as_deref(), Some(""));
/// assert_eq!(urlify(None), None);
/// ```
pub fn urlify(text: Option<&str>) -> Option<Cow<'_, str>> {
    text.map(urlify_text)
}

/// Encode present text. See [`urlify`].
///
/// Borrows from the input when the trimmed text has no interior whitespace.
pub fn urlify_text(text: &str) -> Cow<'_, str> {
    let trimmed = trim_blanks(text);
    if !trimmed.contains(is_blank) {
        return Cow::Borrowed(trimmed);
    }

    let blanks = trimmed.chars().filter(|&ch| is_blank(ch)).count();
    let mut encoded = String::with_capacity(trimmed.len() + blanks * ENCODED_SPACE.len());
    for ch in trimmed.chars() {
        if is_blank(ch) {
            encoded.push_str(ENCODED_SPACE);
        } else {
            encoded.push(ch);
        }
    }
    Cow::Owned(encoded)
}
