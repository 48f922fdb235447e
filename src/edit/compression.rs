// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Run-length string compression.
//!
//! Each maximal run is written as "<count><character>"; single characters still
//! emit "1<character>". The compressed form is only returned when it is
//! strictly shorter than the input.

use super::runs::runs;
use super::TRACE_TARGET;
use crate::text::char_len;
use std::borrow::Cow;
use tracing::trace;

/// Inputs shorter than this cannot shrink, so they are returned untouched.
const MIN_COMPRESSIBLE_LEN: usize = 3;

/// Compress `text`, or return it unchanged when compression would not help.
///
/// Absent input is echoed back as `None`.
///
/// ```
/// use arrays_and_strings::compress;
///
/// assert_eq!(compress(Some("aaabccc")).as_deref(), Some("3a1b3c"));
/// assert_eq!(compress(Some("abc")).as_deref(), Some("abc"));
/// assert_eq!(compress(None), None);
/// ```
pub fn compress(text: Option<&str>) -> Option<Cow<'_, str>> {
    text.map(compress_text)
}

/// Compress present text. See [`compress`].
pub fn compress_text(text: &str) -> Cow<'_, str> {
    let original_len = char_len(text);
    if original_len < MIN_COMPRESSIBLE_LEN {
        return Cow::Borrowed(text);
    }

    let compressed: String = runs(text).map(|run| run.to_string()).collect();
    let compressed_len = char_len(&compressed);
    if compressed_len >= original_len {
        trace!(
            target: TRACE_TARGET,
            original_len,
            compressed_len,
            "compression does not shrink input"
        );
        return Cow::Borrowed(text);
    }
    Cow::Owned(compressed)
}
