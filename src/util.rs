//! Shared utility functions used across the codebase.

use chrono::{SecondsFormat, Utc};

/// Current UTC instant as ISO-8601 with microseconds and a trailing `Z`.
///
/// The stored-timestamp and reply-timestamp formats are the same string.
pub fn utc_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Return the prefix of `s` containing at most `n` characters.
///
/// Truncation limits in this service are specified in characters, not bytes;
/// slicing by byte position would panic on multi-byte input. Returns the whole
/// string when it is short enough.
pub fn char_prefix(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// Count of characters in `s`. Thin alias that keeps call sites honest about
/// the character-vs-byte distinction.
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}
