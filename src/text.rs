//! Shortening of the long strings for the narrow views

use std::borrow::Cow;

const ELLIPSIS: &str = "...";

/// Shorten the string which is longer than `max_len` characters.
///
/// The long string is cut to `max_len - 1` characters and gets the `...` appended.
/// When `use_word_boundary` is set, the cut is moved back to the last space
/// (the string without spaces is cut completely, leaving the ellipsis only).
///
/// The string which fits is returned unchanged, without the ellipsis.
///
/// ```
/// use geoformat::trunc;
///
/// assert_eq!(trunc("abcdefgh", 5, false), "abcd...");
/// assert_eq!(trunc("hello world", 8, true), "hello...");
/// assert_eq!(trunc("short", 8, true), "short");
/// ```
pub fn trunc(s: &str, max_len: usize, use_word_boundary: bool) -> Cow<'_, str> {
    if s.chars().count() <= max_len {
        return Cow::Borrowed(s);
    }

    let prefix_end = s
        .char_indices()
        .nth(max_len.saturating_sub(1))
        .map_or(s.len(), |(idx, _)| idx);
    let mut prefix = &s[..prefix_end];

    if use_word_boundary {
        prefix = prefix.rfind(' ').map_or("", |space| &prefix[..space]);
    }

    Cow::Owned(format!("{prefix}{ELLIPSIS}"))
}

/// The [`trunc`] as a method of the string slice
pub trait Truncate {
    /// See [`trunc`]
    fn trunc(&self, max_len: usize, use_word_boundary: bool) -> Cow<'_, str>;
}

impl Truncate for str {
    fn trunc(&self, max_len: usize, use_word_boundary: bool) -> Cow<'_, str> {
        trunc(self, max_len, use_word_boundary)
    }
}
