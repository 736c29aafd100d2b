// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Segment-level primitives shared by identifier and template lookups.

/// The delimiter between segments of identifiers and templates.
pub(crate) const DELIMITER: char = '/';

/// A single `/`-delimited segment, remembering where it starts in the source string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Segment<'a> {
    pub(crate) text: &'a str,
    pub(crate) start: usize,
}

impl Segment<'_> {
    /// Byte offset one past the last byte of this segment in the source string.
    pub(crate) fn end(&self) -> usize {
        self.start + self.text.len()
    }

    pub(crate) fn is_blank(&self) -> bool {
        is_blank(self.text)
    }
}

/// Splits `path` on `/`.
///
/// Leading and interior empty segments are kept. Trailing empty segments are discarded, so
/// `"/a/b/"` yields `["", "a", "b"]`, `"/"` yields nothing and `""` yields a single empty segment.
pub(crate) fn split(path: &str) -> Vec<Segment<'_>> {
    let mut start = 0;
    let mut segments: Vec<Segment<'_>> = path
        .split(DELIMITER)
        .map(|text| {
            let segment = Segment { text, start };
            start += text.len() + DELIMITER.len_utf8();
            segment
        })
        .collect();

    if segments.len() > 1 {
        while segments.last().is_some_and(|segment| segment.text.is_empty()) {
            segments.pop();
        }
    }

    segments
}

/// Returns `true` for empty or whitespace-only text.
pub(crate) fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

/// Case-insensitive equality.
///
/// Two characters match when they are equal, equal after upper-casing, or equal after
/// lower-casing. Non-ASCII text is compared character by character.
pub(crate) fn eq_ignore_case(left: &str, right: &str) -> bool {
    if left.eq_ignore_ascii_case(right) {
        return true;
    }

    let mut left = left.chars();
    let mut right = right.chars();
    loop {
        match (left.next(), right.next()) {
            (None, None) => return true,
            (Some(l), Some(r)) if chars_eq_ignore_case(l, r) => {}
            _ => return false,
        }
    }
}

fn chars_eq_ignore_case(left: char, right: char) -> bool {
    left == right || left.to_uppercase().eq(right.to_uppercase()) || left.to_lowercase().eq(right.to_lowercase())
}

/// Returns the name inside a `{name}` segment, or `None` if the segment is not brace-wrapped.
pub(crate) fn placeholder_name(segment: &str) -> Option<&str> {
    segment.strip_prefix('{')?.strip_suffix('}')
}

/// Returns `true` if `segment` is the placeholder `{parameter_name}`, ignoring case.
pub(crate) fn is_placeholder_for(segment: &str, parameter_name: &str) -> bool {
    placeholder_name(segment).is_some_and(|name| eq_ignore_case(name, parameter_name))
}
