// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use crate::segments::{Segment, eq_ignore_case, is_blank, is_placeholder_for, split};

/// Returns the segment that follows the first occurrence of `segment_name` in `id`.
///
/// Resource identifiers alternate type names and values, as in
/// `/subscriptions/{id}/resourceGroups/{name}/...`, so the value of a level is the segment
/// right after its type name. Matching ignores case and skips empty or whitespace-only segments.
///
/// Returns `None` when `id` is empty, when no segment matches, or when the first match is the
/// last segment of `id`.
///
/// # Examples
///
/// ```
/// use resource_id::value_by_name;
///
/// let id = "/subscriptions/0000/resourceGroups/rg1/providers/Microsoft.Authorization/locks/l1";
///
/// assert_eq!(value_by_name(id, "resourceGroups"), Some("rg1"));
/// assert_eq!(value_by_name(id, "LOCKS"), Some("l1"));
/// assert_eq!(value_by_name(id, "vaults"), None);
/// ```
#[must_use]
pub fn value_by_name<'a>(id: &'a str, segment_name: &str) -> Option<&'a str> {
    if id.is_empty() {
        return None;
    }

    let segments = split(id);
    let position = segments
        .iter()
        .position(|segment| !segment.is_blank() && eq_ignore_case(segment.text, segment_name))?;

    segments.get(position + 1).map(|segment| segment.text)
}

/// Returns the part of `id` bound to the `{parameter_name}` placeholder of `template`.
///
/// The template is aligned with the identifier from the right, because route templates
/// usually describe only the tail of a fully qualified identifier. Each identifier segment is
/// paired with the template segment at the same distance from the end; pairs where either
/// side is empty or whitespace-only are skipped without breaking the alignment. Placeholder
/// names are matched ignoring case.
///
/// When the placeholder is the first segment of the template (ignoring a leading `/`), it
/// captures the rest of the identifier: the matched segment and every segment before it,
/// without the leading `/`. Otherwise only the matched segment is returned.
///
/// Returns `None` when `id` or `template` is empty, when the placeholder does not occur
/// exactly once in the template, or when the alignment runs out before reaching it.
///
/// # Examples
///
/// ```
/// use resource_id::value_by_template;
///
/// let id = "/subscriptions/0000/resourceGroups/rg1/providers/Microsoft.Foo/widgets/w1";
/// let template = "/resourceGroups/{resourceGroupName}/providers/Microsoft.Foo/widgets/{widgetName}";
///
/// assert_eq!(value_by_template(id, template, "resourceGroupName"), Some("rg1"));
/// assert_eq!(value_by_template(id, template, "widgetName"), Some("w1"));
///
/// // A leading placeholder captures everything up to its position.
/// assert_eq!(value_by_template("/a/b/c", "{scope}/c", "scope"), Some("a/b"));
/// ```
#[must_use]
pub fn value_by_template<'a>(id: &'a str, template: &str, parameter_name: &str) -> Option<&'a str> {
    if id.is_empty() || template.is_empty() {
        return None;
    }

    let template: Vec<&str> = split(template).into_iter().map(|segment| segment.text).collect();
    let occurrences = template
        .iter()
        .filter(|segment| is_placeholder_for(segment, parameter_name))
        .count();
    if occurrences != 1 {
        return None;
    }

    align(id, &template, parameter_name)
}

/// Walks `id` and `template` from their last segments towards their first ones and returns
/// the value of the first pair whose template side is `{parameter_name}`.
pub(crate) fn align<'a>(id: &'a str, template: &[&str], parameter_name: &str) -> Option<&'a str> {
    let segments = split(id);
    let template_has_leading_slash = template.first().is_some_and(|first| first.is_empty());

    let pairs = segments.iter().enumerate().rev().zip(template.iter().enumerate().rev());
    for ((position, segment), (cursor, pattern)) in pairs {
        if segment.is_blank() || is_blank(pattern) || !is_placeholder_for(pattern, parameter_name) {
            continue;
        }

        let captures_rest = cursor == 0 || (cursor == 1 && template_has_leading_slash);
        return Some(if captures_rest {
            leading_part(id, &segments, position)
        } else {
            segment.text
        });
    }

    None
}

/// Returns `id` from its start through the segment at `last`, minus a leading `/`.
fn leading_part<'a>(id: &'a str, segments: &[Segment<'a>], last: usize) -> &'a str {
    let start = usize::from(id.starts_with('/'));
    let end = segments.get(last).map_or(start, Segment::end);
    id.get(start..end).unwrap_or_default()
}
