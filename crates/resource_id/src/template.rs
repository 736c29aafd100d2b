// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::borrow::Cow;
use std::fmt::{self, Display};
use std::str::FromStr;

use crate::TemplateError;
use crate::resolve::align;
use crate::segments::{eq_ignore_case, is_blank, placeholder_name, split};

/// A validated URI path template such as
/// `/resourceGroups/{resourceGroupName}/providers/Microsoft.Foo/widgets/{widgetName}`.
///
/// Resource wrappers resolve parameters against the same route on every call. Parsing the route
/// into a `PathTemplate` checks it once, so lookups against it never hit the malformed or
/// ambiguous cases that make [`value_by_template`](crate::value_by_template) return `None`.
///
/// A valid template satisfies these rules:
///
/// - every segment containing `{` or `}` is exactly one `{name}` placeholder;
/// - placeholder names are not empty or whitespace-only;
/// - no placeholder name appears twice, ignoring case.
///
/// # Examples
///
/// ```
/// use resource_id::PathTemplate;
///
/// let template = PathTemplate::from_static(
///     "/resourceGroups/{resourceGroupName}/providers/Microsoft.Authorization/locks/{lockName}",
/// )?;
///
/// let id = "/subscriptions/0000/resourceGroups/rg1/providers/Microsoft.Authorization/locks/l1";
/// assert_eq!(template.value_of(id, "lockName"), Some("l1"));
/// assert_eq!(
///     template.parameters().collect::<Vec<_>>(),
///     ["resourceGroupName", "lockName"]
/// );
/// # Ok::<(), resource_id::TemplateError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PathTemplate {
    raw: Cow<'static, str>,
}

impl PathTemplate {
    /// Creates a template from a string literal without copying it.
    ///
    /// # Errors
    ///
    /// Returns a [`TemplateError`] if the template is malformed.
    pub fn from_static(template: &'static str) -> Result<Self, TemplateError> {
        validate(template)?;
        Ok(Self {
            raw: Cow::Borrowed(template),
        })
    }

    /// Creates a template from an owned or borrowed string.
    ///
    /// # Errors
    ///
    /// Returns a [`TemplateError`] if the template is malformed.
    pub fn parse(template: impl Into<String>) -> Result<Self, TemplateError> {
        let template = template.into();
        validate(&template)?;
        Ok(Self {
            raw: Cow::Owned(template),
        })
    }

    /// Returns the template text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Returns the placeholder names in template order, without braces.
    pub fn parameters(&self) -> impl Iterator<Item = &str> {
        split(&self.raw).into_iter().filter_map(|segment| placeholder_name(segment.text))
    }

    /// Returns `true` if the template has a `{name}` placeholder, ignoring case.
    #[must_use]
    pub fn contains_parameter(&self, name: &str) -> bool {
        self.parameters().any(|parameter| eq_ignore_case(parameter, name))
    }

    /// Returns the part of `id` bound to `{parameter_name}`.
    ///
    /// The result is the same as [`value_by_template`](crate::value_by_template) with this
    /// template's text.
    #[must_use]
    pub fn value_of<'a>(&self, id: &'a str, parameter_name: &str) -> Option<&'a str> {
        if id.is_empty() || self.raw.is_empty() {
            return None;
        }

        let segments: Vec<&str> = self.segments().collect();
        align(id, &segments, parameter_name)
    }

    /// Resolves every placeholder of the template against `id`.
    ///
    /// Yields `(parameter, value)` pairs in template order. Placeholders that `id` does not reach
    /// are left out.
    ///
    /// # Examples
    ///
    /// ```
    /// use resource_id::PathTemplate;
    ///
    /// let template = PathTemplate::from_static("/{scope}/providers/Microsoft.Authorization/locks/{lockName}")?;
    /// let id = "/subscriptions/0000/resourceGroups/rg1/providers/Microsoft.Authorization/locks/l1";
    ///
    /// let values: Vec<_> = template.values(id).collect();
    /// assert_eq!(
    ///     values,
    ///     [("scope", "subscriptions/0000/resourceGroups/rg1"), ("lockName", "l1")]
    /// );
    /// # Ok::<(), resource_id::TemplateError>(())
    /// ```
    pub fn values<'t, 'a>(&'t self, id: &'a str) -> impl Iterator<Item = (&'t str, &'a str)> {
        self.parameters()
            .filter_map(move |parameter| self.value_of(id, parameter).map(|value| (parameter, value)))
    }

    fn segments(&self) -> impl Iterator<Item = &str> {
        split(&self.raw).into_iter().map(|segment| segment.text)
    }
}

fn validate(template: &str) -> Result<(), TemplateError> {
    let mut seen: Vec<&str> = Vec::new();

    for segment in split(template) {
        let text = segment.text;
        if !text.contains(['{', '}']) {
            continue;
        }

        let Some(name) = placeholder_name(text).filter(|name| !name.contains(['{', '}'])) else {
            return Err(TemplateError::invalid(
                template,
                format!("segment '{text}' is not a well-formed placeholder"),
            ));
        };

        if is_blank(name) {
            return Err(TemplateError::invalid(template, format!("placeholder '{text}' has an empty name")));
        }

        if seen.iter().any(|previous| eq_ignore_case(previous, name)) {
            return Err(TemplateError::invalid(
                template,
                format!("placeholder '{text}' appears more than once"),
            ));
        }

        seen.push(name);
    }

    Ok(())
}

impl FromStr for PathTemplate {
    type Err = TemplateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for PathTemplate {
    type Error = TemplateError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl TryFrom<String> for PathTemplate {
    type Error = TemplateError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl AsRef<str> for PathTemplate {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Display for PathTemplate {
    #[cfg_attr(test, mutants::skip)] // Do not mutate display output.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

#[cfg(any(feature = "serde", test))]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
impl serde_core::Serialize for PathTemplate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde_core::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(any(feature = "serde", test))]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
impl<'de> serde_core::Deserialize<'de> for PathTemplate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde_core::Deserializer<'de>,
    {
        Self::parse(<String as serde_core::Deserialize>::deserialize(deserializer)?).map_err(serde_core::de::Error::custom)
    }
}
