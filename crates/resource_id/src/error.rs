// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

/// A resource identifier lacks a segment or parameter the caller requires.
///
/// Returned by the `require_*` accessors of [`ResourceId`](crate::ResourceId). The optional
/// accessors report the same condition as `None` instead.
///
/// # Examples
///
/// ```
/// use ohno::ErrorExt;
/// use resource_id::ResourceId;
///
/// let id = ResourceId::new("/subscriptions/0000/providers/Microsoft.Authorization/locks/l1");
/// let err = id.require_by_name("resourceGroups").unwrap_err();
///
/// assert_eq!(err.segment(), "resourceGroups");
/// assert_eq!(
///     err.message(),
///     "the resource ID '/subscriptions/0000/providers/Microsoft.Authorization/locks/l1' is not valid, missing path segment 'resourceGroups'"
/// );
/// ```
#[ohno::error]
#[display("the resource ID '{id}' is not valid, missing path segment '{segment}'")]
pub struct ResourceIdError {
    id: String,
    segment: String,
}

impl ResourceIdError {
    pub(crate) fn missing(id: &str, segment: &str) -> Self {
        #[cfg(feature = "logs")]
        tracing::debug!(
            resource_id.id = id,
            resource_id.segment = segment,
            "resource_id.missing_segment"
        );

        Self::new(id, segment)
    }

    /// The identifier that was searched.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The segment name or template parameter that could not be resolved.
    #[must_use]
    pub fn segment(&self) -> &str {
        &self.segment
    }
}

/// A path template failed validation.
#[ohno::error]
#[display("invalid path template '{template}': {reason}")]
pub struct TemplateError {
    template: String,
    reason: String,
}

impl TemplateError {
    pub(crate) fn invalid(template: &str, reason: impl Into<String>) -> Self {
        let reason = reason.into();

        #[cfg(feature = "logs")]
        tracing::debug!(
            resource_id.template = template,
            resource_id.reason = reason.as_str(),
            "resource_id.invalid_template"
        );

        Self::new(template, reason)
    }

    /// The rejected template text.
    #[must_use]
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Why the template was rejected.
    #[must_use]
    pub fn reason(&self) -> &str {
        &self.reason
    }
}
