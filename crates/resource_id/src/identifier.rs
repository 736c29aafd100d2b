// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::fmt::{self, Display};

use crate::{PathTemplate, ResourceIdError, value_by_name, value_by_template};

const SUBSCRIPTIONS: &str = "subscriptions";
const RESOURCE_GROUPS: &str = "resourceGroups";
const PROVIDERS: &str = "providers";

/// A borrowed view over a hierarchical resource identifier.
///
/// Resource wrappers keep the identifier returned by the service and recover their constructor
/// parameters from it on `refresh` and `update`. Lookups that may legitimately fail, such as the
/// resource group of a subscription-scoped resource, return `Option`. The `require_*` variants
/// turn a miss into a [`ResourceIdError`] for paths where the segment must be present.
///
/// All values borrow from the identifier text.
///
/// With the `serde` feature a `ResourceId` serializes as its identifier string. It does not
/// implement `Deserialize`: read the identifier into a `String` and wrap it with
/// [`ResourceId::new`].
///
/// # Examples
///
/// ```
/// use resource_id::ResourceId;
///
/// let id = ResourceId::new("/subscriptions/0000/resourceGroups/rg1/providers/Microsoft.Authorization/locks/l1");
///
/// assert_eq!(id.subscription_id(), Some("0000"));
/// assert_eq!(id.resource_group_name(), Some("rg1"));
/// assert_eq!(id.provider_namespace(), Some("Microsoft.Authorization"));
/// assert_eq!(id.require_by_name("locks")?, "l1");
/// # Ok::<(), resource_id::ResourceIdError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResourceId<'a> {
    id: &'a str,
}

impl<'a> ResourceId<'a> {
    /// Wraps an identifier string.
    #[must_use]
    pub const fn new(id: &'a str) -> Self {
        Self { id }
    }

    /// Returns the identifier text.
    #[must_use]
    pub const fn as_str(&self) -> &'a str {
        self.id
    }

    /// Returns the segment after `segment_name`, see [`value_by_name`].
    #[must_use]
    pub fn value_by_name(&self, segment_name: &str) -> Option<&'a str> {
        value_by_name(self.id, segment_name)
    }

    /// Returns the value bound to `{parameter_name}` in `template`, see [`value_by_template`].
    #[must_use]
    pub fn value_by_template(&self, template: &str, parameter_name: &str) -> Option<&'a str> {
        value_by_template(self.id, template, parameter_name)
    }

    /// Returns the value bound to `{parameter_name}` in a validated template.
    #[must_use]
    pub fn value_of(&self, template: &PathTemplate, parameter_name: &str) -> Option<&'a str> {
        template.value_of(self.id, parameter_name)
    }

    /// Like [`value_by_name`](Self::value_by_name), but a miss is an error.
    ///
    /// # Errors
    ///
    /// Returns a [`ResourceIdError`] if the identifier has no value after `segment_name`.
    pub fn require_by_name(&self, segment_name: &str) -> Result<&'a str, ResourceIdError> {
        self.value_by_name(segment_name)
            .ok_or_else(|| ResourceIdError::missing(self.id, segment_name))
    }

    /// Like [`value_of`](Self::value_of), but a miss is an error.
    ///
    /// # Errors
    ///
    /// Returns a [`ResourceIdError`] if `{parameter_name}` does not resolve against the identifier.
    pub fn require_by_template(&self, template: &PathTemplate, parameter_name: &str) -> Result<&'a str, ResourceIdError> {
        self.value_of(template, parameter_name)
            .ok_or_else(|| ResourceIdError::missing(self.id, parameter_name))
    }

    /// The value of the `subscriptions` segment.
    #[must_use]
    pub fn subscription_id(&self) -> Option<&'a str> {
        self.value_by_name(SUBSCRIPTIONS)
    }

    /// The value of the `resourceGroups` segment.
    ///
    /// `None` for resources scoped to a subscription, tenant or management group.
    #[must_use]
    pub fn resource_group_name(&self) -> Option<&'a str> {
        self.value_by_name(RESOURCE_GROUPS)
    }

    /// The first resource provider namespace, such as `Microsoft.Compute`.
    #[must_use]
    pub fn provider_namespace(&self) -> Option<&'a str> {
        self.value_by_name(PROVIDERS)
    }
}

impl<'a> From<&'a str> for ResourceId<'a> {
    fn from(id: &'a str) -> Self {
        Self::new(id)
    }
}

impl<'a> From<&'a String> for ResourceId<'a> {
    fn from(id: &'a String) -> Self {
        Self::new(id)
    }
}

impl AsRef<str> for ResourceId<'_> {
    fn as_ref(&self) -> &str {
        self.id
    }
}

impl Display for ResourceId<'_> {
    #[cfg_attr(test, mutants::skip)] // Do not mutate display output.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id)
    }
}

#[cfg(any(feature = "serde", test))]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
impl serde_core::Serialize for ResourceId<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde_core::Serializer,
    {
        serializer.serialize_str(self.id)
    }
}
