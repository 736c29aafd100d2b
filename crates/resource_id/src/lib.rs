// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

#![doc(html_logo_url = "https://media.githubusercontent.com/media/microsoft/oxidizer/refs/heads/main/crates/resource_id/logo.png")]
#![doc(html_favicon_url = "https://media.githubusercontent.com/media/microsoft/oxidizer/refs/heads/main/crates/resource_id/favicon.ico")]
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! Resolves names and template parameters from hierarchical cloud resource identifiers.
//!
//! Cloud resources are named by slash-delimited identifiers that alternate type names and
//! values:
//!
//! ```text
//! /subscriptions/{subscriptionId}/resourceGroups/{resourceGroupName}/providers/Microsoft.Authorization/locks/{lockName}
//! ```
//!
//! Resource wrappers hold on to the identifier returned by the service and need to recover the
//! parameters of their REST routes from it, for example the resource group and lock name to
//! call on `refresh`. This crate provides the two lookups that do that.
//!
//! # Lookups
//!
//! - [`value_by_name`] returns the segment that follows a literal type name, such as the value
//!   after `resourceGroups`.
//! - [`value_by_template`] aligns a route template with the identifier from the right and returns
//!   the part bound to a `{placeholder}`. A placeholder at the start of the template captures the
//!   whole leading part of the identifier.
//!
//! Both ignore case and return slices of the identifier. When the identifier does not contain
//! what was asked for they return `None` instead of failing, as many identifiers legitimately
//! omit hierarchy levels.
//!
//! # Types
//!
//! - [`PathTemplate`]: a route template validated once and reused for lookups.
//! - [`ResourceId`]: a borrowed identifier view with well-known accessors and `require_*`
//!   variants that report a missing segment as a [`ResourceIdError`].
//!
//! # Example
//!
//! ```
//! use resource_id::{PathTemplate, ResourceId, value_by_name, value_by_template};
//!
//! let id = "/subscriptions/0000/resourceGroups/rg1/providers/Microsoft.Authorization/locks/l1";
//!
//! assert_eq!(value_by_name(id, "resourceGroups"), Some("rg1"));
//! assert_eq!(
//!     value_by_template(id, "/{scope}/providers/Microsoft.Authorization/locks/{lockName}", "scope"),
//!     Some("subscriptions/0000/resourceGroups/rg1")
//! );
//!
//! let template = PathTemplate::from_static("/resourceGroups/{resourceGroupName}/providers/Microsoft.Authorization/locks/{lockName}")?;
//! let id = ResourceId::new(id);
//! assert_eq!(id.require_by_template(&template, "lockName")?, "l1");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Features
//!
//! - `logs` (default): emits `tracing` events when a required segment is missing or a template
//!   is rejected.
//! - `serde`: serializes [`PathTemplate`] and [`ResourceId`] as strings. [`PathTemplate`] also
//!   deserializes, validating the text.

mod error;
mod identifier;
mod resolve;
mod segments;
mod template;

pub use error::{ResourceIdError, TemplateError};
pub use identifier::ResourceId;
pub use resolve::{value_by_name, value_by_template};
pub use template::PathTemplate;
