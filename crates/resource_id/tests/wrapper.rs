// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Recovering route parameters the way resource wrappers do after a service call.

use ohno::ErrorExt;
use resource_id::{PathTemplate, ResourceId, ResourceIdError};

const LOCK_ROUTE: &str = "/subscriptions/{subscriptionId}/resourceGroups/{resourceGroupName}/providers/Microsoft.Authorization/locks/{lockName}";
const SCOPED_LOCK_ROUTE: &str = "/{scope}/providers/Microsoft.Authorization/locks/{lockName}";

/// The parameters a lock wrapper needs for `refresh` and `update`.
#[derive(Debug, PartialEq, Eq)]
struct LockParameters<'a> {
    resource_group_name: Option<&'a str>,
    lock_name: Option<&'a str>,
}

impl<'a> LockParameters<'a> {
    /// Mirrors a wrapper constructor that fills its fields from the returned identifier.
    fn from_returned_id(id: &'a str) -> Self {
        let id = ResourceId::new(id);
        Self {
            resource_group_name: id.resource_group_name(),
            lock_name: id.value_by_name("locks"),
        }
    }

    /// Mirrors a `getById` entry point where both parameters are mandatory.
    fn from_required_id(id: &'a str) -> Result<Self, ResourceIdError> {
        let id = ResourceId::new(id);
        Ok(Self {
            resource_group_name: Some(id.require_by_name("resourceGroups")?),
            lock_name: Some(id.require_by_name("locks")?),
        })
    }
}

#[test]
fn constructor_fills_parameters_from_identifier() {
    let parameters = LockParameters::from_returned_id(
        "/subscriptions/0000/resourceGroups/rg1/providers/Microsoft.Authorization/locks/l1",
    );

    assert_eq!(
        parameters,
        LockParameters {
            resource_group_name: Some("rg1"),
            lock_name: Some("l1"),
        }
    );
}

#[test]
fn constructor_leaves_missing_levels_unset() {
    let parameters =
        LockParameters::from_returned_id("/subscriptions/0000/providers/Microsoft.Authorization/locks/l1");

    assert_eq!(parameters.resource_group_name, None);
    assert_eq!(parameters.lock_name, Some("l1"));
}

#[test]
fn constructor_tolerates_garbage() {
    for id in ["", "/", "locks", "resourceGroups/", "not an identifier"] {
        let parameters = LockParameters::from_returned_id(id);
        assert_eq!(parameters.resource_group_name, None, "{id}");
        assert_eq!(parameters.lock_name, None, "{id}");
    }
}

#[test]
fn get_by_id_rejects_incomplete_identifier() {
    let id = "/subscriptions/0000/providers/Microsoft.Authorization/locks/l1";
    let err = LockParameters::from_required_id(id).unwrap_err();

    assert_eq!(err.id(), id);
    assert_eq!(err.segment(), "resourceGroups");
    assert!(err.message().contains("missing path segment 'resourceGroups'"));
}

#[test]
fn route_template_recovers_every_parameter() {
    let route = PathTemplate::from_static(LOCK_ROUTE).unwrap();
    let id = ResourceId::new("/subscriptions/0000/resourceGroups/rg1/providers/Microsoft.Authorization/locks/l1");

    assert_eq!(id.value_of(&route, "subscriptionId"), Some("0000"));
    assert_eq!(id.value_of(&route, "resourceGroupName"), Some("rg1"));
    assert_eq!(id.value_of(&route, "lockName"), Some("l1"));
    assert_eq!(
        route.values(id.as_str()).collect::<Vec<_>>(),
        [("subscriptionId", "0000"), ("resourceGroupName", "rg1"), ("lockName", "l1")]
    );
}

#[test]
fn scoped_route_captures_arbitrary_scope() {
    let route = PathTemplate::from_static(SCOPED_LOCK_ROUTE).unwrap();

    let cases = [
        (
            "/subscriptions/0000/resourceGroups/rg1/providers/Microsoft.Authorization/locks/l1",
            "subscriptions/0000/resourceGroups/rg1",
        ),
        ("/subscriptions/0000/providers/Microsoft.Authorization/locks/l1", "subscriptions/0000"),
        (
            "/subscriptions/0000/resourceGroups/rg1/providers/Microsoft.Compute/virtualMachines/vm1/providers/Microsoft.Authorization/locks/l1",
            "subscriptions/0000/resourceGroups/rg1/providers/Microsoft.Compute/virtualMachines/vm1",
        ),
    ];

    for (id, scope) in cases {
        let id = ResourceId::new(id);
        assert_eq!(id.require_by_template(&route, "scope").unwrap(), scope);
        assert_eq!(id.require_by_template(&route, "lockName").unwrap(), "l1");
    }
}

#[test]
fn nested_provider_namespace_is_the_first_one() {
    let id = ResourceId::new(
        "/subscriptions/0000/resourceGroups/rg1/providers/Microsoft.Compute/virtualMachines/vm1/providers/Microsoft.Authorization/locks/l1",
    );

    assert_eq!(id.provider_namespace(), Some("Microsoft.Compute"));
}
