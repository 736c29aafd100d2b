// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Shows a resource wrapper recovering its route parameters from a returned identifier.

use resource_id::{PathTemplate, ResourceId, ResourceIdError};

const SCOPED_LOCK_ROUTE: &str = "/{scope}/providers/Microsoft.Authorization/locks/{lockName}";

#[derive(Debug)]
struct ManagementLock {
    resource_group_name: String,
    lock_name: String,
}

impl ManagementLock {
    fn from_id(id: &str) -> Result<Self, ResourceIdError> {
        let id = ResourceId::new(id);
        Ok(Self {
            resource_group_name: id.require_by_name("resourceGroups")?.to_owned(),
            lock_name: id.require_by_name("locks")?.to_owned(),
        })
    }

    fn refresh(&self) {
        println!(
            "GET resourceGroups/{}/providers/Microsoft.Authorization/locks/{}",
            self.resource_group_name, self.lock_name
        );
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let lock = ManagementLock::from_id("/subscriptions/0000/resourceGroups/rg1/providers/Microsoft.Authorization/locks/l1")?;
    lock.refresh();

    // A subscription-level lock has no resource group to recover.
    let subscription_lock = "/subscriptions/0000/providers/Microsoft.Authorization/locks/l2";
    match ManagementLock::from_id(subscription_lock) {
        Ok(lock) => lock.refresh(),
        Err(e) => println!("{e}"),
    }

    // The scoped route works for locks at any level.
    let route = PathTemplate::from_static(SCOPED_LOCK_ROUTE)?;
    for (parameter, value) in route.values(subscription_lock) {
        println!("{parameter} = {value}");
    }

    Ok(())
}
