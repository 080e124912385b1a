use serde::{Deserialize, Serialize};

use crate::{Action, Resource, Scope};

/// A single (resource, action, scope) triple granted by a role.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Grant {
    pub resource: Resource,
    pub action: Action,
    pub scope: Scope,
}

impl Grant {
    pub fn new(resource: impl Into<Resource>, action: Action, scope: Scope) -> Self {
        Self {
            resource: resource.into(),
            action,
            scope,
        }
    }
}
