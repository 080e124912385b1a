use std::borrow::{Borrow, Cow};

use serde::{Deserialize, Serialize};

/// Resource identifier naming a protected feature area.
///
/// Resources are namespaced strings (e.g. "compliance.controls",
/// "risk.register"). They are opaque at this layer; the catalog records which
/// actions each resource supports. No hierarchy is enforced beyond the
/// namespace convention.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Resource(Cow<'static, str>);

impl Resource {
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&'static str> for Resource {
    fn from(value: &'static str) -> Self {
        Resource::new(value)
    }
}

impl Borrow<str> for Resource {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl core::fmt::Display for Resource {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}
