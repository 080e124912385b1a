use serde::{Deserialize, Serialize};

/// How broadly a granted permission applies.
///
/// Modeled as a closed variant (not a string) so the widest-scope merge rule
/// stays a total, exhaustive match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    /// Applies to all records of the resource.
    Global,
    /// Applies only to records whose owning department matches the acting
    /// user's own department.
    Department,
}

impl Scope {
    /// Merge two scopes granted for the same (resource, action) pair.
    ///
    /// Global is strictly more permissive and always wins.
    pub fn widest(self, other: Scope) -> Scope {
        match (self, other) {
            (Scope::Global, _) | (_, Scope::Global) => Scope::Global,
            (Scope::Department, Scope::Department) => Scope::Department,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Scope::Global => "global",
            Scope::Department => "department",
        }
    }
}

impl core::fmt::Display for Scope {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
