//! Role expansion: assigned role names → effective permission set.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::{Action, Grant, Resource, Role, Scope, roles};

/// The merged, deduplicated union of grants across a user's assigned roles.
///
/// Exactly one authoritative scope exists per (resource, action) pair: when
/// different roles grant the same pair under both scopes, global wins (it is
/// strictly more permissive). The set is a pure projection of role names,
/// derived fresh at session validation and attached to the session as a
/// value — copy-on-read, never mutated in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Grant>", into = "Vec<Grant>")]
pub struct EffectivePermissions {
    grants: HashMap<Resource, HashMap<Action, Scope>>,
}

impl EffectivePermissions {
    /// Merge one grant into the set, collapsing by (resource, action).
    ///
    /// This is an explicit reduce: a plain set union would keep a global and
    /// a department entry for the same pair side by side, and callers must
    /// see one authoritative scope.
    pub fn merge(&mut self, grant: Grant) {
        self.grants
            .entry(grant.resource)
            .or_default()
            .entry(grant.action)
            .and_modify(|existing| *existing = existing.widest(grant.scope))
            .or_insert(grant.scope);
    }

    /// The authoritative scope for a pair, or `None` if nothing was granted.
    pub fn scope_of(&self, resource: &str, action: Action) -> Option<Scope> {
        self.grants.get(resource)?.get(&action).copied()
    }

    pub fn contains(&self, resource: &str, action: Action) -> bool {
        self.scope_of(resource, action).is_some()
    }

    pub fn len(&self) -> usize {
        self.grants.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.grants.is_empty()
    }

    /// All grants in deterministic order (for serialization and display).
    pub fn grants(&self) -> Vec<Grant> {
        let mut out: Vec<Grant> = self
            .grants
            .iter()
            .flat_map(|(resource, actions)| {
                actions.iter().map(|(action, scope)| Grant {
                    resource: resource.clone(),
                    action: *action,
                    scope: *scope,
                })
            })
            .collect();
        out.sort();
        out
    }
}

impl From<Vec<Grant>> for EffectivePermissions {
    fn from(grants: Vec<Grant>) -> Self {
        let mut set = Self::default();
        for grant in grants {
            set.merge(grant);
        }
        set
    }
}

impl From<EffectivePermissions> for Vec<Grant> {
    fn from(set: EffectivePermissions) -> Self {
        set.grants()
    }
}

/// Expand assigned role names into the effective permission set.
///
/// Unknown role names are ignored, not errors — a user record may carry a
/// stale role reference after a deploy removed the role. An empty input
/// yields an empty output; the zero-roles fallback to `Contributor` is the
/// caller's responsibility, applied before calling this.
pub fn expand(assigned: &[Role]) -> EffectivePermissions {
    let mut effective = EffectivePermissions::default();

    for role in assigned {
        let table = roles::role_grants(role.as_str());
        if table.is_empty() && !roles::is_defined(role.as_str()) {
            tracing::debug!(role = role.as_str(), "ignoring unknown role during expansion");
            continue;
        }
        for (resource, action, scope) in table {
            effective.merge(Grant::new(*resource, *action, *scope));
        }
    }

    effective
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::roles::{
        CONTRIBUTOR, DEPARTMENT_CONTRIBUTOR, GRC_ADMINISTRATOR, REVIEWER, ROLE_NAMES, role_grants,
    };

    fn expand_names(names: &[&str]) -> EffectivePermissions {
        let roles: Vec<Role> = names.iter().map(|n| Role::new(n.to_string())).collect();
        expand(&roles)
    }

    #[test]
    fn empty_input_yields_empty_set() {
        assert!(expand(&[]).is_empty());
    }

    #[test]
    fn unknown_role_is_ignored() {
        assert!(expand_names(&["NoSuchRole"]).is_empty());

        // An unknown role next to a known one contributes nothing.
        let with_stale = expand_names(&[CONTRIBUTOR, "NoSuchRole"]);
        assert_eq!(with_stale, expand_names(&[CONTRIBUTOR]));
    }

    #[test]
    fn every_defined_role_expands_to_something() {
        for name in ROLE_NAMES {
            assert!(!expand_names(&[name]).is_empty(), "{name} expanded to nothing");
        }
    }

    #[test]
    fn global_wins_when_both_scopes_are_granted() {
        // Reviewer grants compliance.controls:view globally,
        // DepartmentContributor grants the same pair department-scoped.
        let effective = expand_names(&[REVIEWER, DEPARTMENT_CONTRIBUTOR]);

        assert_eq!(
            effective.scope_of("compliance.controls", Action::View),
            Some(Scope::Global)
        );

        // Exactly one entry survives for the pair.
        let entries: Vec<_> = effective
            .grants()
            .into_iter()
            .filter(|g| g.resource.as_str() == "compliance.controls" && g.action == Action::View)
            .collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn lone_department_scope_is_preserved() {
        let effective = expand_names(&[DEPARTMENT_CONTRIBUTOR]);
        assert_eq!(
            effective.scope_of("risk.register", Action::Edit),
            Some(Scope::Department)
        );
    }

    #[test]
    fn serde_round_trip_preserves_the_set() {
        let effective = expand_names(&[REVIEWER, DEPARTMENT_CONTRIBUTOR]);
        let json = serde_json::to_string(&effective).unwrap();
        let back: EffectivePermissions = serde_json::from_str(&json).unwrap();
        assert_eq!(back, effective);
    }

    #[test]
    fn administrator_expansion_matches_table_size() {
        let effective = expand_names(&[GRC_ADMINISTRATOR]);
        assert_eq!(effective.len(), role_grants(GRC_ADMINISTRATOR).len());
    }

    proptest! {
        /// For any combination of defined roles: a pair granted globally by
        /// any selected role is globally scoped in the expansion, and every
        /// expanded pair traces back to some selected role.
        #[test]
        fn expansion_is_sound_for_any_role_combination(
            selected in proptest::sample::subsequence(ROLE_NAMES.to_vec(), 0..ROLE_NAMES.len())
        ) {
            let effective = expand_names(&selected);

            for name in &selected {
                for (resource, action, scope) in role_grants(name) {
                    let resolved = effective.scope_of(resource, *action);
                    prop_assert!(resolved.is_some());
                    if *scope == Scope::Global {
                        prop_assert_eq!(resolved, Some(Scope::Global));
                    }
                }
            }

            for grant in effective.grants() {
                let granted_by_someone = selected.iter().any(|name| {
                    role_grants(name).iter().any(|(resource, action, _)| {
                        *resource == grant.resource.as_str() && *action == grant.action
                    })
                });
                prop_assert!(granted_by_someone);
            }
        }
    }
}
