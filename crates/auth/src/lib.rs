//! `aegisgrc-auth` — pure authorization core (RBAC).
//!
//! This crate is intentionally decoupled from HTTP and storage. It holds the
//! permission catalog, the compiled-in role definitions, the role-to-effective-
//! permission expander, the authorization check, and the navigation filter.
//! Everything here is a synchronous, total function over static data plus the
//! caller's inputs; nothing suspends, retries, or throws across the boundary.

pub mod action;
pub mod catalog;
pub mod check;
pub mod claims;
pub mod expand;
pub mod explain;
pub mod grant;
pub mod nav;
pub mod principal;
pub mod resource;
pub mod roles;
pub mod scope;
pub mod token;

pub use action::Action;
pub use check::{DepartmentContext, can_access_route, has_permission};
pub use claims::{SessionClaims, TokenValidationError, validate_claims};
pub use expand::{EffectivePermissions, expand};
pub use explain::{AccessExplanation, DenialKind, DenialReason, explain_access};
pub use grant::Grant;
pub use nav::{NavItem, NavTree, default_navigation};
pub use principal::Principal;
pub use resource::Resource;
pub use roles::Role;
pub use scope::Scope;
pub use token::{Hs256TokenValidator, TokenValidator};
