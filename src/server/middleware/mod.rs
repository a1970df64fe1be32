//! Authorization middleware gates
//!
//! Three gates compose per route, mirroring the request chain
//! authentication → self-access → membership → handler:
//!
//! - [`RequireAuth`]: verifies the bearer credential and attaches the
//!   principal with no scope requirement.
//! - [`RequireScope`]: verifies the bearer credential, loads the account,
//!   and enforces a minimum account-level scope.
//! - [`RequireSelf`]: restricts a route to the subject whose id matches the
//!   `id` path parameter, unless the caller's account scope dominates the
//!   configured override scope.
//! - [`RequireMembership`]: enforces team-membership scope for site admins
//!   via the admin-override path.
//!
//! Gates terminate the request with a `{message}` JSON body on expected
//! negative outcomes; storage faults propagate to the actix error boundary
//! untouched.

mod helpers;
mod require_auth;
mod require_membership;
mod require_scope;
mod require_self;

#[cfg(test)]
mod tests;

pub use require_auth::RequireAuth;
pub use require_membership::RequireMembership;
pub use require_scope::RequireScope;
pub use require_self::RequireSelf;

use crate::core::models::User;

/// Principal attached to request extensions by the gates
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(pub User);
