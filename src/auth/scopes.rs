//! Scope hierarchy resolution
//!
//! Two independent role hierarchies gate the API: account-level scopes
//! ([`UserScope`]) and per-team membership scopes ([`TeamScope`]). Each
//! hierarchy is a small static directed graph mapping a scope to the
//! scopes it directly dominates, and a check walks the graph recursively
//! until it reaches the required scope or runs out of edges.
//!
//! The recursive reachability formulation is deliberate: it stays correct
//! if the hierarchies grow or pick up shared descendants, where a
//! flattened-set comparison would have to be regenerated.

use crate::core::models::{TeamScope, UserScope};

/// Scopes directly dominated by an account-level scope
const fn user_subscopes(scope: UserScope) -> &'static [UserScope] {
    match scope {
        UserScope::Admin => &[UserScope::User, UserScope::Unverified],
        UserScope::User => &[],
        UserScope::Unverified => &[],
    }
}

/// Scopes directly dominated by a team-level scope
const fn team_subscopes(scope: TeamScope) -> &'static [TeamScope] {
    match scope {
        TeamScope::Owner => &[TeamScope::User, TeamScope::Contributor],
        TeamScope::Contributor => &[TeamScope::User],
        TeamScope::User => &[],
    }
}

/// Check whether `held` is at least as privileged as `required` in the
/// account-level hierarchy
///
/// Reflexive, then a depth-first walk over the subscope relation. Leaf
/// scopes dominate nothing but themselves.
pub fn is_user_sub_scope(held: UserScope, required: UserScope) -> bool {
    if held == required {
        return true;
    }
    user_subscopes(held)
        .iter()
        .any(|&s| is_user_sub_scope(s, required))
}

/// Check whether `held` is at least as privileged as `required` in the
/// team-level hierarchy
pub fn is_team_sub_scope(held: TeamScope, required: TeamScope) -> bool {
    if held == required {
        return true;
    }
    team_subscopes(held)
        .iter()
        .any(|&s| is_team_sub_scope(s, required))
}

#[cfg(test)]
mod tests {
    use super::*;

    const USER_SCOPES: [UserScope; 3] = [UserScope::Unverified, UserScope::User, UserScope::Admin];
    const TEAM_SCOPES: [TeamScope; 3] = [TeamScope::User, TeamScope::Contributor, TeamScope::Owner];

    #[test]
    fn test_reflexivity() {
        for scope in USER_SCOPES {
            assert!(is_user_sub_scope(scope, scope));
        }
        for scope in TEAM_SCOPES {
            assert!(is_team_sub_scope(scope, scope));
        }
    }

    #[test]
    fn test_admin_dominates_all_user_scopes() {
        assert!(is_user_sub_scope(UserScope::Admin, UserScope::User));
        assert!(is_user_sub_scope(UserScope::Admin, UserScope::Unverified));
    }

    #[test]
    fn test_user_hierarchy_leaves_are_terminal() {
        assert!(!is_user_sub_scope(UserScope::User, UserScope::Admin));
        assert!(!is_user_sub_scope(UserScope::User, UserScope::Unverified));
        assert!(!is_user_sub_scope(UserScope::Unverified, UserScope::User));
        assert!(!is_user_sub_scope(UserScope::Unverified, UserScope::Admin));
    }

    #[test]
    fn test_owner_dominates_team_scopes() {
        assert!(is_team_sub_scope(TeamScope::Owner, TeamScope::Contributor));
        assert!(is_team_sub_scope(TeamScope::Owner, TeamScope::User));
    }

    #[test]
    fn test_contributor_dominates_user_only() {
        assert!(is_team_sub_scope(TeamScope::Contributor, TeamScope::User));
        assert!(!is_team_sub_scope(TeamScope::Contributor, TeamScope::Owner));
    }

    #[test]
    fn test_team_user_is_terminal() {
        assert!(!is_team_sub_scope(TeamScope::User, TeamScope::Owner));
        assert!(!is_team_sub_scope(TeamScope::User, TeamScope::Contributor));
    }

    #[test]
    fn test_idempotence() {
        for held in TEAM_SCOPES {
            for required in TEAM_SCOPES {
                let first = is_team_sub_scope(held, required);
                for _ in 0..10 {
                    assert_eq!(is_team_sub_scope(held, required), first);
                }
            }
        }
    }
}
