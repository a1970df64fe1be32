//! Team and membership models
//!
//! A team is a ranch operation; memberships bind users to a team with a
//! team-level scope.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Team (ranch operation)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    /// Team ID
    pub id: Uuid,
    /// Team name
    pub name: String,
    /// Ranch size in acres
    pub acre_size: f64,
    /// Mailing address
    pub address: String,
    /// Years the operation has ranched
    pub yrs_ranch: i32,
    /// Years under holistic management
    pub yrs_hol_mang: i32,
    /// Join code handed to invited members (unique)
    pub code: String,
    /// Creation timestamp
    pub created_at: chrono::DateTime<chrono::Utc>,
    /// Last update timestamp
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// Membership binding a user to a team
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Membership {
    /// Membership ID
    pub id: Uuid,
    /// Team ID
    pub team_id: Uuid,
    /// User ID
    pub user_id: Uuid,
    /// Team-level scope held by the user within the team
    pub role: TeamScope,
    /// Creation timestamp
    pub created_at: chrono::DateTime<chrono::Utc>,
    /// Last update timestamp
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// Team-level scope
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TeamScope {
    /// Read-mostly team member
    User,
    /// Member who records censuses and manages herds
    Contributor,
    /// Team owner
    Owner,
}

impl std::fmt::Display for TeamScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TeamScope::User => write!(f, "USER"),
            TeamScope::Contributor => write!(f, "CONTRIBUTOR"),
            TeamScope::Owner => write!(f, "OWNER"),
        }
    }
}

impl std::str::FromStr for TeamScope {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "USER" => Ok(TeamScope::User),
            "CONTRIBUTOR" => Ok(TeamScope::Contributor),
            "OWNER" => Ok(TeamScope::Owner),
            _ => Err(format!("Invalid team scope: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_team_scope_round_trip() {
        for scope in [TeamScope::User, TeamScope::Contributor, TeamScope::Owner] {
            assert_eq!(TeamScope::from_str(&scope.to_string()), Ok(scope));
        }
    }

    #[test]
    fn test_team_scope_rejects_unknown() {
        assert!(TeamScope::from_str("MANAGER").is_err());
    }
}
