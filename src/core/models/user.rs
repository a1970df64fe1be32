//! User account model and user-level scopes

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// User ID
    pub id: Uuid,
    /// Email address (unique)
    pub email: String,
    /// Display name
    pub name: String,
    /// Password hash
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    /// Account-level scope
    pub role: UserScope,
    /// Creation timestamp
    pub created_at: chrono::DateTime<chrono::Utc>,
    /// Last update timestamp
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// Account-level scope
///
/// Exactly one scope per account. New accounts start as `Unverified` and
/// are promoted to `User` once their email verification code is redeemed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserScope {
    /// Account awaiting email verification
    Unverified,
    /// Regular verified account
    User,
    /// Site administrator
    Admin,
}

impl std::fmt::Display for UserScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserScope::Unverified => write!(f, "UNVERIFIED"),
            UserScope::User => write!(f, "USER"),
            UserScope::Admin => write!(f, "ADMIN"),
        }
    }
}

impl std::str::FromStr for UserScope {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "UNVERIFIED" => Ok(UserScope::Unverified),
            "USER" => Ok(UserScope::User),
            "ADMIN" => Ok(UserScope::Admin),
            _ => Err(format!("Invalid user scope: {}", s)),
        }
    }
}

impl User {
    /// Create a new unverified user
    pub fn new(email: String, name: String, password_hash: String) -> Self {
        let now = chrono::Utc::now();
        Self {
            id: Uuid::new_v4(),
            email,
            name,
            password_hash,
            role: UserScope::Unverified,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check if the account holds the site-admin scope
    pub fn is_admin(&self) -> bool {
        self.role == UserScope::Admin
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_user_scope_round_trip() {
        for scope in [UserScope::Unverified, UserScope::User, UserScope::Admin] {
            assert_eq!(UserScope::from_str(&scope.to_string()), Ok(scope));
        }
    }

    #[test]
    fn test_user_scope_rejects_unknown() {
        assert!(UserScope::from_str("SUPERADMIN").is_err());
    }

    #[test]
    fn test_new_user_starts_unverified() {
        let user = User::new(
            "rancher@example.com".to_string(),
            "Rancher".to_string(),
            "hash".to_string(),
        );
        assert_eq!(user.role, UserScope::Unverified);
        assert!(!user.is_admin());
    }

    #[test]
    fn test_password_hash_not_serialized() {
        let user = User::new(
            "rancher@example.com".to_string(),
            "Rancher".to_string(),
            "secret-hash".to_string(),
        );
        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("secret-hash"));
        assert!(!json.contains("password_hash"));
    }
}
