//! Authentication and authorization
//!
//! Bearer credential verification plus the scope hierarchies gating every
//! protected route. The middleware gates in [`crate::server::middleware`]
//! consume [`AuthSystem::authenticate`] and the subscope checks in
//! [`scopes`].

pub mod jwt;
pub mod password;
pub mod scopes;

pub use scopes::{is_team_sub_scope, is_user_sub_scope};

use crate::config::AuthConfig;
use crate::core::models::User;
use crate::storage::StorageLayer;
use crate::utils::error::Result;
use std::sync::Arc;
use tracing::debug;

/// Authentication system
///
/// Resolves bearer tokens to user rows. Shared across handlers via
/// [`crate::server::AppState`].
#[derive(Clone)]
pub struct AuthSystem {
    storage: Arc<StorageLayer>,
    jwt: Arc<jwt::JwtHandler>,
}

/// Outcome of resolving a bearer credential
///
/// Expected negative outcomes (bad token, unknown subject) land here as a
/// failed result with a message; storage faults propagate as errors.
#[derive(Debug, Clone)]
pub struct AuthResult {
    /// Whether authentication succeeded
    pub success: bool,
    /// Authenticated user (if any)
    pub user: Option<User>,
    /// Failure message (if authentication failed)
    pub error: Option<String>,
}

impl AuthResult {
    fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            user: None,
            error: Some(message.into()),
        }
    }
}

impl AuthSystem {
    /// Create a new authentication system
    pub fn new(config: &AuthConfig, storage: Arc<StorageLayer>) -> Self {
        Self {
            storage,
            jwt: Arc::new(jwt::JwtHandler::new(config)),
        }
    }

    /// JWT handler
    pub fn jwt(&self) -> &jwt::JwtHandler {
        &self.jwt
    }

    /// Resolve a bearer token to a user
    pub async fn authenticate(&self, token: &str) -> Result<AuthResult> {
        let claims = match self.jwt.verify_token(token) {
            Ok(claims) => claims,
            Err(e) => {
                debug!("Bearer token rejected: {}", e);
                return Ok(AuthResult::failure("Invalid token"));
            }
        };

        match self.storage.database.find_user_by_id(claims.sub).await? {
            Some(user) => Ok(AuthResult {
                success: true,
                user: Some(user),
                error: None,
            }),
            None => Ok(AuthResult::failure("User not found")),
        }
    }
}
