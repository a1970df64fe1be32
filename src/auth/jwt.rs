//! JWT token handling

use crate::config::AuthConfig;
use crate::utils::error::{BackendError, Result};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::{debug, warn};
use uuid::Uuid;

/// JWT claims carried by every issued token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: Uuid,
    /// Issued at (seconds since epoch)
    pub iat: u64,
    /// Expiration (seconds since epoch)
    pub exp: u64,
    /// Issuer
    pub iss: String,
}

/// JWT handler
pub struct JwtHandler {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    expiration: u64,
    issuer: String,
}

impl JwtHandler {
    /// Create a new JWT handler
    pub fn new(config: &AuthConfig) -> Self {
        let secret = config.jwt_secret.as_bytes();

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
            expiration: config.jwt_expiration,
            issuer: "grazelog-rs".to_string(),
        }
    }

    /// Create a token for a user
    pub fn create_token(&self, user_id: Uuid) -> Result<String> {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|e| BackendError::internal(format!("System time error: {}", e)))?
            .as_secs();

        let claims = Claims {
            sub: user_id,
            iat: now,
            exp: now + self.expiration,
            iss: self.issuer.clone(),
        };

        let header = Header::new(self.algorithm);
        let token = encode(&header, &claims, &self.encoding_key).map_err(BackendError::Jwt)?;

        debug!("Created token for user: {}", user_id);
        Ok(token)
    }

    /// Verify and decode a token
    pub fn verify_token(&self, token: &str) -> Result<Claims> {
        let mut validation = Validation::new(self.algorithm);
        validation.set_issuer(&[&self.issuer]);
        validation.set_required_spec_claims(&["exp", "iss"]);

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
            warn!("JWT verification failed: {}", e);
            BackendError::Jwt(e)
        })?;

        debug!("Token verified for user: {}", token_data.claims.sub);
        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_handler() -> JwtHandler {
        JwtHandler::new(&AuthConfig {
            jwt_secret: "test-secret-test-secret-test-secret!".to_string(),
            jwt_expiration: 3600,
            code_expiration: 300,
        })
    }

    #[test]
    fn test_token_round_trip() {
        let handler = test_handler();
        let user_id = Uuid::new_v4();

        let token = handler.create_token(user_id).unwrap();
        let claims = handler.verify_token(&token).unwrap();

        assert_eq!(claims.sub, user_id);
        assert_eq!(claims.iss, "grazelog-rs");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_tampered_token_rejected() {
        let handler = test_handler();
        let token = handler.create_token(Uuid::new_v4()).unwrap();

        let mut tampered = token.clone();
        tampered.pop();
        tampered.push(if token.ends_with('A') { 'B' } else { 'A' });

        assert!(handler.verify_token(&tampered).is_err());
    }

    #[test]
    fn test_foreign_secret_rejected() {
        let handler = test_handler();
        let other = JwtHandler::new(&AuthConfig {
            jwt_secret: "another-secret-another-secret-another!".to_string(),
            jwt_expiration: 3600,
            code_expiration: 300,
        });

        let token = other.create_token(Uuid::new_v4()).unwrap();
        assert!(handler.verify_token(&token).is_err());
    }
}
