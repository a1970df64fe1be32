//! Configuration management
//!
//! Configuration is loaded from a YAML file (`config/grazelog.yaml` by
//! default) and overridden by environment variables. Every section carries
//! serde defaults so a missing file still yields a runnable development
//! configuration.

use crate::utils::error::{BackendError, Result};
use rand::Rng;
use rand::distributions::Alphanumeric;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, warn};

/// Top-level application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Authentication configuration
    #[serde(default)]
    pub auth: AuthConfig,
    /// Database configuration
    #[serde(default)]
    pub database: DatabaseConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind host
    #[serde(default = "default_host")]
    pub host: String,
    /// Bind port
    #[serde(default = "default_port")]
    pub port: u16,
    /// CORS configuration
    #[serde(default)]
    pub cors: CorsConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors: CorsConfig::default(),
        }
    }
}

/// CORS configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    /// Enable CORS handling
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Allowed origins; empty list allows any origin
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            allowed_origins: vec![],
        }
    }
}

impl CorsConfig {
    /// Whether any origin is acceptable
    pub fn allows_all_origins(&self) -> bool {
        self.allowed_origins.is_empty()
    }
}

/// Authentication configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// JWT signing secret
    #[serde(default = "generate_jwt_secret")]
    pub jwt_secret: String,
    /// JWT expiration in seconds
    #[serde(default = "default_jwt_expiration")]
    pub jwt_expiration: u64,
    /// Verification code lifetime in seconds
    #[serde(default = "default_code_expiration")]
    pub code_expiration: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: generate_jwt_secret(),
            jwt_expiration: default_jwt_expiration(),
            code_expiration: default_code_expiration(),
        }
    }
}

impl AuthConfig {
    /// Validate authentication configuration
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.jwt_secret.len() < 32 {
            return Err("JWT secret must be at least 32 characters long".to_string());
        }
        if self.jwt_secret == "your-secret-key" || self.jwt_secret == "change-me" {
            return Err(
                "JWT secret must not use default values. Generate a secure random secret."
                    .to_string(),
            );
        }
        if self.jwt_expiration < 300 {
            return Err("JWT expiration should be at least 5 minutes (300 seconds)".to_string());
        }
        Ok(())
    }
}

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Connection URL (sqlite or postgres)
    #[serde(default = "default_database_url")]
    pub url: String,
    /// Maximum pool connections
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Run migrations on startup
    #[serde(default = "default_true")]
    pub auto_migrate: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: default_database_url(),
            max_connections: default_max_connections(),
            auto_migrate: true,
        }
    }
}

impl Config {
    /// Load configuration from a YAML file plus environment overrides
    ///
    /// `path` defaults to `config/grazelog.yaml`. A missing file is not an
    /// error; environment variables and defaults fill in the rest.
    pub fn load(path: Option<&str>) -> Result<Self> {
        dotenvy::dotenv().ok();

        let path = path.unwrap_or("config/grazelog.yaml");
        let mut config = if Path::new(path).exists() {
            debug!("Loading configuration from {}", path);
            let raw = std::fs::read_to_string(path)?;
            serde_yaml::from_str(&raw)?
        } else {
            debug!("No configuration file at {}, using defaults", path);
            Config::default()
        };

        config.apply_env();
        config.validate()?;
        Ok(config)
    }

    /// Apply environment variable overrides
    fn apply_env(&mut self) {
        if let Ok(host) = std::env::var("HOST") {
            self.server.host = host;
        }
        if let Ok(port) = std::env::var("PORT") {
            match port.parse() {
                Ok(port) => self.server.port = port,
                Err(_) => warn!("Ignoring unparseable PORT value: {}", port),
            }
        }
        if let Ok(secret) = std::env::var("AUTH_SECRET") {
            self.auth.jwt_secret = secret;
        }
        if let Ok(url) = std::env::var("DATABASE_URL") {
            self.database.url = url;
        }
    }

    /// Validate the full configuration
    pub fn validate(&self) -> Result<()> {
        self.auth.validate().map_err(BackendError::Config)?;
        if self.database.url.is_empty() {
            return Err(BackendError::Config(
                "Database URL cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    9090
}

fn default_true() -> bool {
    true
}

fn default_jwt_expiration() -> u64 {
    // Matches the mobile client's month-long sessions
    60 * 60 * 24 * 30
}

fn default_code_expiration() -> u64 {
    300
}

fn default_database_url() -> String {
    "sqlite://grazelog.db?mode=rwc".to_string()
}

fn default_max_connections() -> u32 {
    10
}

/// Generate a secure random JWT secret for unconfigured development runs
fn generate_jwt_secret() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(64)
        .map(char::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_auth_config_rejects_short_secret() {
        let auth = AuthConfig {
            jwt_secret: "short".to_string(),
            ..AuthConfig::default()
        };
        assert!(auth.validate().is_err());
    }

    #[test]
    fn test_auth_config_rejects_placeholder_secret() {
        let auth = AuthConfig {
            jwt_secret: "change-me".repeat(5),
            ..AuthConfig::default()
        };
        // Long enough but still not the literal placeholder
        assert!(auth.validate().is_ok());

        let auth = AuthConfig {
            jwt_secret: "change-me".to_string(),
            ..AuthConfig::default()
        };
        assert!(auth.validate().is_err());
    }
}
