//! Error handling
//!
//! This module defines the error type used throughout the backend and its
//! mapping onto HTTP responses.

use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

/// Result type alias for the backend
pub type Result<T> = std::result::Result<T, BackendError>;

/// Main error type for the backend
#[derive(Error, Debug)]
pub enum BackendError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Database errors
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JWT errors
    #[error("JWT error: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),

    /// Authentication errors
    #[error("{0}")]
    Auth(String),

    /// Authorization errors
    #[error("{0}")]
    Forbidden(String),

    /// Bad request errors
    #[error("{0}")]
    BadRequest(String),

    /// Not found errors
    #[error("{0}")]
    NotFound(String),

    /// Conflict errors
    #[error("{0}")]
    Conflict(String),

    /// Crypto errors
    #[error("Crypto error: {0}")]
    Crypto(String),

    /// Internal server errors
    #[error("Internal server error: {0}")]
    Internal(String),

    /// Server startup errors
    #[error("Server error: {0}")]
    Server(String),
}

impl BackendError {
    /// Create an authentication error
    pub fn auth(msg: impl Into<String>) -> Self {
        Self::Auth(msg.into())
    }

    /// Create an authorization error
    pub fn forbidden(msg: impl Into<String>) -> Self {
        Self::Forbidden(msg.into())
    }

    /// Create a not-found error
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Create a server error
    pub fn server(msg: impl Into<String>) -> Self {
        Self::Server(msg.into())
    }

    /// HTTP status code for this error
    pub fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;
        match self {
            BackendError::Auth(_) | BackendError::Jwt(_) => StatusCode::UNAUTHORIZED,
            BackendError::Forbidden(_) => StatusCode::FORBIDDEN,
            BackendError::BadRequest(_) => StatusCode::BAD_REQUEST,
            BackendError::NotFound(_) => StatusCode::NOT_FOUND,
            BackendError::Conflict(_) => StatusCode::CONFLICT,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error body sent to clients: a class-level message plus the detail line
#[derive(Debug, serde::Serialize)]
struct ErrorBody {
    message: String,
    errors: Vec<String>,
}

impl ResponseError for BackendError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        BackendError::status_code(self)
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let message = if status.is_server_error() {
            "Server error"
        } else {
            "Request error"
        };
        HttpResponse::build(status).json(ErrorBody {
            message: message.to_string(),
            errors: vec![self.to_string()],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            BackendError::auth("bad token").status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            BackendError::forbidden("Unauthorized").status_code(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            BackendError::not_found("Team not found").status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            BackendError::internal("boom").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_response_body_shape() {
        let resp = BackendError::not_found("Team not found").error_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
