//! Helper functions for the middleware gates

use crate::core::models::User;
use crate::server::AppState;
use actix_web::dev::ServiceRequest;
use actix_web::http::header::HeaderMap;
use actix_web::{HttpResponse, web};

/// Fallback message when the credential cannot name a better one
pub(crate) const AUTH_FAILURE_MESSAGE: &str = "Error authenticating email and password";

/// Extract a bearer token from the Authorization header
pub(crate) fn extract_bearer_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get("authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|token| token.to_string())
}

/// Shared application state, or a 500 if the app was wired without it
pub(crate) fn app_state(req: &ServiceRequest) -> Result<web::Data<AppState>, actix_web::Error> {
    req.app_data::<web::Data<AppState>>()
        .cloned()
        .ok_or_else(|| actix_web::error::ErrorInternalServerError("Missing application state"))
}

/// Resolve the request's bearer credential to a user
///
/// Expected failures (missing/invalid token, unknown subject) come back as
/// a ready-made 401 response; storage faults propagate as errors.
pub(crate) async fn authenticate_request(
    req: &ServiceRequest,
) -> Result<Result<User, HttpResponse>, actix_web::Error> {
    let state = app_state(req)?;

    let Some(token) = extract_bearer_token(req.headers()) else {
        return Ok(Err(unauthorized(AUTH_FAILURE_MESSAGE)));
    };

    let result = state.auth.authenticate(&token).await?;
    match result.user {
        Some(user) => Ok(Ok(user)),
        None => {
            let message = result
                .error
                .unwrap_or_else(|| AUTH_FAILURE_MESSAGE.to_string());
            Ok(Err(unauthorized(&message)))
        }
    }
}

pub(crate) fn unauthorized(message: &str) -> HttpResponse {
    HttpResponse::Unauthorized().json(serde_json::json!({ "message": message }))
}

pub(crate) fn forbidden(message: &str) -> HttpResponse {
    HttpResponse::Forbidden().json(serde_json::json!({ "message": message }))
}

pub(crate) fn bad_request(message: &str) -> HttpResponse {
    HttpResponse::BadRequest().json(serde_json::json!({ "message": message }))
}
