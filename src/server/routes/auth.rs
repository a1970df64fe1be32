//! Account endpoints: signup, signin, token introspection, verification

use crate::auth::password::{hash_password, verify_password};
use crate::core::models::User;
use crate::server::AppState;
use crate::server::middleware::{AuthenticatedUser, RequireAuth};
use crate::utils::error::{BackendError, Result};
use actix_web::{HttpResponse, web};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Signup request body
#[derive(Debug, Deserialize)]
pub struct SignUpRequest {
    pub email: String,
    pub password: String,
    pub name: String,
}

/// Signin request body
#[derive(Debug, Deserialize)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

/// Resend-code request body
#[derive(Debug, Deserialize)]
pub struct ResendCodeRequest {
    pub email: String,
}

/// Verification request body
#[derive(Debug, Deserialize)]
pub struct VerifyRequest {
    pub email: String,
    pub code: String,
}

/// Token plus the authenticated account
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
    pub user: User,
}

/// Account-only response for token introspection
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub user: User,
}

/// Create an unverified account and issue its first token
pub async fn sign_up(
    state: web::Data<AppState>,
    request: web::Json<SignUpRequest>,
) -> Result<HttpResponse> {
    let request = request.into_inner();
    info!("Signup attempt: {}", request.email);

    if state
        .storage
        .database
        .find_user_by_email(&request.email)
        .await?
        .is_some()
    {
        return Err(BackendError::Conflict(
            "Email address already in use".to_string(),
        ));
    }

    let password_hash = hash_password(&request.password)?;
    let user = User::new(request.email.clone(), request.name, password_hash);
    let user = state.storage.database.create_user(&user).await?;

    state
        .storage
        .database
        .create_verification_code(&request.email, state.config.auth.code_expiration)
        .await?;

    let token = state.auth.jwt().create_token(user.id)?;
    Ok(HttpResponse::Created().json(TokenResponse { token, user }))
}

/// Exchange email and password for a token
pub async fn sign_in(
    state: web::Data<AppState>,
    request: web::Json<SignInRequest>,
) -> Result<HttpResponse> {
    let request = request.into_inner();

    let user = state
        .storage
        .database
        .find_user_by_email(&request.email)
        .await?
        .ok_or_else(|| {
            warn!("Signin attempt with unknown email: {}", request.email);
            BackendError::auth("Email or password incorrect")
        })?;

    if !verify_password(&request.password, &user.password_hash)? {
        warn!("Signin attempt with bad password for {}", request.email);
        return Err(BackendError::auth("Email or password incorrect"));
    }

    info!("User signed in: {}", user.email);
    let token = state.auth.jwt().create_token(user.id)?;
    Ok(HttpResponse::Ok().json(TokenResponse { token, user }))
}

/// Return the account behind the presented bearer token
pub async fn jwt_sign_in(principal: web::ReqData<AuthenticatedUser>) -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(UserResponse {
        user: principal.into_inner().0,
    }))
}

/// Mint a fresh verification code for an existing account
pub async fn resend_code(
    state: web::Data<AppState>,
    request: web::Json<ResendCodeRequest>,
) -> Result<HttpResponse> {
    let request = request.into_inner();

    if state
        .storage
        .database
        .find_user_by_email(&request.email)
        .await?
        .is_none()
    {
        return Err(BackendError::BadRequest(
            "No user with that email".to_string(),
        ));
    }

    state
        .storage
        .database
        .create_verification_code(&request.email, state.config.auth.code_expiration)
        .await?;

    Ok(HttpResponse::Created().finish())
}

/// Redeem a verification code, promoting the account and issuing a token
pub async fn verify(
    state: web::Data<AppState>,
    request: web::Json<VerifyRequest>,
) -> Result<HttpResponse> {
    let request = request.into_inner();

    let user = state
        .storage
        .database
        .redeem_verification_code(&request.email, &request.code)
        .await?;

    info!("Account verified: {}", user.email);
    let token = state.auth.jwt().create_token(user.id)?;
    Ok(HttpResponse::Ok().json(TokenResponse { token, user }))
}

/// Wire the account routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/auth")
            .route("/signup", web::post().to(sign_up))
            .route("/signin", web::post().to(sign_in))
            .route("/jwt", web::get().to(jwt_sign_in).wrap(RequireAuth::new()))
            .route("/resend-code", web::post().to(resend_code))
            .route("/verify", web::patch().to(verify)),
    );
}
