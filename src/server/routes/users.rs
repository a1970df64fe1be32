//! User account management endpoints
//!
//! Every route is restricted to the account itself, with site admins
//! allowed through the override scope.

use crate::auth::password::hash_password;
use crate::core::models::UserScope;
use crate::server::AppState;
use crate::server::middleware::{RequireScope, RequireSelf};
use crate::storage::database::{UpdateUser, UserParams};
use crate::utils::error::{BackendError, Result};
use actix_web::{HttpResponse, web};
use serde::Deserialize;
use uuid::Uuid;

use super::DeletionMessage;

/// Updatable account fields
///
/// Role is deliberately absent; scope changes never come from clients.
#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    pub email: Option<String>,
    pub name: Option<String>,
    pub password: Option<String>,
}

/// Fetch a single account
pub async fn get_user(state: web::Data<AppState>, path: web::Path<Uuid>) -> Result<HttpResponse> {
    let users = state
        .storage
        .database
        .get_users(UserParams {
            id: Some(*path),
            ..UserParams::default()
        })
        .await?;

    let user = users
        .into_iter()
        .next()
        .ok_or_else(|| BackendError::not_found("User not found"))?;
    Ok(HttpResponse::Ok().json(user))
}

/// Update an account
pub async fn update_user(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    request: web::Json<UpdateUserRequest>,
) -> Result<HttpResponse> {
    let request = request.into_inner();

    let password_hash = match &request.password {
        Some(password) => Some(hash_password(password)?),
        None => None,
    };

    let updated = state
        .storage
        .database
        .edit_users(
            UpdateUser {
                email: request.email,
                name: request.name,
                password_hash,
                role: None,
            },
            UserParams {
                id: Some(*path),
                ..UserParams::default()
            },
        )
        .await?;

    let user = updated
        .into_iter()
        .next()
        .ok_or_else(|| BackendError::not_found("User not found"))?;
    Ok(HttpResponse::Ok().json(user))
}

/// Delete an account
pub async fn delete_user(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let deleted = state
        .storage
        .database
        .delete_users(UserParams {
            id: Some(*path),
            ..UserParams::default()
        })
        .await?;

    if deleted == 0 {
        return Err(BackendError::not_found("User not found"));
    }
    Ok(HttpResponse::Ok().json(DeletionMessage::new(*path)))
}

/// Wire the user routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/users/{id}")
            .route(
                web::get()
                    .to(get_user)
                    .wrap(RequireSelf::new(UserScope::Admin))
                    .wrap(RequireScope::new(UserScope::User)),
            )
            .route(
                web::patch()
                    .to(update_user)
                    .wrap(RequireSelf::new(UserScope::Admin))
                    .wrap(RequireScope::new(UserScope::User)),
            )
            .route(
                web::delete()
                    .to(delete_user)
                    .wrap(RequireSelf::new(UserScope::Admin))
                    .wrap(RequireScope::new(UserScope::User)),
            ),
    );
}
