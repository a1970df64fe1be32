//! Membership endpoints

use crate::core::models::{Membership, TeamScope, UserScope};
use crate::server::AppState;
use crate::server::middleware::{RequireMembership, RequireScope, RequireSelf};
use crate::storage::database::{MembershipParams, UpdateMembership};
use crate::utils::error::{BackendError, Result};
use actix_web::{HttpResponse, web};
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use super::DeletionMessage;

/// Membership creation request body
#[derive(Debug, Deserialize)]
pub struct CreateMembershipRequest {
    pub team_id: Uuid,
    pub user_id: Uuid,
    pub role: TeamScope,
}

/// Membership update request body
#[derive(Debug, Deserialize)]
pub struct UpdateMembershipRequest {
    pub role: Option<TeamScope>,
}

/// Add a user to a team
pub async fn create_membership(
    state: web::Data<AppState>,
    request: web::Json<CreateMembershipRequest>,
) -> Result<HttpResponse> {
    let request = request.into_inner();
    let now = chrono::Utc::now();

    let membership = Membership {
        id: Uuid::new_v4(),
        team_id: request.team_id,
        user_id: request.user_id,
        role: request.role,
        created_at: now,
        updated_at: now,
    };

    let membership = state.storage.database.create_membership(&membership).await?;
    info!(
        "Added user {} to team {} as {}",
        membership.user_id, membership.team_id, membership.role
    );
    Ok(HttpResponse::Created().json(membership))
}

/// Fetch a single membership
pub async fn get_membership(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let memberships = state
        .storage
        .database
        .get_memberships(MembershipParams {
            id: Some(*path),
            ..MembershipParams::default()
        })
        .await?;

    let membership = memberships
        .into_iter()
        .next()
        .ok_or_else(|| BackendError::not_found("Membership not found"))?;
    Ok(HttpResponse::Ok().json(membership))
}

/// Update a membership's team scope
pub async fn update_membership(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    request: web::Json<UpdateMembershipRequest>,
) -> Result<HttpResponse> {
    let updated = state
        .storage
        .database
        .edit_memberships(
            UpdateMembership {
                role: request.into_inner().role,
            },
            MembershipParams {
                id: Some(*path),
                ..MembershipParams::default()
            },
        )
        .await?;

    let membership = updated
        .into_iter()
        .next()
        .ok_or_else(|| BackendError::not_found("Membership not found"))?;
    Ok(HttpResponse::Ok().json(membership))
}

/// Remove a membership
pub async fn delete_membership(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let deleted = state
        .storage
        .database
        .delete_memberships(MembershipParams {
            id: Some(*path),
            ..MembershipParams::default()
        })
        .await?;

    if deleted == 0 {
        return Err(BackendError::not_found("Membership not found"));
    }
    Ok(HttpResponse::Ok().json(DeletionMessage::new(*path)))
}

/// Wire the membership routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/memberships").route(
            web::post()
                .to(create_membership)
                .wrap(RequireMembership::new(TeamScope::Owner))
                .wrap(RequireScope::new(UserScope::User)),
        ),
    );
    cfg.service(
        web::resource("/memberships/{id}")
            .route(
                web::get()
                    .to(get_membership)
                    .wrap(RequireMembership::new(TeamScope::User))
                    .wrap(RequireSelf::new(UserScope::Admin))
                    .wrap(RequireScope::new(UserScope::User)),
            )
            .route(
                web::patch()
                    .to(update_membership)
                    .wrap(RequireMembership::new(TeamScope::Owner))
                    .wrap(RequireScope::new(UserScope::User)),
            )
            .route(
                web::delete()
                    .to(delete_membership)
                    .wrap(RequireMembership::new(TeamScope::Owner))
                    .wrap(RequireScope::new(UserScope::User)),
            ),
    );
}
