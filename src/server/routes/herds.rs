//! Herd endpoints

use crate::core::models::{Herd, TeamScope, UserScope};
use crate::server::AppState;
use crate::server::middleware::{RequireMembership, RequireScope, RequireSelf};
use crate::storage::database::{HerdParams, UpdateHerd};
use crate::utils::error::{BackendError, Result};
use actix_web::{HttpResponse, web};
use serde::Deserialize;
use uuid::Uuid;

use super::DeletionMessage;

/// Herd creation request body
#[derive(Debug, Deserialize)]
pub struct CreateHerdRequest {
    pub team_id: Uuid,
    pub breed: String,
    pub count: i32,
    pub breeding_date: chrono::DateTime<chrono::Utc>,
    pub calving_date: chrono::DateTime<chrono::Utc>,
}

/// Herd update request body
#[derive(Debug, Deserialize)]
pub struct UpdateHerdRequest {
    pub breed: Option<String>,
    pub count: Option<i32>,
    pub breeding_date: Option<chrono::DateTime<chrono::Utc>>,
    pub calving_date: Option<chrono::DateTime<chrono::Utc>>,
}

/// Register a herd
pub async fn create_herd(
    state: web::Data<AppState>,
    request: web::Json<CreateHerdRequest>,
) -> Result<HttpResponse> {
    let request = request.into_inner();
    let now = chrono::Utc::now();

    let herd = Herd {
        id: Uuid::new_v4(),
        team_id: request.team_id,
        breed: request.breed,
        count: request.count,
        breeding_date: request.breeding_date,
        calving_date: request.calving_date,
        created_at: now,
        updated_at: now,
    };

    let herd = state.storage.database.create_herd(&herd).await?;
    Ok(HttpResponse::Created().json(herd))
}

/// Fetch a single herd
pub async fn get_herd(state: web::Data<AppState>, path: web::Path<Uuid>) -> Result<HttpResponse> {
    let herds = state
        .storage
        .database
        .get_herds(HerdParams {
            id: Some(*path),
            ..HerdParams::default()
        })
        .await?;

    let herd = herds
        .into_iter()
        .next()
        .ok_or_else(|| BackendError::not_found("Herd not found"))?;
    Ok(HttpResponse::Ok().json(herd))
}

/// Update a herd
pub async fn update_herd(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    request: web::Json<UpdateHerdRequest>,
) -> Result<HttpResponse> {
    let request = request.into_inner();

    let updated = state
        .storage
        .database
        .edit_herds(
            UpdateHerd {
                breed: request.breed,
                count: request.count,
                breeding_date: request.breeding_date,
                calving_date: request.calving_date,
            },
            HerdParams {
                id: Some(*path),
                ..HerdParams::default()
            },
        )
        .await?;

    let herd = updated
        .into_iter()
        .next()
        .ok_or_else(|| BackendError::not_found("Herd not found"))?;
    Ok(HttpResponse::Ok().json(herd))
}

/// Delete a herd
pub async fn delete_herd(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let deleted = state
        .storage
        .database
        .delete_herds(HerdParams {
            id: Some(*path),
            ..HerdParams::default()
        })
        .await?;

    if deleted == 0 {
        return Err(BackendError::not_found("Herd not found"));
    }
    Ok(HttpResponse::Ok().json(DeletionMessage::new(*path)))
}

/// Wire the herd routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/herds").route(
            web::post()
                .to(create_herd)
                .wrap(RequireMembership::new(TeamScope::Contributor))
                .wrap(RequireScope::new(UserScope::User)),
        ),
    );
    cfg.service(
        web::resource("/herds/{id}")
            .route(
                web::get()
                    .to(get_herd)
                    .wrap(RequireMembership::new(TeamScope::Contributor))
                    .wrap(RequireSelf::new(UserScope::Admin))
                    .wrap(RequireScope::new(UserScope::User)),
            )
            .route(
                web::patch()
                    .to(update_herd)
                    .wrap(RequireMembership::new(TeamScope::Contributor))
                    .wrap(RequireScope::new(UserScope::User)),
            )
            .route(
                web::delete()
                    .to(delete_herd)
                    .wrap(RequireMembership::new(TeamScope::Contributor))
                    .wrap(RequireScope::new(UserScope::User)),
            ),
    );
}
