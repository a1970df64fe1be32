//! Cow body-condition census endpoints

use crate::core::models::photo::PhotoInput;
use crate::core::models::{TeamScope, UserScope};
use crate::server::AppState;
use crate::server::middleware::{RequireMembership, RequireScope, RequireSelf};
use crate::storage::database::{CowCensusParams, NewCowCensus, UpdateCowCensus};
use crate::utils::error::{BackendError, Result};
use actix_web::{HttpResponse, web};
use serde::Deserialize;
use uuid::Uuid;

use super::DeletionMessage;

/// Census creation request body
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCowCensusRequest {
    pub herd_id: Uuid,
    pub bcs: f64,
    pub notes: String,
    pub tag: String,
    pub photo: Option<PhotoInput>,
}

/// Census update request body
#[derive(Debug, Deserialize)]
pub struct UpdateCowCensusRequest {
    pub herd_id: Option<Uuid>,
    pub photo_id: Option<Uuid>,
    pub bcs: Option<f64>,
    pub notes: Option<String>,
    pub tag: Option<String>,
}

/// List query filters
#[derive(Debug, Deserialize)]
pub struct CowCensusQuery {
    pub id: Option<Uuid>,
    pub herd_id: Option<Uuid>,
    pub photo_id: Option<Uuid>,
    pub tag: Option<String>,
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

/// Record a cow census
pub async fn create_cow_census(
    state: web::Data<AppState>,
    request: web::Json<CreateCowCensusRequest>,
) -> Result<HttpResponse> {
    let request = request.into_inner();

    let census = state
        .storage
        .database
        .create_cow_census(
            NewCowCensus {
                herd_id: request.herd_id,
                bcs: request.bcs,
                notes: request.notes,
                tag: request.tag,
            },
            request.photo,
        )
        .await?;

    Ok(HttpResponse::Created().json(census))
}

/// List cow censuses matching the query filters
pub async fn get_cow_censuses(
    state: web::Data<AppState>,
    query: web::Query<CowCensusQuery>,
) -> Result<HttpResponse> {
    let query = query.into_inner();

    let censuses = state
        .storage
        .database
        .get_cow_censuses(CowCensusParams {
            id: query.id,
            herd_id: query.herd_id,
            photo_id: query.photo_id,
            tag: query.tag,
            limit: query.limit,
            offset: query.offset,
        })
        .await?;

    Ok(HttpResponse::Ok().json(censuses))
}

/// Fetch a single cow census
pub async fn get_cow_census(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let censuses = state
        .storage
        .database
        .get_cow_censuses(CowCensusParams {
            id: Some(*path),
            ..CowCensusParams::default()
        })
        .await?;

    let census = censuses
        .into_iter()
        .next()
        .ok_or_else(|| BackendError::not_found("CowCensus not found"))?;
    Ok(HttpResponse::Ok().json(census))
}

/// Update a cow census
pub async fn update_cow_census(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    request: web::Json<UpdateCowCensusRequest>,
) -> Result<HttpResponse> {
    let request = request.into_inner();

    let updated = state
        .storage
        .database
        .edit_cow_censuses(
            UpdateCowCensus {
                herd_id: request.herd_id,
                photo_id: request.photo_id,
                bcs: request.bcs,
                notes: request.notes,
                tag: request.tag,
            },
            CowCensusParams {
                id: Some(*path),
                ..CowCensusParams::default()
            },
        )
        .await?;

    let census = updated
        .into_iter()
        .next()
        .ok_or_else(|| BackendError::not_found("CowCensus not found"))?;
    Ok(HttpResponse::Ok().json(census))
}

/// Delete a cow census
pub async fn delete_cow_census(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let deleted = state
        .storage
        .database
        .delete_cow_censuses(CowCensusParams {
            id: Some(*path),
            ..CowCensusParams::default()
        })
        .await?;

    if deleted == 0 {
        return Err(BackendError::not_found("CowCensus not found"));
    }
    Ok(HttpResponse::Ok().json(DeletionMessage::new(*path)))
}

/// Wire the cow census routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/cow-censuses")
            .route(
                web::get()
                    .to(get_cow_censuses)
                    .wrap(RequireMembership::new(TeamScope::User))
                    .wrap(RequireScope::new(UserScope::User)),
            )
            .route(
                web::post()
                    .to(create_cow_census)
                    .wrap(RequireMembership::new(TeamScope::User))
                    .wrap(RequireScope::new(UserScope::User)),
            ),
    );
    cfg.service(
        web::resource("/cow-censuses/{id}")
            .route(
                web::get()
                    .to(get_cow_census)
                    .wrap(RequireMembership::new(TeamScope::User))
                    .wrap(RequireSelf::new(UserScope::Admin))
                    .wrap(RequireScope::new(UserScope::User)),
            )
            .route(
                web::patch()
                    .to(update_cow_census)
                    .wrap(RequireMembership::new(TeamScope::User))
                    .wrap(RequireScope::new(UserScope::User)),
            )
            .route(
                web::delete()
                    .to(delete_cow_census)
                    .wrap(RequireMembership::new(TeamScope::User))
                    .wrap(RequireScope::new(UserScope::User)),
            ),
    );
}
