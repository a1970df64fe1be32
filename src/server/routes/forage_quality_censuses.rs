//! Forage quality census endpoints

use crate::core::models::photo::PhotoInput;
use crate::core::models::{TeamScope, UserScope};
use crate::server::AppState;
use crate::server::middleware::{RequireMembership, RequireScope};
use crate::storage::database::{
    ForageQualityCensusParams, NewForageQualityCensus, UpdateForageQualityCensus,
};
use crate::utils::error::{BackendError, Result};
use actix_web::{HttpResponse, web};
use serde::Deserialize;
use uuid::Uuid;

use super::DeletionMessage;

/// Census creation request body
#[derive(Debug, Clone, Deserialize)]
pub struct CreateForageQualityCensusRequest {
    pub plot_id: Uuid,
    pub rating: f64,
    pub notes: String,
    pub photo: Option<PhotoInput>,
}

/// Census update request body
#[derive(Debug, Deserialize)]
pub struct UpdateForageQualityCensusRequest {
    pub plot_id: Option<Uuid>,
    pub photo_id: Option<Uuid>,
    pub rating: Option<f64>,
    pub notes: Option<String>,
}

/// List query filters
#[derive(Debug, Deserialize)]
pub struct ForageQualityCensusQuery {
    pub id: Option<Uuid>,
    pub plot_id: Option<Uuid>,
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

/// Record a forage quality census
pub async fn create_forage_quality_census(
    state: web::Data<AppState>,
    request: web::Json<CreateForageQualityCensusRequest>,
) -> Result<HttpResponse> {
    let request = request.into_inner();

    let census = state
        .storage
        .database
        .create_forage_quality_census(
            NewForageQualityCensus {
                plot_id: request.plot_id,
                rating: request.rating,
                notes: request.notes,
            },
            request.photo,
        )
        .await?;

    Ok(HttpResponse::Created().json(census))
}

/// List forage quality censuses matching the query filters
pub async fn get_forage_quality_censuses(
    state: web::Data<AppState>,
    query: web::Query<ForageQualityCensusQuery>,
) -> Result<HttpResponse> {
    let query = query.into_inner();

    let censuses = state
        .storage
        .database
        .get_forage_quality_censuses(ForageQualityCensusParams {
            id: query.id,
            plot_id: query.plot_id,
            limit: query.limit,
            offset: query.offset,
        })
        .await?;

    Ok(HttpResponse::Ok().json(censuses))
}

/// Fetch a single forage quality census
pub async fn get_forage_quality_census(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let censuses = state
        .storage
        .database
        .get_forage_quality_censuses(ForageQualityCensusParams {
            id: Some(*path),
            ..ForageQualityCensusParams::default()
        })
        .await?;

    let census = censuses
        .into_iter()
        .next()
        .ok_or_else(|| BackendError::not_found("ForageQualityCensus not found"))?;
    Ok(HttpResponse::Ok().json(census))
}

/// Update a forage quality census
pub async fn update_forage_quality_census(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    request: web::Json<UpdateForageQualityCensusRequest>,
) -> Result<HttpResponse> {
    let request = request.into_inner();

    let updated = state
        .storage
        .database
        .edit_forage_quality_censuses(
            UpdateForageQualityCensus {
                plot_id: request.plot_id,
                photo_id: request.photo_id,
                rating: request.rating,
                notes: request.notes,
            },
            ForageQualityCensusParams {
                id: Some(*path),
                ..ForageQualityCensusParams::default()
            },
        )
        .await?;

    let census = updated
        .into_iter()
        .next()
        .ok_or_else(|| BackendError::not_found("ForageQualityCensus not found"))?;
    Ok(HttpResponse::Ok().json(census))
}

/// Delete a forage quality census
pub async fn delete_forage_quality_census(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let deleted = state
        .storage
        .database
        .delete_forage_quality_censuses(ForageQualityCensusParams {
            id: Some(*path),
            ..ForageQualityCensusParams::default()
        })
        .await?;

    if deleted == 0 {
        return Err(BackendError::not_found("ForageQualityCensus not found"));
    }
    Ok(HttpResponse::Ok().json(DeletionMessage::new(*path)))
}

/// Wire the forage quality census routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/forage-quality-censuses")
            .route(
                web::get()
                    .to(get_forage_quality_censuses)
                    .wrap(RequireMembership::new(TeamScope::User))
                    .wrap(RequireScope::new(UserScope::User)),
            )
            .route(
                web::post()
                    .to(create_forage_quality_census)
                    .wrap(RequireMembership::new(TeamScope::User))
                    .wrap(RequireScope::new(UserScope::User)),
            ),
    );
    cfg.service(
        web::resource("/forage-quality-censuses/{id}")
            .route(
                web::get()
                    .to(get_forage_quality_census)
                    .wrap(RequireMembership::new(TeamScope::User))
                    .wrap(RequireScope::new(UserScope::User)),
            )
            .route(
                web::patch()
                    .to(update_forage_quality_census)
                    .wrap(RequireMembership::new(TeamScope::User))
                    .wrap(RequireScope::new(UserScope::User)),
            )
            .route(
                web::delete()
                    .to(delete_forage_quality_census)
                    .wrap(RequireMembership::new(TeamScope::User))
                    .wrap(RequireScope::new(UserScope::User)),
            ),
    );
}
