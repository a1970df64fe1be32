//! Dung census endpoints

use crate::core::models::photo::PhotoInput;
use crate::core::models::{TeamScope, UserScope};
use crate::server::AppState;
use crate::server::middleware::{RequireMembership, RequireScope};
use crate::storage::database::{DungCensusParams, NewDungCensus, UpdateDungCensus};
use crate::utils::error::{BackendError, Result};
use actix_web::{HttpResponse, web};
use serde::Deserialize;
use uuid::Uuid;

use super::DeletionMessage;

/// Census creation request body
#[derive(Debug, Clone, Deserialize)]
pub struct CreateDungCensusRequest {
    pub herd_id: Uuid,
    pub plot_id: Uuid,
    pub ratings: Vec<f64>,
    pub notes: String,
    pub photo: Option<PhotoInput>,
}

/// Census update request body
#[derive(Debug, Deserialize)]
pub struct UpdateDungCensusRequest {
    pub herd_id: Option<Uuid>,
    pub plot_id: Option<Uuid>,
    pub photo_id: Option<Uuid>,
    pub ratings: Option<Vec<f64>>,
    pub notes: Option<String>,
}

/// List query filters
#[derive(Debug, Deserialize)]
pub struct DungCensusQuery {
    pub id: Option<Uuid>,
    pub herd_id: Option<Uuid>,
    pub plot_id: Option<Uuid>,
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

/// Record a dung census
pub async fn create_dung_census(
    state: web::Data<AppState>,
    request: web::Json<CreateDungCensusRequest>,
) -> Result<HttpResponse> {
    let request = request.into_inner();

    let census = state
        .storage
        .database
        .create_dung_census(
            NewDungCensus {
                herd_id: request.herd_id,
                plot_id: request.plot_id,
                ratings: request.ratings,
                notes: request.notes,
            },
            request.photo,
        )
        .await?;

    Ok(HttpResponse::Created().json(census))
}

/// List dung censuses matching the query filters
pub async fn get_dung_censuses(
    state: web::Data<AppState>,
    query: web::Query<DungCensusQuery>,
) -> Result<HttpResponse> {
    let query = query.into_inner();

    let censuses = state
        .storage
        .database
        .get_dung_censuses(DungCensusParams {
            id: query.id,
            herd_id: query.herd_id,
            plot_id: query.plot_id,
            limit: query.limit,
            offset: query.offset,
        })
        .await?;

    Ok(HttpResponse::Ok().json(censuses))
}

/// Fetch a single dung census
pub async fn get_dung_census(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let censuses = state
        .storage
        .database
        .get_dung_censuses(DungCensusParams {
            id: Some(*path),
            ..DungCensusParams::default()
        })
        .await?;

    let census = censuses
        .into_iter()
        .next()
        .ok_or_else(|| BackendError::not_found("DungCensus not found"))?;
    Ok(HttpResponse::Ok().json(census))
}

/// Update a dung census
pub async fn update_dung_census(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    request: web::Json<UpdateDungCensusRequest>,
) -> Result<HttpResponse> {
    let request = request.into_inner();

    let updated = state
        .storage
        .database
        .edit_dung_censuses(
            UpdateDungCensus {
                herd_id: request.herd_id,
                plot_id: request.plot_id,
                photo_id: request.photo_id,
                ratings: request.ratings,
                notes: request.notes,
            },
            DungCensusParams {
                id: Some(*path),
                ..DungCensusParams::default()
            },
        )
        .await?;

    let census = updated
        .into_iter()
        .next()
        .ok_or_else(|| BackendError::not_found("DungCensus not found"))?;
    Ok(HttpResponse::Ok().json(census))
}

/// Delete a dung census
pub async fn delete_dung_census(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let deleted = state
        .storage
        .database
        .delete_dung_censuses(DungCensusParams {
            id: Some(*path),
            ..DungCensusParams::default()
        })
        .await?;

    if deleted == 0 {
        return Err(BackendError::not_found("DungCensus not found"));
    }
    Ok(HttpResponse::Ok().json(DeletionMessage::new(*path)))
}

/// Wire the dung census routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/dung-censuses")
            .route(
                web::get()
                    .to(get_dung_censuses)
                    .wrap(RequireMembership::new(TeamScope::User))
                    .wrap(RequireScope::new(UserScope::User)),
            )
            .route(
                web::post()
                    .to(create_dung_census)
                    .wrap(RequireMembership::new(TeamScope::User))
                    .wrap(RequireScope::new(UserScope::User)),
            ),
    );
    cfg.service(
        web::resource("/dung-censuses/{id}")
            .route(
                web::get()
                    .to(get_dung_census)
                    .wrap(RequireMembership::new(TeamScope::User))
                    .wrap(RequireScope::new(UserScope::User)),
            )
            .route(
                web::patch()
                    .to(update_dung_census)
                    .wrap(RequireMembership::new(TeamScope::User))
                    .wrap(RequireScope::new(UserScope::User)),
            )
            .route(
                web::delete()
                    .to(delete_dung_census)
                    .wrap(RequireMembership::new(TeamScope::User))
                    .wrap(RequireScope::new(UserScope::User)),
            ),
    );
}
