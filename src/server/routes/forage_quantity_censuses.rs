//! Forage quantity census endpoints

use crate::core::models::photo::PhotoInput;
use crate::core::models::{TeamScope, UserScope};
use crate::server::AppState;
use crate::server::middleware::{RequireMembership, RequireScope};
use crate::storage::database::{
    ForageQuantityCensusParams, NewForageQuantityCensus, UpdateForageQuantityCensus,
};
use crate::utils::error::{BackendError, Result};
use actix_web::{HttpResponse, web};
use serde::Deserialize;
use uuid::Uuid;

use super::DeletionMessage;

/// Census creation request body
#[derive(Debug, Clone, Deserialize)]
pub struct CreateForageQuantityCensusRequest {
    pub plot_id: Uuid,
    pub sda: f64,
    pub notes: String,
    pub photo: Option<PhotoInput>,
}

/// Census update request body
#[derive(Debug, Deserialize)]
pub struct UpdateForageQuantityCensusRequest {
    pub plot_id: Option<Uuid>,
    pub photo_id: Option<Uuid>,
    pub sda: Option<f64>,
    pub notes: Option<String>,
}

/// List query filters
#[derive(Debug, Deserialize)]
pub struct ForageQuantityCensusQuery {
    pub id: Option<Uuid>,
    pub plot_id: Option<Uuid>,
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

/// Record a forage quantity census
pub async fn create_forage_quantity_census(
    state: web::Data<AppState>,
    request: web::Json<CreateForageQuantityCensusRequest>,
) -> Result<HttpResponse> {
    let request = request.into_inner();

    let census = state
        .storage
        .database
        .create_forage_quantity_census(
            NewForageQuantityCensus {
                plot_id: request.plot_id,
                sda: request.sda,
                notes: request.notes,
            },
            request.photo,
        )
        .await?;

    Ok(HttpResponse::Created().json(census))
}

/// List forage quantity censuses matching the query filters
pub async fn get_forage_quantity_censuses(
    state: web::Data<AppState>,
    query: web::Query<ForageQuantityCensusQuery>,
) -> Result<HttpResponse> {
    let query = query.into_inner();

    let censuses = state
        .storage
        .database
        .get_forage_quantity_censuses(ForageQuantityCensusParams {
            id: query.id,
            plot_id: query.plot_id,
            limit: query.limit,
            offset: query.offset,
        })
        .await?;

    Ok(HttpResponse::Ok().json(censuses))
}

/// Fetch a single forage quantity census
pub async fn get_forage_quantity_census(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let censuses = state
        .storage
        .database
        .get_forage_quantity_censuses(ForageQuantityCensusParams {
            id: Some(*path),
            ..ForageQuantityCensusParams::default()
        })
        .await?;

    let census = censuses
        .into_iter()
        .next()
        .ok_or_else(|| BackendError::not_found("ForageQuantityCensus not found"))?;
    Ok(HttpResponse::Ok().json(census))
}

/// Update a forage quantity census
pub async fn update_forage_quantity_census(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    request: web::Json<UpdateForageQuantityCensusRequest>,
) -> Result<HttpResponse> {
    let request = request.into_inner();

    let updated = state
        .storage
        .database
        .edit_forage_quantity_censuses(
            UpdateForageQuantityCensus {
                plot_id: request.plot_id,
                photo_id: request.photo_id,
                sda: request.sda,
                notes: request.notes,
            },
            ForageQuantityCensusParams {
                id: Some(*path),
                ..ForageQuantityCensusParams::default()
            },
        )
        .await?;

    let census = updated
        .into_iter()
        .next()
        .ok_or_else(|| BackendError::not_found("ForageQuantityCensus not found"))?;
    Ok(HttpResponse::Ok().json(census))
}

/// Delete a forage quantity census
pub async fn delete_forage_quantity_census(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let deleted = state
        .storage
        .database
        .delete_forage_quantity_censuses(ForageQuantityCensusParams {
            id: Some(*path),
            ..ForageQuantityCensusParams::default()
        })
        .await?;

    if deleted == 0 {
        return Err(BackendError::not_found("ForageQuantityCensus not found"));
    }
    Ok(HttpResponse::Ok().json(DeletionMessage::new(*path)))
}

/// Wire the forage quantity census routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/forage-quantity-censuses")
            .route(
                web::get()
                    .to(get_forage_quantity_censuses)
                    .wrap(RequireMembership::new(TeamScope::User))
                    .wrap(RequireScope::new(UserScope::User)),
            )
            .route(
                web::post()
                    .to(create_forage_quantity_census)
                    .wrap(RequireMembership::new(TeamScope::User))
                    .wrap(RequireScope::new(UserScope::User)),
            ),
    );
    cfg.service(
        web::resource("/forage-quantity-censuses/{id}")
            .route(
                web::get()
                    .to(get_forage_quantity_census)
                    .wrap(RequireMembership::new(TeamScope::User))
                    .wrap(RequireScope::new(UserScope::User)),
            )
            .route(
                web::patch()
                    .to(update_forage_quantity_census)
                    .wrap(RequireMembership::new(TeamScope::User))
                    .wrap(RequireScope::new(UserScope::User)),
            )
            .route(
                web::delete()
                    .to(delete_forage_quantity_census)
                    .wrap(RequireMembership::new(TeamScope::User))
                    .wrap(RequireScope::new(UserScope::User)),
            ),
    );
}
