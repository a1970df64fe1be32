//! Plot endpoints

use crate::core::models::{Plot, TeamScope, UserScope};
use crate::server::AppState;
use crate::server::middleware::{RequireMembership, RequireScope};
use crate::storage::database::{PlotParams, UpdatePlot};
use crate::utils::error::{BackendError, Result};
use actix_web::{HttpResponse, web};
use serde::Deserialize;
use uuid::Uuid;

use super::DeletionMessage;

/// Plot creation request body
#[derive(Debug, Deserialize)]
pub struct CreatePlotRequest {
    pub team_id: Uuid,
    pub photo_id: Option<Uuid>,
    pub latitude: f64,
    pub longitude: f64,
    pub length: f64,
    pub width: f64,
    pub name: String,
}

/// Plot update request body
#[derive(Debug, Deserialize)]
pub struct UpdatePlotRequest {
    pub photo_id: Option<Uuid>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub length: Option<f64>,
    pub width: Option<f64>,
    pub name: Option<String>,
}

/// List query filters
#[derive(Debug, Deserialize)]
pub struct PlotQuery {
    pub id: Option<Uuid>,
    pub team_id: Option<Uuid>,
    pub name: Option<String>,
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

/// Register a plot
pub async fn create_plot(
    state: web::Data<AppState>,
    request: web::Json<CreatePlotRequest>,
) -> Result<HttpResponse> {
    let request = request.into_inner();
    let now = chrono::Utc::now();

    let plot = Plot {
        id: Uuid::new_v4(),
        team_id: request.team_id,
        photo_id: request.photo_id,
        latitude: request.latitude,
        longitude: request.longitude,
        length: request.length,
        width: request.width,
        name: request.name,
        created_at: now,
        updated_at: now,
    };

    let plot = state.storage.database.create_plot(&plot).await?;
    Ok(HttpResponse::Created().json(plot))
}

/// List plots matching the query filters
pub async fn get_plots(
    state: web::Data<AppState>,
    query: web::Query<PlotQuery>,
) -> Result<HttpResponse> {
    let query = query.into_inner();

    let plots = state
        .storage
        .database
        .get_plots(PlotParams {
            id: query.id,
            team_id: query.team_id,
            name: query.name,
            limit: query.limit,
            offset: query.offset,
        })
        .await?;

    Ok(HttpResponse::Ok().json(plots))
}

/// Fetch a single plot
pub async fn get_plot(state: web::Data<AppState>, path: web::Path<Uuid>) -> Result<HttpResponse> {
    let plots = state
        .storage
        .database
        .get_plots(PlotParams {
            id: Some(*path),
            ..PlotParams::default()
        })
        .await?;

    let plot = plots
        .into_iter()
        .next()
        .ok_or_else(|| BackendError::not_found("Plot not found"))?;
    Ok(HttpResponse::Ok().json(plot))
}

/// Update a plot
pub async fn update_plot(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    request: web::Json<UpdatePlotRequest>,
) -> Result<HttpResponse> {
    let request = request.into_inner();

    let updated = state
        .storage
        .database
        .edit_plots(
            UpdatePlot {
                photo_id: request.photo_id,
                latitude: request.latitude,
                longitude: request.longitude,
                length: request.length,
                width: request.width,
                name: request.name,
            },
            PlotParams {
                id: Some(*path),
                ..PlotParams::default()
            },
        )
        .await?;

    let plot = updated
        .into_iter()
        .next()
        .ok_or_else(|| BackendError::not_found("Plot not found"))?;
    Ok(HttpResponse::Ok().json(plot))
}

/// Delete a plot
pub async fn delete_plot(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let deleted = state
        .storage
        .database
        .delete_plots(PlotParams {
            id: Some(*path),
            ..PlotParams::default()
        })
        .await?;

    if deleted == 0 {
        return Err(BackendError::not_found("Plot not found"));
    }
    Ok(HttpResponse::Ok().json(DeletionMessage::new(*path)))
}

/// Wire the plot routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/plots")
            .route(
                web::get()
                    .to(get_plots)
                    .wrap(RequireMembership::new(TeamScope::User))
                    .wrap(RequireScope::new(UserScope::User)),
            )
            .route(
                web::post()
                    .to(create_plot)
                    .wrap(RequireMembership::new(TeamScope::User))
                    .wrap(RequireScope::new(UserScope::User)),
            ),
    );
    cfg.service(
        web::resource("/plots/{id}")
            .route(
                web::get()
                    .to(get_plot)
                    .wrap(RequireMembership::new(TeamScope::User))
                    .wrap(RequireScope::new(UserScope::User)),
            )
            .route(
                web::patch()
                    .to(update_plot)
                    .wrap(RequireMembership::new(TeamScope::User))
                    .wrap(RequireScope::new(UserScope::User)),
            )
            .route(
                web::delete()
                    .to(delete_plot)
                    .wrap(RequireMembership::new(TeamScope::User))
                    .wrap(RequireScope::new(UserScope::User)),
            ),
    );
}
