//! Team endpoints

use crate::core::models::{Team, TeamScope, UserScope};
use crate::server::AppState;
use crate::server::middleware::{RequireMembership, RequireScope};
use crate::storage::database::{TeamParams, UpdateTeam};
use crate::utils::codes::generate_code;
use crate::utils::error::{BackendError, Result};
use actix_web::{HttpResponse, web};
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use super::DeletionMessage;

/// Team creation request body
#[derive(Debug, Deserialize)]
pub struct CreateTeamRequest {
    pub name: String,
    pub acre_size: f64,
    pub address: String,
    pub yrs_ranch: i32,
    pub yrs_hol_mang: i32,
}

/// Team update request body
///
/// Only the name is client-updatable; the rest of the profile is fixed at
/// creation to avoid privilege-elevation style field injection.
#[derive(Debug, Deserialize)]
pub struct UpdateTeamRequest {
    pub name: Option<String>,
}

/// Create a team with a freshly generated join code
pub async fn create_team(
    state: web::Data<AppState>,
    request: web::Json<CreateTeamRequest>,
) -> Result<HttpResponse> {
    let request = request.into_inner();
    let now = chrono::Utc::now();

    let team = Team {
        id: Uuid::new_v4(),
        name: request.name,
        acre_size: request.acre_size,
        address: request.address,
        yrs_ranch: request.yrs_ranch,
        yrs_hol_mang: request.yrs_hol_mang,
        code: generate_code(8),
        created_at: now,
        updated_at: now,
    };

    let team = state.storage.database.create_team(&team).await?;
    info!("Created team {} ({})", team.name, team.id);
    Ok(HttpResponse::Created().json(team))
}

/// Fetch a single team
pub async fn get_team(state: web::Data<AppState>, path: web::Path<Uuid>) -> Result<HttpResponse> {
    let teams = state
        .storage
        .database
        .get_teams(TeamParams {
            id: Some(*path),
            ..TeamParams::default()
        })
        .await?;

    let team = teams
        .into_iter()
        .next()
        .ok_or_else(|| BackendError::not_found("Team not found"))?;
    Ok(HttpResponse::Ok().json(team))
}

/// Update a team
pub async fn update_team(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    request: web::Json<UpdateTeamRequest>,
) -> Result<HttpResponse> {
    let updated = state
        .storage
        .database
        .edit_teams(
            UpdateTeam {
                name: request.into_inner().name,
                ..UpdateTeam::default()
            },
            TeamParams {
                id: Some(*path),
                ..TeamParams::default()
            },
        )
        .await?;

    let team = updated
        .into_iter()
        .next()
        .ok_or_else(|| BackendError::not_found("Team not found"))?;
    Ok(HttpResponse::Ok().json(team))
}

/// Delete a team
pub async fn delete_team(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let deleted = state
        .storage
        .database
        .delete_teams(TeamParams {
            id: Some(*path),
            ..TeamParams::default()
        })
        .await?;

    if deleted == 0 {
        return Err(BackendError::not_found("Team not found"));
    }
    Ok(HttpResponse::Ok().json(DeletionMessage::new(*path)))
}

/// Wire the team routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/teams").route(
            web::post()
                .to(create_team)
                .wrap(RequireScope::new(UserScope::User)),
        ),
    );
    cfg.service(
        web::resource("/teams/{id}")
            .route(
                web::get()
                    .to(get_team)
                    .wrap(RequireMembership::new(TeamScope::User))
                    .wrap(RequireScope::new(UserScope::User)),
            )
            .route(
                web::patch()
                    .to(update_team)
                    .wrap(RequireMembership::new(TeamScope::User))
                    .wrap(RequireScope::new(UserScope::User)),
            )
            .route(
                web::delete()
                    .to(delete_team)
                    .wrap(RequireMembership::new(TeamScope::Owner))
                    .wrap(RequireScope::new(UserScope::User)),
            ),
    );
}
