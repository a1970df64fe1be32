//! Offline sync endpoint
//!
//! The mobile client queues censuses while offline and uploads them in one
//! batch. Any failure fails the whole batch.

use crate::core::models::{CowCensus, TeamScope, UserScope};
use crate::server::AppState;
use crate::server::middleware::{RequireMembership, RequireScope};
use crate::storage::database::NewCowCensus;
use crate::utils::error::Result;
use actix_web::{HttpResponse, web};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::cow_censuses::CreateCowCensusRequest;

/// Batched census payloads collected while offline
#[derive(Debug, Deserialize)]
pub struct SyncUpserted {
    #[serde(default)]
    pub cow_census_requests: Vec<CreateCowCensusRequest>,
}

/// Sync request body
#[derive(Debug, Deserialize)]
pub struct SyncRequest {
    pub upserted: SyncUpserted,
}

/// Sync response listing everything created
#[derive(Debug, Serialize)]
pub struct SyncResponse {
    pub cow_censuses: Vec<CowCensus>,
}

/// Batch-create the queued censuses
pub async fn sync(
    state: web::Data<AppState>,
    request: web::Json<SyncRequest>,
) -> Result<HttpResponse> {
    let request = request.into_inner();
    let mut result = SyncResponse {
        cow_censuses: Vec::new(),
    };

    for census in request.upserted.cow_census_requests {
        let created = state
            .storage
            .database
            .create_cow_census(
                NewCowCensus {
                    herd_id: census.herd_id,
                    bcs: census.bcs,
                    notes: census.notes,
                    tag: census.tag,
                },
                census.photo,
            )
            .await?;
        result.cow_censuses.push(created);
    }

    info!("Synced {} cow censuses", result.cow_censuses.len());
    Ok(HttpResponse::Created().json(result))
}

/// Wire the sync route
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/sync").route(
            web::post()
                .to(sync)
                .wrap(RequireMembership::new(TeamScope::User))
                .wrap(RequireScope::new(UserScope::User)),
        ),
    );
}
