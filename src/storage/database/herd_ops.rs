use crate::core::models::Herd;
use crate::utils::error::{BackendError, Result};
use sea_orm::*;
use tracing::debug;
use uuid::Uuid;

use super::Database;
use super::entities::{self, herd};

/// Filter parameters for herd queries
#[derive(Debug, Clone, Default)]
pub struct HerdParams {
    pub id: Option<Uuid>,
    pub team_id: Option<Uuid>,
    pub breed: Option<String>,
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

/// Updatable herd fields
#[derive(Debug, Clone, Default)]
pub struct UpdateHerd {
    pub breed: Option<String>,
    pub count: Option<i32>,
    pub breeding_date: Option<chrono::DateTime<chrono::Utc>>,
    pub calving_date: Option<chrono::DateTime<chrono::Utc>>,
}

fn construct_query(params: &HerdParams) -> Select<entities::Herd> {
    let mut query = entities::Herd::find();
    if let Some(id) = params.id {
        query = query.filter(herd::Column::Id.eq(id));
    }
    if let Some(team_id) = params.team_id {
        query = query.filter(herd::Column::TeamId.eq(team_id));
    }
    if let Some(breed) = &params.breed {
        query = query.filter(herd::Column::Breed.eq(breed.clone()));
    }
    if let Some(limit) = params.limit {
        query = query.limit(limit);
    }
    if let Some(offset) = params.offset {
        query = query.offset(offset);
    }
    query
}

impl Database {
    /// Create a new herd
    pub async fn create_herd(&self, herd: &Herd) -> Result<Herd> {
        debug!("Creating herd for team {}", herd.team_id);

        let active_model = herd::Model::from_domain_herd(herd);

        entities::Herd::insert(active_model)
            .exec(&self.db)
            .await
            .map_err(BackendError::Database)?;

        Ok(herd.clone())
    }

    /// List herds matching the filter
    pub async fn get_herds(&self, params: HerdParams) -> Result<Vec<Herd>> {
        let models = construct_query(&params)
            .all(&self.db)
            .await
            .map_err(BackendError::Database)?;

        Ok(models.iter().map(|model| model.to_domain_herd()).collect())
    }

    /// Update herds matching the filter, returning the updated rows
    pub async fn edit_herds(&self, update: UpdateHerd, params: HerdParams) -> Result<Vec<Herd>> {
        let models = construct_query(&params)
            .all(&self.db)
            .await
            .map_err(BackendError::Database)?;

        let mut updated = Vec::with_capacity(models.len());
        for model in models {
            let mut active: herd::ActiveModel = model.into();
            if let Some(breed) = &update.breed {
                active.breed = Set(breed.clone());
            }
            if let Some(count) = update.count {
                active.count = Set(count);
            }
            if let Some(breeding_date) = update.breeding_date {
                active.breeding_date = Set(breeding_date.into());
            }
            if let Some(calving_date) = update.calving_date {
                active.calving_date = Set(calving_date.into());
            }
            active.updated_at = Set(chrono::Utc::now().into());

            let model = active.update(&self.db).await.map_err(BackendError::Database)?;
            updated.push(model.to_domain_herd());
        }

        Ok(updated)
    }

    /// Delete herds matching the filter, returning the affected count
    pub async fn delete_herds(&self, params: HerdParams) -> Result<u64> {
        let ids: Vec<Uuid> = construct_query(&params)
            .all(&self.db)
            .await
            .map_err(BackendError::Database)?
            .into_iter()
            .map(|model| model.id)
            .collect();

        if ids.is_empty() {
            return Ok(0);
        }

        let result = entities::Herd::delete_many()
            .filter(herd::Column::Id.is_in(ids))
            .exec(&self.db)
            .await
            .map_err(BackendError::Database)?;

        Ok(result.rows_affected)
    }
}
