use crate::core::models::{Photo, photo::PhotoInput};
use crate::utils::error::{BackendError, Result};
use sea_orm::*;
use tracing::debug;
use uuid::Uuid;

use super::Database;
use super::entities::{self, photo};

/// Filter parameters for photo queries
#[derive(Debug, Clone, Default)]
pub struct PhotoParams {
    pub id: Option<Uuid>,
    pub census_id: Option<Uuid>,
    pub herd_id: Option<Uuid>,
}

fn construct_query(params: &PhotoParams) -> Select<entities::Photo> {
    let mut query = entities::Photo::find();
    if let Some(id) = params.id {
        query = query.filter(photo::Column::Id.eq(id));
    }
    if let Some(census_id) = params.census_id {
        query = query.filter(photo::Column::CensusId.eq(census_id));
    }
    if let Some(herd_id) = params.herd_id {
        query = query.filter(photo::Column::HerdId.eq(herd_id));
    }
    query
}

impl Database {
    /// Register a photo record
    pub async fn create_photo(
        &self,
        input: &PhotoInput,
        census_id: Option<Uuid>,
        herd_id: Option<Uuid>,
    ) -> Result<Photo> {
        debug!("Registering photo {}", input.full_url);

        let now = chrono::Utc::now();
        let domain = Photo {
            id: Uuid::new_v4(),
            census_id,
            herd_id,
            full_url: input.full_url.clone(),
            thumb_url: input.thumb_url.clone(),
            created_at: now,
            updated_at: now,
        };

        let active_model = photo::Model::from_domain_photo(&domain);

        entities::Photo::insert(active_model)
            .exec(&self.db)
            .await
            .map_err(BackendError::Database)?;

        Ok(domain)
    }

    /// List photos matching the filter
    pub async fn get_photos(&self, params: PhotoParams) -> Result<Vec<Photo>> {
        let models = construct_query(&params)
            .all(&self.db)
            .await
            .map_err(BackendError::Database)?;

        Ok(models.iter().map(|model| model.to_domain_photo()).collect())
    }

    /// Delete photos matching the filter, returning the affected count
    pub async fn delete_photos(&self, params: PhotoParams) -> Result<u64> {
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

        let result = entities::Photo::delete_many()
            .filter(photo::Column::Id.is_in(ids))
            .exec(&self.db)
            .await
            .map_err(BackendError::Database)?;

        Ok(result.rows_affected)
    }
}
