use crate::core::models::photo::PhotoInput;
use crate::core::models::{CowCensus, DungCensus, ForageQualityCensus, ForageQuantityCensus};
use crate::utils::error::{BackendError, Result};
use sea_orm::*;
use tracing::debug;
use uuid::Uuid;

use super::Database;
use super::entities::{
    self, cow_census, dung_census, forage_quality_census, forage_quantity_census,
};

/// Fields for a new cow body-condition census
#[derive(Debug, Clone)]
pub struct NewCowCensus {
    pub herd_id: Uuid,
    pub bcs: f64,
    pub notes: String,
    pub tag: String,
}

/// Fields for a new dung census
#[derive(Debug, Clone)]
pub struct NewDungCensus {
    pub herd_id: Uuid,
    pub plot_id: Uuid,
    pub ratings: Vec<f64>,
    pub notes: String,
}

/// Fields for a new forage quality census
#[derive(Debug, Clone)]
pub struct NewForageQualityCensus {
    pub plot_id: Uuid,
    pub rating: f64,
    pub notes: String,
}

/// Fields for a new forage quantity census
#[derive(Debug, Clone)]
pub struct NewForageQuantityCensus {
    pub plot_id: Uuid,
    pub sda: f64,
    pub notes: String,
}

/// Filter parameters for cow census queries
#[derive(Debug, Clone, Default)]
pub struct CowCensusParams {
    pub id: Option<Uuid>,
    pub herd_id: Option<Uuid>,
    pub photo_id: Option<Uuid>,
    pub tag: Option<String>,
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

/// Updatable cow census fields
#[derive(Debug, Clone, Default)]
pub struct UpdateCowCensus {
    pub herd_id: Option<Uuid>,
    pub photo_id: Option<Uuid>,
    pub bcs: Option<f64>,
    pub notes: Option<String>,
    pub tag: Option<String>,
}

/// Filter parameters for dung census queries
#[derive(Debug, Clone, Default)]
pub struct DungCensusParams {
    pub id: Option<Uuid>,
    pub herd_id: Option<Uuid>,
    pub plot_id: Option<Uuid>,
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

/// Updatable dung census fields
#[derive(Debug, Clone, Default)]
pub struct UpdateDungCensus {
    pub herd_id: Option<Uuid>,
    pub plot_id: Option<Uuid>,
    pub photo_id: Option<Uuid>,
    pub ratings: Option<Vec<f64>>,
    pub notes: Option<String>,
}

/// Filter parameters for forage quality census queries
#[derive(Debug, Clone, Default)]
pub struct ForageQualityCensusParams {
    pub id: Option<Uuid>,
    pub plot_id: Option<Uuid>,
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

/// Updatable forage quality census fields
#[derive(Debug, Clone, Default)]
pub struct UpdateForageQualityCensus {
    pub plot_id: Option<Uuid>,
    pub photo_id: Option<Uuid>,
    pub rating: Option<f64>,
    pub notes: Option<String>,
}

/// Filter parameters for forage quantity census queries
#[derive(Debug, Clone, Default)]
pub struct ForageQuantityCensusParams {
    pub id: Option<Uuid>,
    pub plot_id: Option<Uuid>,
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

/// Updatable forage quantity census fields
#[derive(Debug, Clone, Default)]
pub struct UpdateForageQuantityCensus {
    pub plot_id: Option<Uuid>,
    pub photo_id: Option<Uuid>,
    pub sda: Option<f64>,
    pub notes: Option<String>,
}

fn cow_census_query(params: &CowCensusParams) -> Select<entities::CowCensus> {
    let mut query = entities::CowCensus::find();
    if let Some(id) = params.id {
        query = query.filter(cow_census::Column::Id.eq(id));
    }
    if let Some(herd_id) = params.herd_id {
        query = query.filter(cow_census::Column::HerdId.eq(herd_id));
    }
    if let Some(photo_id) = params.photo_id {
        query = query.filter(cow_census::Column::PhotoId.eq(photo_id));
    }
    if let Some(tag) = &params.tag {
        query = query.filter(cow_census::Column::Tag.eq(tag.clone()));
    }
    if let Some(limit) = params.limit {
        query = query.limit(limit);
    }
    if let Some(offset) = params.offset {
        query = query.offset(offset);
    }
    query
}

fn dung_census_query(params: &DungCensusParams) -> Select<entities::DungCensus> {
    let mut query = entities::DungCensus::find();
    if let Some(id) = params.id {
        query = query.filter(dung_census::Column::Id.eq(id));
    }
    if let Some(herd_id) = params.herd_id {
        query = query.filter(dung_census::Column::HerdId.eq(herd_id));
    }
    if let Some(plot_id) = params.plot_id {
        query = query.filter(dung_census::Column::PlotId.eq(plot_id));
    }
    if let Some(limit) = params.limit {
        query = query.limit(limit);
    }
    if let Some(offset) = params.offset {
        query = query.offset(offset);
    }
    query
}

fn forage_quality_query(
    params: &ForageQualityCensusParams,
) -> Select<entities::ForageQualityCensus> {
    let mut query = entities::ForageQualityCensus::find();
    if let Some(id) = params.id {
        query = query.filter(forage_quality_census::Column::Id.eq(id));
    }
    if let Some(plot_id) = params.plot_id {
        query = query.filter(forage_quality_census::Column::PlotId.eq(plot_id));
    }
    if let Some(limit) = params.limit {
        query = query.limit(limit);
    }
    if let Some(offset) = params.offset {
        query = query.offset(offset);
    }
    query
}

fn forage_quantity_query(
    params: &ForageQuantityCensusParams,
) -> Select<entities::ForageQuantityCensus> {
    let mut query = entities::ForageQuantityCensus::find();
    if let Some(id) = params.id {
        query = query.filter(forage_quantity_census::Column::Id.eq(id));
    }
    if let Some(plot_id) = params.plot_id {
        query = query.filter(forage_quantity_census::Column::PlotId.eq(plot_id));
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
    /// Create a cow census, registering the attached photo when present
    ///
    /// The census id is minted first so the photo row can reference it.
    pub async fn create_cow_census(
        &self,
        new: NewCowCensus,
        photo: Option<PhotoInput>,
    ) -> Result<CowCensus> {
        let id = Uuid::new_v4();
        let photo_id = match &photo {
            Some(input) => Some(self.create_photo(input, Some(id), None).await?.id),
            None => None,
        };

        debug!("Creating cow census for herd {}", new.herd_id);

        let now = chrono::Utc::now();
        let domain = CowCensus {
            id,
            herd_id: new.herd_id,
            photo_id,
            bcs: new.bcs,
            notes: new.notes,
            tag: new.tag,
            created_at: now,
            updated_at: now,
        };

        entities::CowCensus::insert(cow_census::Model::from_domain_cow_census(&domain))
            .exec(&self.db)
            .await
            .map_err(BackendError::Database)?;

        Ok(domain)
    }

    /// List cow censuses matching the filter
    pub async fn get_cow_censuses(&self, params: CowCensusParams) -> Result<Vec<CowCensus>> {
        let models = cow_census_query(&params)
            .all(&self.db)
            .await
            .map_err(BackendError::Database)?;

        Ok(models
            .iter()
            .map(|model| model.to_domain_cow_census())
            .collect())
    }

    /// Update cow censuses matching the filter, returning the updated rows
    pub async fn edit_cow_censuses(
        &self,
        update: UpdateCowCensus,
        params: CowCensusParams,
    ) -> Result<Vec<CowCensus>> {
        let models = cow_census_query(&params)
            .all(&self.db)
            .await
            .map_err(BackendError::Database)?;

        let mut updated = Vec::with_capacity(models.len());
        for model in models {
            let mut active: cow_census::ActiveModel = model.into();
            if let Some(herd_id) = update.herd_id {
                active.herd_id = Set(herd_id);
            }
            if let Some(photo_id) = update.photo_id {
                active.photo_id = Set(Some(photo_id));
            }
            if let Some(bcs) = update.bcs {
                active.bcs = Set(bcs);
            }
            if let Some(notes) = &update.notes {
                active.notes = Set(notes.clone());
            }
            if let Some(tag) = &update.tag {
                active.tag = Set(tag.clone());
            }
            active.updated_at = Set(chrono::Utc::now().into());

            let model = active.update(&self.db).await.map_err(BackendError::Database)?;
            updated.push(model.to_domain_cow_census());
        }

        Ok(updated)
    }

    /// Delete cow censuses matching the filter, returning the affected count
    pub async fn delete_cow_censuses(&self, params: CowCensusParams) -> Result<u64> {
        let ids: Vec<Uuid> = cow_census_query(&params)
            .all(&self.db)
            .await
            .map_err(BackendError::Database)?
            .into_iter()
            .map(|model| model.id)
            .collect();

        if ids.is_empty() {
            return Ok(0);
        }

        let result = entities::CowCensus::delete_many()
            .filter(cow_census::Column::Id.is_in(ids))
            .exec(&self.db)
            .await
            .map_err(BackendError::Database)?;

        Ok(result.rows_affected)
    }

    /// Create a dung census, registering the attached photo when present
    pub async fn create_dung_census(
        &self,
        new: NewDungCensus,
        photo: Option<PhotoInput>,
    ) -> Result<DungCensus> {
        let id = Uuid::new_v4();
        let photo_id = match &photo {
            Some(input) => Some(self.create_photo(input, Some(id), None).await?.id),
            None => None,
        };

        debug!("Creating dung census for plot {}", new.plot_id);

        let now = chrono::Utc::now();
        let domain = DungCensus {
            id,
            herd_id: new.herd_id,
            plot_id: new.plot_id,
            photo_id,
            ratings: new.ratings,
            notes: new.notes,
            created_at: now,
            updated_at: now,
        };

        entities::DungCensus::insert(dung_census::Model::from_domain_dung_census(&domain))
            .exec(&self.db)
            .await
            .map_err(BackendError::Database)?;

        Ok(domain)
    }

    /// List dung censuses matching the filter
    pub async fn get_dung_censuses(&self, params: DungCensusParams) -> Result<Vec<DungCensus>> {
        let models = dung_census_query(&params)
            .all(&self.db)
            .await
            .map_err(BackendError::Database)?;

        Ok(models
            .iter()
            .map(|model| model.to_domain_dung_census())
            .collect())
    }

    /// Update dung censuses matching the filter, returning the updated rows
    pub async fn edit_dung_censuses(
        &self,
        update: UpdateDungCensus,
        params: DungCensusParams,
    ) -> Result<Vec<DungCensus>> {
        let models = dung_census_query(&params)
            .all(&self.db)
            .await
            .map_err(BackendError::Database)?;

        let mut updated = Vec::with_capacity(models.len());
        for model in models {
            let mut active: dung_census::ActiveModel = model.into();
            if let Some(herd_id) = update.herd_id {
                active.herd_id = Set(herd_id);
            }
            if let Some(plot_id) = update.plot_id {
                active.plot_id = Set(plot_id);
            }
            if let Some(photo_id) = update.photo_id {
                active.photo_id = Set(Some(photo_id));
            }
            if let Some(ratings) = &update.ratings {
                active.ratings = Set(serde_json::json!(ratings));
            }
            if let Some(notes) = &update.notes {
                active.notes = Set(notes.clone());
            }
            active.updated_at = Set(chrono::Utc::now().into());

            let model = active.update(&self.db).await.map_err(BackendError::Database)?;
            updated.push(model.to_domain_dung_census());
        }

        Ok(updated)
    }

    /// Delete dung censuses matching the filter, returning the affected count
    pub async fn delete_dung_censuses(&self, params: DungCensusParams) -> Result<u64> {
        let ids: Vec<Uuid> = dung_census_query(&params)
            .all(&self.db)
            .await
            .map_err(BackendError::Database)?
            .into_iter()
            .map(|model| model.id)
            .collect();

        if ids.is_empty() {
            return Ok(0);
        }

        let result = entities::DungCensus::delete_many()
            .filter(dung_census::Column::Id.is_in(ids))
            .exec(&self.db)
            .await
            .map_err(BackendError::Database)?;

        Ok(result.rows_affected)
    }

    /// Create a forage quality census, registering the attached photo when present
    pub async fn create_forage_quality_census(
        &self,
        new: NewForageQualityCensus,
        photo: Option<PhotoInput>,
    ) -> Result<ForageQualityCensus> {
        let id = Uuid::new_v4();
        let photo_id = match &photo {
            Some(input) => Some(self.create_photo(input, Some(id), None).await?.id),
            None => None,
        };

        debug!("Creating forage quality census for plot {}", new.plot_id);

        let now = chrono::Utc::now();
        let domain = ForageQualityCensus {
            id,
            plot_id: new.plot_id,
            photo_id,
            rating: new.rating,
            notes: new.notes,
            created_at: now,
            updated_at: now,
        };

        entities::ForageQualityCensus::insert(
            forage_quality_census::Model::from_domain_forage_quality_census(&domain),
        )
        .exec(&self.db)
        .await
        .map_err(BackendError::Database)?;

        Ok(domain)
    }

    /// List forage quality censuses matching the filter
    pub async fn get_forage_quality_censuses(
        &self,
        params: ForageQualityCensusParams,
    ) -> Result<Vec<ForageQualityCensus>> {
        let models = forage_quality_query(&params)
            .all(&self.db)
            .await
            .map_err(BackendError::Database)?;

        Ok(models
            .iter()
            .map(|model| model.to_domain_forage_quality_census())
            .collect())
    }

    /// Update forage quality censuses matching the filter, returning the updated rows
    pub async fn edit_forage_quality_censuses(
        &self,
        update: UpdateForageQualityCensus,
        params: ForageQualityCensusParams,
    ) -> Result<Vec<ForageQualityCensus>> {
        let models = forage_quality_query(&params)
            .all(&self.db)
            .await
            .map_err(BackendError::Database)?;

        let mut updated = Vec::with_capacity(models.len());
        for model in models {
            let mut active: forage_quality_census::ActiveModel = model.into();
            if let Some(plot_id) = update.plot_id {
                active.plot_id = Set(plot_id);
            }
            if let Some(photo_id) = update.photo_id {
                active.photo_id = Set(Some(photo_id));
            }
            if let Some(rating) = update.rating {
                active.rating = Set(rating);
            }
            if let Some(notes) = &update.notes {
                active.notes = Set(notes.clone());
            }
            active.updated_at = Set(chrono::Utc::now().into());

            let model = active.update(&self.db).await.map_err(BackendError::Database)?;
            updated.push(model.to_domain_forage_quality_census());
        }

        Ok(updated)
    }

    /// Delete forage quality censuses matching the filter, returning the affected count
    pub async fn delete_forage_quality_censuses(
        &self,
        params: ForageQualityCensusParams,
    ) -> Result<u64> {
        let ids: Vec<Uuid> = forage_quality_query(&params)
            .all(&self.db)
            .await
            .map_err(BackendError::Database)?
            .into_iter()
            .map(|model| model.id)
            .collect();

        if ids.is_empty() {
            return Ok(0);
        }

        let result = entities::ForageQualityCensus::delete_many()
            .filter(forage_quality_census::Column::Id.is_in(ids))
            .exec(&self.db)
            .await
            .map_err(BackendError::Database)?;

        Ok(result.rows_affected)
    }

    /// Create a forage quantity census, registering the attached photo when present
    pub async fn create_forage_quantity_census(
        &self,
        new: NewForageQuantityCensus,
        photo: Option<PhotoInput>,
    ) -> Result<ForageQuantityCensus> {
        let id = Uuid::new_v4();
        let photo_id = match &photo {
            Some(input) => Some(self.create_photo(input, Some(id), None).await?.id),
            None => None,
        };

        debug!("Creating forage quantity census for plot {}", new.plot_id);

        let now = chrono::Utc::now();
        let domain = ForageQuantityCensus {
            id,
            plot_id: new.plot_id,
            photo_id,
            sda: new.sda,
            notes: new.notes,
            created_at: now,
            updated_at: now,
        };

        entities::ForageQuantityCensus::insert(
            forage_quantity_census::Model::from_domain_forage_quantity_census(&domain),
        )
        .exec(&self.db)
        .await
        .map_err(BackendError::Database)?;

        Ok(domain)
    }

    /// List forage quantity censuses matching the filter
    pub async fn get_forage_quantity_censuses(
        &self,
        params: ForageQuantityCensusParams,
    ) -> Result<Vec<ForageQuantityCensus>> {
        let models = forage_quantity_query(&params)
            .all(&self.db)
            .await
            .map_err(BackendError::Database)?;

        Ok(models
            .iter()
            .map(|model| model.to_domain_forage_quantity_census())
            .collect())
    }

    /// Update forage quantity censuses matching the filter, returning the updated rows
    pub async fn edit_forage_quantity_censuses(
        &self,
        update: UpdateForageQuantityCensus,
        params: ForageQuantityCensusParams,
    ) -> Result<Vec<ForageQuantityCensus>> {
        let models = forage_quantity_query(&params)
            .all(&self.db)
            .await
            .map_err(BackendError::Database)?;

        let mut updated = Vec::with_capacity(models.len());
        for model in models {
            let mut active: forage_quantity_census::ActiveModel = model.into();
            if let Some(plot_id) = update.plot_id {
                active.plot_id = Set(plot_id);
            }
            if let Some(photo_id) = update.photo_id {
                active.photo_id = Set(Some(photo_id));
            }
            if let Some(sda) = update.sda {
                active.sda = Set(sda);
            }
            if let Some(notes) = &update.notes {
                active.notes = Set(notes.clone());
            }
            active.updated_at = Set(chrono::Utc::now().into());

            let model = active.update(&self.db).await.map_err(BackendError::Database)?;
            updated.push(model.to_domain_forage_quantity_census());
        }

        Ok(updated)
    }

    /// Delete forage quantity censuses matching the filter, returning the affected count
    pub async fn delete_forage_quantity_censuses(
        &self,
        params: ForageQuantityCensusParams,
    ) -> Result<u64> {
        let ids: Vec<Uuid> = forage_quantity_query(&params)
            .all(&self.db)
            .await
            .map_err(BackendError::Database)?
            .into_iter()
            .map(|model| model.id)
            .collect();

        if ids.is_empty() {
            return Ok(0);
        }

        let result = entities::ForageQuantityCensus::delete_many()
            .filter(forage_quantity_census::Column::Id.is_in(ids))
            .exec(&self.db)
            .await
            .map_err(BackendError::Database)?;

        Ok(result.rows_affected)
    }
}
