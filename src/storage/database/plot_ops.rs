use crate::core::models::Plot;
use crate::utils::error::{BackendError, Result};
use sea_orm::*;
use tracing::debug;
use uuid::Uuid;

use super::Database;
use super::entities::{self, plot};

/// Filter parameters for plot queries
#[derive(Debug, Clone, Default)]
pub struct PlotParams {
    pub id: Option<Uuid>,
    pub team_id: Option<Uuid>,
    pub name: Option<String>,
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

/// Updatable plot fields
#[derive(Debug, Clone, Default)]
pub struct UpdatePlot {
    pub photo_id: Option<Uuid>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub length: Option<f64>,
    pub width: Option<f64>,
    pub name: Option<String>,
}

fn construct_query(params: &PlotParams) -> Select<entities::Plot> {
    let mut query = entities::Plot::find();
    if let Some(id) = params.id {
        query = query.filter(plot::Column::Id.eq(id));
    }
    if let Some(team_id) = params.team_id {
        query = query.filter(plot::Column::TeamId.eq(team_id));
    }
    if let Some(name) = &params.name {
        query = query.filter(plot::Column::Name.eq(name.clone()));
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
    /// Create a new plot
    pub async fn create_plot(&self, plot: &Plot) -> Result<Plot> {
        debug!("Creating plot {} for team {}", plot.name, plot.team_id);

        let active_model = plot::Model::from_domain_plot(plot);

        entities::Plot::insert(active_model)
            .exec(&self.db)
            .await
            .map_err(BackendError::Database)?;

        Ok(plot.clone())
    }

    /// List plots matching the filter
    pub async fn get_plots(&self, params: PlotParams) -> Result<Vec<Plot>> {
        let models = construct_query(&params)
            .all(&self.db)
            .await
            .map_err(BackendError::Database)?;

        Ok(models.iter().map(|model| model.to_domain_plot()).collect())
    }

    /// Update plots matching the filter, returning the updated rows
    pub async fn edit_plots(&self, update: UpdatePlot, params: PlotParams) -> Result<Vec<Plot>> {
        let models = construct_query(&params)
            .all(&self.db)
            .await
            .map_err(BackendError::Database)?;

        let mut updated = Vec::with_capacity(models.len());
        for model in models {
            let mut active: plot::ActiveModel = model.into();
            if let Some(photo_id) = update.photo_id {
                active.photo_id = Set(Some(photo_id));
            }
            if let Some(latitude) = update.latitude {
                active.latitude = Set(latitude);
            }
            if let Some(longitude) = update.longitude {
                active.longitude = Set(longitude);
            }
            if let Some(length) = update.length {
                active.length = Set(length);
            }
            if let Some(width) = update.width {
                active.width = Set(width);
            }
            if let Some(name) = &update.name {
                active.name = Set(name.clone());
            }
            active.updated_at = Set(chrono::Utc::now().into());

            let model = active.update(&self.db).await.map_err(BackendError::Database)?;
            updated.push(model.to_domain_plot());
        }

        Ok(updated)
    }

    /// Delete plots matching the filter, returning the affected count
    pub async fn delete_plots(&self, params: PlotParams) -> Result<u64> {
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

        let result = entities::Plot::delete_many()
            .filter(plot::Column::Id.is_in(ids))
            .exec(&self.db)
            .await
            .map_err(BackendError::Database)?;

        Ok(result.rows_affected)
    }
}
