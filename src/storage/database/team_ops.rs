use crate::core::models::Team;
use crate::utils::error::{BackendError, Result};
use sea_orm::*;
use tracing::debug;
use uuid::Uuid;

use super::Database;
use super::entities::{self, membership, team};

/// Filter parameters for team queries
///
/// `user_id` filters to teams the given user holds a membership in.
#[derive(Debug, Clone, Default)]
pub struct TeamParams {
    pub id: Option<Uuid>,
    pub user_id: Option<Uuid>,
    pub name: Option<String>,
    pub code: Option<String>,
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

/// Updatable team fields
#[derive(Debug, Clone, Default)]
pub struct UpdateTeam {
    pub name: Option<String>,
    pub acre_size: Option<f64>,
    pub address: Option<String>,
    pub yrs_ranch: Option<i32>,
    pub yrs_hol_mang: Option<i32>,
}

fn construct_query(params: &TeamParams) -> Select<entities::Team> {
    let mut query = entities::Team::find();
    if let Some(id) = params.id {
        query = query.filter(team::Column::Id.eq(id));
    }
    if let Some(user_id) = params.user_id {
        query = query
            .join(JoinType::InnerJoin, team::Relation::Memberships.def())
            .filter(membership::Column::UserId.eq(user_id));
    }
    if let Some(name) = &params.name {
        query = query.filter(team::Column::Name.eq(name.clone()));
    }
    if let Some(code) = &params.code {
        query = query.filter(team::Column::Code.eq(code.clone()));
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
    /// Create a new team
    pub async fn create_team(&self, team: &Team) -> Result<Team> {
        debug!("Creating team: {}", team.name);

        let active_model = team::Model::from_domain_team(team);

        entities::Team::insert(active_model)
            .exec(&self.db)
            .await
            .map_err(BackendError::Database)?;

        Ok(team.clone())
    }

    /// List teams matching the filter
    pub async fn get_teams(&self, params: TeamParams) -> Result<Vec<Team>> {
        let models = construct_query(&params)
            .all(&self.db)
            .await
            .map_err(BackendError::Database)?;

        Ok(models.iter().map(|model| model.to_domain_team()).collect())
    }

    /// Update teams matching the filter, returning the updated rows
    pub async fn edit_teams(&self, update: UpdateTeam, params: TeamParams) -> Result<Vec<Team>> {
        let models = construct_query(&params)
            .all(&self.db)
            .await
            .map_err(BackendError::Database)?;

        let mut updated = Vec::with_capacity(models.len());
        for model in models {
            let mut active: team::ActiveModel = model.into();
            if let Some(name) = &update.name {
                active.name = Set(name.clone());
            }
            if let Some(acre_size) = update.acre_size {
                active.acre_size = Set(acre_size);
            }
            if let Some(address) = &update.address {
                active.address = Set(address.clone());
            }
            if let Some(yrs_ranch) = update.yrs_ranch {
                active.yrs_ranch = Set(yrs_ranch);
            }
            if let Some(yrs_hol_mang) = update.yrs_hol_mang {
                active.yrs_hol_mang = Set(yrs_hol_mang);
            }
            active.updated_at = Set(chrono::Utc::now().into());

            let model = active.update(&self.db).await.map_err(BackendError::Database)?;
            updated.push(model.to_domain_team());
        }

        Ok(updated)
    }

    /// Delete teams matching the filter, returning the affected count
    pub async fn delete_teams(&self, params: TeamParams) -> Result<u64> {
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

        let result = entities::Team::delete_many()
            .filter(team::Column::Id.is_in(ids))
            .exec(&self.db)
            .await
            .map_err(BackendError::Database)?;

        Ok(result.rows_affected)
    }
}
