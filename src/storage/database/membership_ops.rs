use crate::core::models::{Membership, TeamScope};
use crate::utils::error::{BackendError, Result};
use sea_orm::*;
use tracing::debug;
use uuid::Uuid;

use super::Database;
use super::entities::{self, membership};

/// Filter parameters for membership queries
///
/// The membership gate queries by `user_id`; routes query by `id` and
/// `team_id`.
#[derive(Debug, Clone, Default)]
pub struct MembershipParams {
    pub id: Option<Uuid>,
    pub team_id: Option<Uuid>,
    pub user_id: Option<Uuid>,
    pub role: Option<TeamScope>,
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

/// Updatable membership fields
#[derive(Debug, Clone, Default)]
pub struct UpdateMembership {
    pub role: Option<TeamScope>,
}

fn construct_query(params: &MembershipParams) -> Select<entities::Membership> {
    let mut query = entities::Membership::find();
    if let Some(id) = params.id {
        query = query.filter(membership::Column::Id.eq(id));
    }
    if let Some(team_id) = params.team_id {
        query = query.filter(membership::Column::TeamId.eq(team_id));
    }
    if let Some(user_id) = params.user_id {
        query = query.filter(membership::Column::UserId.eq(user_id));
    }
    if let Some(role) = params.role {
        query = query.filter(membership::Column::Role.eq(role.to_string()));
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
    /// Create a new membership
    pub async fn create_membership(&self, membership: &Membership) -> Result<Membership> {
        debug!(
            "Creating membership: user {} in team {}",
            membership.user_id, membership.team_id
        );

        let active_model = membership::Model::from_domain_membership(membership);

        entities::Membership::insert(active_model)
            .exec(&self.db)
            .await
            .map_err(BackendError::Database)?;

        Ok(membership.clone())
    }

    /// List memberships matching the filter
    pub async fn get_memberships(&self, params: MembershipParams) -> Result<Vec<Membership>> {
        let models = construct_query(&params)
            .all(&self.db)
            .await
            .map_err(BackendError::Database)?;

        Ok(models
            .iter()
            .map(|model| model.to_domain_membership())
            .collect())
    }

    /// Update memberships matching the filter, returning the updated rows
    pub async fn edit_memberships(
        &self,
        update: UpdateMembership,
        params: MembershipParams,
    ) -> Result<Vec<Membership>> {
        let models = construct_query(&params)
            .all(&self.db)
            .await
            .map_err(BackendError::Database)?;

        let mut updated = Vec::with_capacity(models.len());
        for model in models {
            let mut active: membership::ActiveModel = model.into();
            if let Some(role) = update.role {
                active.role = Set(role.to_string());
            }
            active.updated_at = Set(chrono::Utc::now().into());

            let model = active.update(&self.db).await.map_err(BackendError::Database)?;
            updated.push(model.to_domain_membership());
        }

        Ok(updated)
    }

    /// Delete memberships matching the filter, returning the affected count
    pub async fn delete_memberships(&self, params: MembershipParams) -> Result<u64> {
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

        let result = entities::Membership::delete_many()
            .filter(membership::Column::Id.is_in(ids))
            .exec(&self.db)
            .await
            .map_err(BackendError::Database)?;

        Ok(result.rows_affected)
    }
}
