use crate::core::models::{User, UserScope};
use crate::utils::error::{BackendError, Result};
use sea_orm::*;
use tracing::debug;
use uuid::Uuid;

use super::Database;
use super::entities::{self, user};

/// Filter parameters for user queries
#[derive(Debug, Clone, Default)]
pub struct UserParams {
    pub id: Option<Uuid>,
    pub email: Option<String>,
    pub role: Option<UserScope>,
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

/// Updatable user fields
#[derive(Debug, Clone, Default)]
pub struct UpdateUser {
    pub email: Option<String>,
    pub name: Option<String>,
    pub password_hash: Option<String>,
    pub role: Option<UserScope>,
}

fn construct_query(params: &UserParams) -> Select<entities::User> {
    let mut query = entities::User::find();
    if let Some(id) = params.id {
        query = query.filter(user::Column::Id.eq(id));
    }
    if let Some(email) = &params.email {
        query = query.filter(user::Column::Email.eq(email.clone()));
    }
    if let Some(role) = params.role {
        query = query.filter(user::Column::Role.eq(role.to_string()));
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
    /// Find user by ID
    pub async fn find_user_by_id(&self, user_id: Uuid) -> Result<Option<User>> {
        let user_model = entities::User::find_by_id(user_id)
            .one(&self.db)
            .await
            .map_err(BackendError::Database)?;

        Ok(user_model.map(|model| model.to_domain_user()))
    }

    /// Find user by email
    pub async fn find_user_by_email(&self, email: &str) -> Result<Option<User>> {
        let user_model = entities::User::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(BackendError::Database)?;

        Ok(user_model.map(|model| model.to_domain_user()))
    }

    /// Create a new user
    pub async fn create_user(&self, user: &User) -> Result<User> {
        debug!("Creating user: {}", user.email);

        let active_model = user::Model::from_domain_user(user);

        entities::User::insert(active_model)
            .exec(&self.db)
            .await
            .map_err(BackendError::Database)?;

        Ok(user.clone())
    }

    /// List users matching the filter
    pub async fn get_users(&self, params: UserParams) -> Result<Vec<User>> {
        let models = construct_query(&params)
            .all(&self.db)
            .await
            .map_err(BackendError::Database)?;

        Ok(models.iter().map(|model| model.to_domain_user()).collect())
    }

    /// Update users matching the filter, returning the updated rows
    pub async fn edit_users(&self, update: UpdateUser, params: UserParams) -> Result<Vec<User>> {
        let models = construct_query(&params)
            .all(&self.db)
            .await
            .map_err(BackendError::Database)?;

        let mut updated = Vec::with_capacity(models.len());
        for model in models {
            let mut active: user::ActiveModel = model.into();
            if let Some(email) = &update.email {
                active.email = Set(email.clone());
            }
            if let Some(name) = &update.name {
                active.name = Set(name.clone());
            }
            if let Some(password_hash) = &update.password_hash {
                active.password_hash = Set(password_hash.clone());
            }
            if let Some(role) = update.role {
                active.role = Set(role.to_string());
            }
            active.updated_at = Set(chrono::Utc::now().into());

            let model = active.update(&self.db).await.map_err(BackendError::Database)?;
            updated.push(model.to_domain_user());
        }

        Ok(updated)
    }

    /// Delete users matching the filter, returning the affected count
    pub async fn delete_users(&self, params: UserParams) -> Result<u64> {
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

        let result = entities::User::delete_many()
            .filter(user::Column::Id.is_in(ids))
            .exec(&self.db)
            .await
            .map_err(BackendError::Database)?;

        Ok(result.rows_affected)
    }
}
