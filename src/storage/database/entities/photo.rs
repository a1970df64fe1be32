use sea_orm::Set;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Photo record database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "photos")]
pub struct Model {
    /// Photo ID (UUID)
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    /// Census the photo documents
    pub census_id: Option<Uuid>,

    /// Herd the photo documents
    pub herd_id: Option<Uuid>,

    /// Full-resolution image URL
    pub full_url: String,

    /// Thumbnail URL
    pub thumb_url: String,

    /// Creation timestamp
    pub created_at: DateTimeWithTimeZone,

    /// Last update timestamp
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Convert SeaORM model to domain photo model
    pub fn to_domain_photo(&self) -> crate::core::models::Photo {
        crate::core::models::Photo {
            id: self.id,
            census_id: self.census_id,
            herd_id: self.herd_id,
            full_url: self.full_url.clone(),
            thumb_url: self.thumb_url.clone(),
            created_at: self.created_at.naive_utc().and_utc(),
            updated_at: self.updated_at.naive_utc().and_utc(),
        }
    }

    /// Convert domain photo model to SeaORM active model
    pub fn from_domain_photo(photo: &crate::core::models::Photo) -> ActiveModel {
        ActiveModel {
            id: Set(photo.id),
            census_id: Set(photo.census_id),
            herd_id: Set(photo.herd_id),
            full_url: Set(photo.full_url.clone()),
            thumb_url: Set(photo.thumb_url.clone()),
            created_at: Set(photo.created_at.into()),
            updated_at: Set(photo.updated_at.into()),
        }
    }
}
