use sea_orm::Set;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Cow body-condition census database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "cow_censuses")]
pub struct Model {
    /// Census ID (UUID)
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    /// Scored herd
    pub herd_id: Uuid,

    /// Attached photo
    pub photo_id: Option<Uuid>,

    /// Body-condition score
    pub bcs: f64,

    /// Field notes
    pub notes: String,

    /// Ear tag
    pub tag: String,

    /// Creation timestamp
    pub created_at: DateTimeWithTimeZone,

    /// Last update timestamp
    pub updated_at: DateTimeWithTimeZone,
}

/// Cow census entity relations
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Scored herd
    #[sea_orm(
        belongs_to = "super::herd::Entity",
        from = "Column::HerdId",
        to = "super::herd::Column::Id"
    )]
    Herd,
}

impl Related<super::herd::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Herd.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Convert SeaORM model to domain census model
    pub fn to_domain_cow_census(&self) -> crate::core::models::CowCensus {
        crate::core::models::CowCensus {
            id: self.id,
            herd_id: self.herd_id,
            photo_id: self.photo_id,
            bcs: self.bcs,
            notes: self.notes.clone(),
            tag: self.tag.clone(),
            created_at: self.created_at.naive_utc().and_utc(),
            updated_at: self.updated_at.naive_utc().and_utc(),
        }
    }

    /// Convert domain census model to SeaORM active model
    pub fn from_domain_cow_census(census: &crate::core::models::CowCensus) -> ActiveModel {
        ActiveModel {
            id: Set(census.id),
            herd_id: Set(census.herd_id),
            photo_id: Set(census.photo_id),
            bcs: Set(census.bcs),
            notes: Set(census.notes.clone()),
            tag: Set(census.tag.clone()),
            created_at: Set(census.created_at.into()),
            updated_at: Set(census.updated_at.into()),
        }
    }
}
