use sea_orm::Set;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Herd database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "herds")]
pub struct Model {
    /// Herd ID (UUID)
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    /// Owning team
    pub team_id: Uuid,

    /// Breed name
    pub breed: String,

    /// Head count
    pub count: i32,

    /// Breeding date
    pub breeding_date: DateTimeWithTimeZone,

    /// Expected calving date
    pub calving_date: DateTimeWithTimeZone,

    /// Creation timestamp
    pub created_at: DateTimeWithTimeZone,

    /// Last update timestamp
    pub updated_at: DateTimeWithTimeZone,
}

/// Herd entity relations
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Owning team
    #[sea_orm(
        belongs_to = "super::team::Entity",
        from = "Column::TeamId",
        to = "super::team::Column::Id"
    )]
    Team,
}

impl Related<super::team::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Team.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Convert SeaORM model to domain herd model
    pub fn to_domain_herd(&self) -> crate::core::models::Herd {
        crate::core::models::Herd {
            id: self.id,
            team_id: self.team_id,
            breed: self.breed.clone(),
            count: self.count,
            breeding_date: self.breeding_date.naive_utc().and_utc(),
            calving_date: self.calving_date.naive_utc().and_utc(),
            created_at: self.created_at.naive_utc().and_utc(),
            updated_at: self.updated_at.naive_utc().and_utc(),
        }
    }

    /// Convert domain herd model to SeaORM active model
    pub fn from_domain_herd(herd: &crate::core::models::Herd) -> ActiveModel {
        ActiveModel {
            id: Set(herd.id),
            team_id: Set(herd.team_id),
            breed: Set(herd.breed.clone()),
            count: Set(herd.count),
            breeding_date: Set(herd.breeding_date.into()),
            calving_date: Set(herd.calving_date.into()),
            created_at: Set(herd.created_at.into()),
            updated_at: Set(herd.updated_at.into()),
        }
    }
}
