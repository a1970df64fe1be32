use sea_orm::Set;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Forage quantity census database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "forage_quantity_censuses")]
pub struct Model {
    /// Census ID (UUID)
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    /// Observed plot
    pub plot_id: Uuid,

    /// Attached photo
    pub photo_id: Option<Uuid>,

    /// Standing dry acreage estimate
    pub sda: f64,

    /// Field notes
    pub notes: String,

    /// Creation timestamp
    pub created_at: DateTimeWithTimeZone,

    /// Last update timestamp
    pub updated_at: DateTimeWithTimeZone,
}

/// Forage quantity census entity relations
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Observed plot
    #[sea_orm(
        belongs_to = "super::plot::Entity",
        from = "Column::PlotId",
        to = "super::plot::Column::Id"
    )]
    Plot,
}

impl Related<super::plot::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Plot.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Convert SeaORM model to domain census model
    pub fn to_domain_forage_quantity_census(&self) -> crate::core::models::ForageQuantityCensus {
        crate::core::models::ForageQuantityCensus {
            id: self.id,
            plot_id: self.plot_id,
            photo_id: self.photo_id,
            sda: self.sda,
            notes: self.notes.clone(),
            created_at: self.created_at.naive_utc().and_utc(),
            updated_at: self.updated_at.naive_utc().and_utc(),
        }
    }

    /// Convert domain census model to SeaORM active model
    pub fn from_domain_forage_quantity_census(
        census: &crate::core::models::ForageQuantityCensus,
    ) -> ActiveModel {
        ActiveModel {
            id: Set(census.id),
            plot_id: Set(census.plot_id),
            photo_id: Set(census.photo_id),
            sda: Set(census.sda),
            notes: Set(census.notes.clone()),
            created_at: Set(census.created_at.into()),
            updated_at: Set(census.updated_at.into()),
        }
    }
}
