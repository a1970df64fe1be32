use sea_orm::Set;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Dung-rating census database model
///
/// Ratings are a variable-length list of per-sample scores, stored as a
/// JSON column so the schema works on both backends.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "dung_censuses")]
pub struct Model {
    /// Census ID (UUID)
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    /// Observed herd
    pub herd_id: Uuid,

    /// Observed plot
    pub plot_id: Uuid,

    /// Attached photo
    pub photo_id: Option<Uuid>,

    /// Per-sample ratings (JSON array of numbers)
    pub ratings: Json,

    /// Field notes
    pub notes: String,

    /// Creation timestamp
    pub created_at: DateTimeWithTimeZone,

    /// Last update timestamp
    pub updated_at: DateTimeWithTimeZone,
}

/// Dung census entity relations
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Observed herd
    #[sea_orm(
        belongs_to = "super::herd::Entity",
        from = "Column::HerdId",
        to = "super::herd::Column::Id"
    )]
    Herd,

    /// Observed plot
    #[sea_orm(
        belongs_to = "super::plot::Entity",
        from = "Column::PlotId",
        to = "super::plot::Column::Id"
    )]
    Plot,
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Convert SeaORM model to domain census model
    pub fn to_domain_dung_census(&self) -> crate::core::models::DungCensus {
        let ratings = self
            .ratings
            .as_array()
            .map(|values| values.iter().filter_map(|v| v.as_f64()).collect())
            .unwrap_or_default();

        crate::core::models::DungCensus {
            id: self.id,
            herd_id: self.herd_id,
            plot_id: self.plot_id,
            photo_id: self.photo_id,
            ratings,
            notes: self.notes.clone(),
            created_at: self.created_at.naive_utc().and_utc(),
            updated_at: self.updated_at.naive_utc().and_utc(),
        }
    }

    /// Convert domain census model to SeaORM active model
    pub fn from_domain_dung_census(census: &crate::core::models::DungCensus) -> ActiveModel {
        ActiveModel {
            id: Set(census.id),
            herd_id: Set(census.herd_id),
            plot_id: Set(census.plot_id),
            photo_id: Set(census.photo_id),
            ratings: Set(serde_json::json!(census.ratings)),
            notes: Set(census.notes.clone()),
            created_at: Set(census.created_at.into()),
            updated_at: Set(census.updated_at.into()),
        }
    }
}
