use sea_orm::Set;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Plot database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "plots")]
pub struct Model {
    /// Plot ID (UUID)
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    /// Owning team
    pub team_id: Uuid,

    /// Reference photo
    pub photo_id: Option<Uuid>,

    /// Latitude of the plot marker
    pub latitude: f64,

    /// Longitude of the plot marker
    pub longitude: f64,

    /// Plot length in meters
    pub length: f64,

    /// Plot width in meters
    pub width: f64,

    /// Plot name
    pub name: String,

    /// Creation timestamp
    pub created_at: DateTimeWithTimeZone,

    /// Last update timestamp
    pub updated_at: DateTimeWithTimeZone,
}

/// Plot entity relations
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
    /// Convert SeaORM model to domain plot model
    pub fn to_domain_plot(&self) -> crate::core::models::Plot {
        crate::core::models::Plot {
            id: self.id,
            team_id: self.team_id,
            photo_id: self.photo_id,
            latitude: self.latitude,
            longitude: self.longitude,
            length: self.length,
            width: self.width,
            name: self.name.clone(),
            created_at: self.created_at.naive_utc().and_utc(),
            updated_at: self.updated_at.naive_utc().and_utc(),
        }
    }

    /// Convert domain plot model to SeaORM active model
    pub fn from_domain_plot(plot: &crate::core::models::Plot) -> ActiveModel {
        ActiveModel {
            id: Set(plot.id),
            team_id: Set(plot.team_id),
            photo_id: Set(plot.photo_id),
            latitude: Set(plot.latitude),
            longitude: Set(plot.longitude),
            length: Set(plot.length),
            width: Set(plot.width),
            name: Set(plot.name.clone()),
            created_at: Set(plot.created_at.into()),
            updated_at: Set(plot.updated_at.into()),
        }
    }
}
