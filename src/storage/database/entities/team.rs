use sea_orm::Set;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Team database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "teams")]
pub struct Model {
    /// Team ID (UUID)
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    /// Team name
    pub name: String,

    /// Ranch size in acres
    pub acre_size: f64,

    /// Mailing address
    pub address: String,

    /// Years ranching
    pub yrs_ranch: i32,

    /// Years under holistic management
    pub yrs_hol_mang: i32,

    /// Join code (unique)
    #[sea_orm(unique)]
    pub code: String,

    /// Creation timestamp
    pub created_at: DateTimeWithTimeZone,

    /// Last update timestamp
    pub updated_at: DateTimeWithTimeZone,
}

/// Team entity relations
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Memberships relation
    #[sea_orm(has_many = "super::membership::Entity")]
    Memberships,

    /// Herds relation
    #[sea_orm(has_many = "super::herd::Entity")]
    Herds,

    /// Plots relation
    #[sea_orm(has_many = "super::plot::Entity")]
    Plots,
}

impl Related<super::membership::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Memberships.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Convert SeaORM model to domain team model
    pub fn to_domain_team(&self) -> crate::core::models::Team {
        crate::core::models::Team {
            id: self.id,
            name: self.name.clone(),
            acre_size: self.acre_size,
            address: self.address.clone(),
            yrs_ranch: self.yrs_ranch,
            yrs_hol_mang: self.yrs_hol_mang,
            code: self.code.clone(),
            created_at: self.created_at.naive_utc().and_utc(),
            updated_at: self.updated_at.naive_utc().and_utc(),
        }
    }

    /// Convert domain team model to SeaORM active model
    pub fn from_domain_team(team: &crate::core::models::Team) -> ActiveModel {
        ActiveModel {
            id: Set(team.id),
            name: Set(team.name.clone()),
            acre_size: Set(team.acre_size),
            address: Set(team.address.clone()),
            yrs_ranch: Set(team.yrs_ranch),
            yrs_hol_mang: Set(team.yrs_hol_mang),
            code: Set(team.code.clone()),
            created_at: Set(team.created_at.into()),
            updated_at: Set(team.updated_at.into()),
        }
    }
}
