use sea_orm::Set;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Membership database model
///
/// Binds a user to a team with a team-level scope. At most one membership
/// per (team, user) pair.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "memberships")]
pub struct Model {
    /// Membership ID (UUID)
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    /// Team ID
    pub team_id: Uuid,

    /// User ID
    pub user_id: Uuid,

    /// Team scope
    pub role: String,

    /// Creation timestamp
    pub created_at: DateTimeWithTimeZone,

    /// Last update timestamp
    pub updated_at: DateTimeWithTimeZone,
}

/// Membership entity relations
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Owning team
    #[sea_orm(
        belongs_to = "super::team::Entity",
        from = "Column::TeamId",
        to = "super::team::Column::Id"
    )]
    Team,

    /// Member user
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
}

impl Related<super::team::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Team.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Convert SeaORM model to domain membership model
    pub fn to_domain_membership(&self) -> crate::core::models::Membership {
        use crate::core::models::TeamScope;

        crate::core::models::Membership {
            id: self.id,
            team_id: self.team_id,
            user_id: self.user_id,
            role: TeamScope::from_str(&self.role).unwrap_or(TeamScope::User),
            created_at: self.created_at.naive_utc().and_utc(),
            updated_at: self.updated_at.naive_utc().and_utc(),
        }
    }

    /// Convert domain membership model to SeaORM active model
    pub fn from_domain_membership(membership: &crate::core::models::Membership) -> ActiveModel {
        ActiveModel {
            id: Set(membership.id),
            team_id: Set(membership.team_id),
            user_id: Set(membership.user_id),
            role: Set(membership.role.to_string()),
            created_at: Set(membership.created_at.into()),
            updated_at: Set(membership.updated_at.into()),
        }
    }
}
