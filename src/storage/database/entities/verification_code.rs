use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Email verification code database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "verification_codes")]
pub struct Model {
    /// Code ID (UUID)
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    /// Email the code was issued for
    pub email: String,

    /// The code itself
    pub code: String,

    /// Expiration timestamp
    pub expiration: DateTimeWithTimeZone,

    /// Creation timestamp
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
