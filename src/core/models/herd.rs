//! Herd model

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A herd of cattle belonging to a team
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Herd {
    /// Herd ID
    pub id: Uuid,
    /// Owning team
    pub team_id: Uuid,
    /// Breed name
    pub breed: String,
    /// Head count
    pub count: i32,
    /// Breeding date
    pub breeding_date: chrono::DateTime<chrono::Utc>,
    /// Expected calving date
    pub calving_date: chrono::DateTime<chrono::Utc>,
    /// Creation timestamp
    pub created_at: chrono::DateTime<chrono::Utc>,
    /// Last update timestamp
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
