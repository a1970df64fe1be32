//! Plot model

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A plot of land monitored by a team
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Plot {
    /// Plot ID
    pub id: Uuid,
    /// Owning team
    pub team_id: Uuid,
    /// Reference photo, if one was taken
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
    pub created_at: chrono::DateTime<chrono::Utc>,
    /// Last update timestamp
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
