//! Photo record model
//!
//! Photos are stored externally; the backend only tracks the URLs and
//! which census or herd a photo documents.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Photo record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Photo {
    /// Photo ID
    pub id: Uuid,
    /// Census the photo documents, if any
    pub census_id: Option<Uuid>,
    /// Herd the photo documents, if any
    pub herd_id: Option<Uuid>,
    /// Full-resolution image URL
    pub full_url: String,
    /// Thumbnail URL
    pub thumb_url: String,
    /// Creation timestamp
    pub created_at: chrono::DateTime<chrono::Utc>,
    /// Last update timestamp
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// Incoming photo payload on census creation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhotoInput {
    /// Full-resolution image URL
    pub full_url: String,
    /// Thumbnail URL
    #[serde(default)]
    pub thumb_url: String,
}
