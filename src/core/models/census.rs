//! Census observation models
//!
//! Four observation types are collected in the field: cow body-condition
//! scores, dung ratings, forage quality, and forage quantity.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Body-condition score observation for a herd
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CowCensus {
    pub id: Uuid,
    /// Herd the scored cow belongs to
    pub herd_id: Uuid,
    pub photo_id: Option<Uuid>,
    /// Body-condition score (1-9 scale)
    pub bcs: f64,
    pub notes: String,
    /// Ear tag of the scored cow
    pub tag: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// Dung-rating observation across a plot transect
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DungCensus {
    pub id: Uuid,
    pub herd_id: Uuid,
    pub plot_id: Uuid,
    pub photo_id: Option<Uuid>,
    /// Per-sample ratings along the transect
    pub ratings: Vec<f64>,
    pub notes: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// Forage quality observation for a plot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForageQualityCensus {
    pub id: Uuid,
    pub plot_id: Uuid,
    pub photo_id: Option<Uuid>,
    pub rating: f64,
    pub notes: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// Forage quantity observation for a plot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForageQuantityCensus {
    pub id: Uuid,
    pub plot_id: Uuid,
    pub photo_id: Option<Uuid>,
    /// Standing dry acreage estimate
    pub sda: f64,
    pub notes: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
