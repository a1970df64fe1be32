//! Storage layer
//!
//! This module provides the persistence backend for the API. All access
//! goes through [`Database`], a thin wrapper around a sea-orm connection.

pub mod database;

pub use database::Database;

use crate::config::DatabaseConfig;
use crate::utils::error::Result;
use tracing::info;

/// Storage layer shared across the application
#[derive(Clone)]
pub struct StorageLayer {
    /// Relational database
    pub database: Database,
}

impl StorageLayer {
    /// Create a new storage layer
    pub async fn new(config: &DatabaseConfig) -> Result<Self> {
        info!("Initializing storage layer");

        let database = Database::connect(config).await?;
        if config.auto_migrate {
            database.migrate().await?;
        }

        Ok(Self { database })
    }
}
