//! Relational database access
//!
//! Entities live in [`entities`], programmatic migrations in [`migration`],
//! and per-entity query operations in the sibling `*_ops` modules as
//! `impl Database` blocks.

pub mod entities;
pub mod migration;

mod census_ops;
mod herd_ops;
mod membership_ops;
mod photo_ops;
mod plot_ops;
mod team_ops;
mod user_ops;
mod verification_code_ops;

#[cfg(test)]
mod tests;

pub use census_ops::{
    CowCensusParams, DungCensusParams, ForageQualityCensusParams, ForageQuantityCensusParams,
    NewCowCensus, NewDungCensus, NewForageQualityCensus, NewForageQuantityCensus, UpdateCowCensus,
    UpdateDungCensus, UpdateForageQualityCensus, UpdateForageQuantityCensus,
};
pub use herd_ops::{HerdParams, UpdateHerd};
pub use membership_ops::{MembershipParams, UpdateMembership};
pub use photo_ops::PhotoParams;
pub use plot_ops::{PlotParams, UpdatePlot};
pub use team_ops::{TeamParams, UpdateTeam};
pub use user_ops::{UpdateUser, UserParams};

use crate::config::DatabaseConfig;
use crate::utils::error::{BackendError, Result};
use sea_orm::{ConnectOptions, DatabaseConnection};
use sea_orm_migration::MigratorTrait;
use std::time::Duration;
use tracing::info;

/// Database handle
#[derive(Clone)]
pub struct Database {
    pub(crate) db: DatabaseConnection,
}

impl Database {
    /// Connect to the configured database
    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        info!("Connecting to database");

        let mut options = ConnectOptions::new(config.url.clone());
        options
            .max_connections(config.max_connections)
            .connect_timeout(Duration::from_secs(10))
            .sqlx_logging(false);

        let db = sea_orm::Database::connect(options)
            .await
            .map_err(BackendError::Database)?;

        Ok(Self { db })
    }

    /// Run pending migrations
    pub async fn migrate(&self) -> Result<()> {
        info!("Running database migrations");
        migration::Migrator::up(&self.db, None)
            .await
            .map_err(BackendError::Database)?;
        Ok(())
    }

    /// Underlying sea-orm connection
    pub fn connection(&self) -> &DatabaseConnection {
        &self.db
    }
}
