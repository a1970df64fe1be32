use sea_orm_migration::prelude::*;

mod m20240901_000001_create_users_table;
mod m20240901_000002_create_teams_table;
mod m20240901_000003_create_memberships_table;
mod m20240901_000004_create_verification_codes_table;
mod m20240901_000005_create_herds_table;
mod m20240901_000006_create_plots_table;
mod m20240901_000007_create_photos_table;
mod m20240901_000008_create_cow_censuses_table;
mod m20240901_000009_create_dung_censuses_table;
mod m20240901_000010_create_forage_quality_censuses_table;
mod m20240901_000011_create_forage_quantity_censuses_table;

/// Database migrator for SeaORM
pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240901_000001_create_users_table::Migration),
            Box::new(m20240901_000002_create_teams_table::Migration),
            Box::new(m20240901_000003_create_memberships_table::Migration),
            Box::new(m20240901_000004_create_verification_codes_table::Migration),
            Box::new(m20240901_000005_create_herds_table::Migration),
            Box::new(m20240901_000006_create_plots_table::Migration),
            Box::new(m20240901_000007_create_photos_table::Migration),
            Box::new(m20240901_000008_create_cow_censuses_table::Migration),
            Box::new(m20240901_000009_create_dung_censuses_table::Migration),
            Box::new(m20240901_000010_create_forage_quality_censuses_table::Migration),
            Box::new(m20240901_000011_create_forage_quantity_censuses_table::Migration),
        ]
    }
}
