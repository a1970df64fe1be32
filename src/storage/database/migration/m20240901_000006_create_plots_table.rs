use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Plots::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Plots::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Plots::TeamId).uuid().not_null())
                    .col(ColumnDef::new(Plots::PhotoId).uuid().null())
                    .col(ColumnDef::new(Plots::Latitude).double().not_null())
                    .col(ColumnDef::new(Plots::Longitude).double().not_null())
                    .col(ColumnDef::new(Plots::Length).double().not_null())
                    .col(ColumnDef::new(Plots::Width).double().not_null())
                    .col(ColumnDef::new(Plots::Name).string().not_null())
                    .col(
                        ColumnDef::new(Plots::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Plots::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_plots_team_id")
                            .from(Plots::Table, Plots::TeamId)
                            .to(Teams::Table, Teams::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_plots_team_id")
                    .table(Plots::Table)
                    .col(Plots::TeamId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Plots::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Plots {
    Table,
    Id,
    TeamId,
    PhotoId,
    Latitude,
    Longitude,
    Length,
    Width,
    Name,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Teams {
    Table,
    Id,
}
