use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DungCensuses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(DungCensuses::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(DungCensuses::HerdId).uuid().not_null())
                    .col(ColumnDef::new(DungCensuses::PlotId).uuid().not_null())
                    .col(ColumnDef::new(DungCensuses::PhotoId).uuid().null())
                    .col(ColumnDef::new(DungCensuses::Ratings).json().not_null())
                    .col(ColumnDef::new(DungCensuses::Notes).string().not_null())
                    .col(
                        ColumnDef::new(DungCensuses::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(DungCensuses::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_dung_censuses_herd_id")
                            .from(DungCensuses::Table, DungCensuses::HerdId)
                            .to(Herds::Table, Herds::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_dung_censuses_plot_id")
                            .from(DungCensuses::Table, DungCensuses::PlotId)
                            .to(Plots::Table, Plots::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_dung_censuses_plot_id")
                    .table(DungCensuses::Table)
                    .col(DungCensuses::PlotId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DungCensuses::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum DungCensuses {
    Table,
    Id,
    HerdId,
    PlotId,
    PhotoId,
    Ratings,
    Notes,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Herds {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Plots {
    Table,
    Id,
}
