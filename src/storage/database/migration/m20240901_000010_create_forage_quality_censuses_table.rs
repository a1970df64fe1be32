use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ForageQualityCensuses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ForageQualityCensuses::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ForageQualityCensuses::PlotId)
                            .uuid()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ForageQualityCensuses::PhotoId).uuid().null())
                    .col(
                        ColumnDef::new(ForageQualityCensuses::Rating)
                            .double()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ForageQualityCensuses::Notes)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ForageQualityCensuses::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(ForageQualityCensuses::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_forage_quality_censuses_plot_id")
                            .from(ForageQualityCensuses::Table, ForageQualityCensuses::PlotId)
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
                    .name("idx_forage_quality_censuses_plot_id")
                    .table(ForageQualityCensuses::Table)
                    .col(ForageQualityCensuses::PlotId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(ForageQualityCensuses::Table)
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
enum ForageQualityCensuses {
    Table,
    Id,
    PlotId,
    PhotoId,
    Rating,
    Notes,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Plots {
    Table,
    Id,
}
