use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ForageQuantityCensuses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ForageQuantityCensuses::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ForageQuantityCensuses::PlotId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ForageQuantityCensuses::PhotoId)
                            .uuid()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(ForageQuantityCensuses::Sda)
                            .double()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ForageQuantityCensuses::Notes)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ForageQuantityCensuses::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(ForageQuantityCensuses::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_forage_quantity_censuses_plot_id")
                            .from(
                                ForageQuantityCensuses::Table,
                                ForageQuantityCensuses::PlotId,
                            )
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
                    .name("idx_forage_quantity_censuses_plot_id")
                    .table(ForageQuantityCensuses::Table)
                    .col(ForageQuantityCensuses::PlotId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(ForageQuantityCensuses::Table)
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
enum ForageQuantityCensuses {
    Table,
    Id,
    PlotId,
    PhotoId,
    Sda,
    Notes,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Plots {
    Table,
    Id,
}
