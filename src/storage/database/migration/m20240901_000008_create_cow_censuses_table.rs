use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CowCensuses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CowCensuses::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(CowCensuses::HerdId).uuid().not_null())
                    .col(ColumnDef::new(CowCensuses::PhotoId).uuid().null())
                    .col(ColumnDef::new(CowCensuses::Bcs).double().not_null())
                    .col(ColumnDef::new(CowCensuses::Notes).string().not_null())
                    .col(ColumnDef::new(CowCensuses::Tag).string().not_null())
                    .col(
                        ColumnDef::new(CowCensuses::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(CowCensuses::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_cow_censuses_herd_id")
                            .from(CowCensuses::Table, CowCensuses::HerdId)
                            .to(Herds::Table, Herds::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_cow_censuses_herd_id")
                    .table(CowCensuses::Table)
                    .col(CowCensuses::HerdId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CowCensuses::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum CowCensuses {
    Table,
    Id,
    HerdId,
    PhotoId,
    Bcs,
    Notes,
    Tag,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Herds {
    Table,
    Id,
}
