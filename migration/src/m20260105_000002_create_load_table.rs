use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Load::Table)
                    .if_not_exists()
                    .col(pk_auto(Load::Id))
                    .col(double(Load::Volume))
                    .col(string(Load::Content))
                    .col(string(Load::CreationDate))
                    .col(json_null(Load::Carrier))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Load::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Load {
    Table,
    Id,
    Volume,
    Content,
    CreationDate,
    Carrier,
}
