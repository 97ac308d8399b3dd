use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AgeCategory::Table)
                    .if_not_exists()
                    .col(pk_auto(AgeCategory::Id))
                    .col(string(AgeCategory::Name))
                    .col(integer(AgeCategory::MinAge))
                    .col(integer(AgeCategory::MaxAge))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AgeCategory::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum AgeCategory {
    Table,
    Id,
    Name,
    MinAge,
    MaxAge,
}
