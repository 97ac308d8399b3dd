use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Tournament::Table)
                    .if_not_exists()
                    .col(pk_auto(Tournament::Id))
                    .col(string(Tournament::Name))
                    .col(date(Tournament::TournamentDate))
                    .col(string_len(Tournament::Status, 30))
                    .col(timestamp(Tournament::CreatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Tournament::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Tournament {
    Table,
    Id,
    Name,
    TournamentDate,
    Status,
    CreatedAt,
}
