use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20260220_000002_age_category::AgeCategory, m20260220_000003_weight_category::WeightCategory,
    m20260220_000004_tournament::Tournament,
};

static IDX_BRACKET_TOURNAMENT_ID: &str = "idx-bracket-tournament_id";
static FK_BRACKET_TOURNAMENT_ID: &str = "fk-bracket-tournament_id";
static FK_BRACKET_AGE_CATEGORY_ID: &str = "fk-bracket-age_category_id";
static FK_BRACKET_WEIGHT_CATEGORY_ID: &str = "fk-bracket-weight_category_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Bracket::Table)
                    .if_not_exists()
                    .col(pk_auto(Bracket::Id))
                    .col(integer(Bracket::TournamentId))
                    .col(string_len(Bracket::Gender, 6))
                    .col(integer(Bracket::AgeCategoryId))
                    .col(integer(Bracket::WeightCategoryId))
                    .col(string_len(Bracket::Format, 30))
                    .col(integer(Bracket::Rounds))
                    .col(timestamp(Bracket::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_BRACKET_TOURNAMENT_ID)
                            .from(Bracket::Table, Bracket::TournamentId)
                            .to(Tournament::Table, Tournament::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_BRACKET_AGE_CATEGORY_ID)
                            .from(Bracket::Table, Bracket::AgeCategoryId)
                            .to(AgeCategory::Table, AgeCategory::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_BRACKET_WEIGHT_CATEGORY_ID)
                            .from(Bracket::Table, Bracket::WeightCategoryId)
                            .to(WeightCategory::Table, WeightCategory::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_BRACKET_TOURNAMENT_ID)
                    .table(Bracket::Table)
                    .col(Bracket::TournamentId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_BRACKET_TOURNAMENT_ID)
                    .table(Bracket::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Bracket::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Bracket {
    Table,
    Id,
    TournamentId,
    Gender,
    AgeCategoryId,
    WeightCategoryId,
    Format,
    Rounds,
    CreatedAt,
}
