use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20260220_000001_player::Player, m20260220_000002_age_category::AgeCategory,
    m20260220_000003_weight_category::WeightCategory, m20260220_000004_tournament::Tournament,
};

static IDX_REGISTRATION_TOURNAMENT_PLAYER: &str =
    "idx-tournament_registration-tournament_id-player_id";
static FK_REGISTRATION_TOURNAMENT_ID: &str = "fk-tournament_registration-tournament_id";
static FK_REGISTRATION_PLAYER_ID: &str = "fk-tournament_registration-player_id";
static FK_REGISTRATION_AGE_CATEGORY_ID: &str = "fk-tournament_registration-age_category_id";
static FK_REGISTRATION_WEIGHT_CATEGORY_ID: &str = "fk-tournament_registration-weight_category_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TournamentRegistration::Table)
                    .if_not_exists()
                    .col(pk_auto(TournamentRegistration::Id))
                    .col(integer(TournamentRegistration::TournamentId))
                    .col(integer(TournamentRegistration::PlayerId))
                    .col(integer(TournamentRegistration::AgeCategoryId))
                    .col(integer_null(TournamentRegistration::WeightCategoryId))
                    .col(double_null(TournamentRegistration::WeighInWeight))
                    .col(timestamp(TournamentRegistration::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_REGISTRATION_TOURNAMENT_ID)
                            .from(
                                TournamentRegistration::Table,
                                TournamentRegistration::TournamentId,
                            )
                            .to(Tournament::Table, Tournament::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_REGISTRATION_PLAYER_ID)
                            .from(TournamentRegistration::Table, TournamentRegistration::PlayerId)
                            .to(Player::Table, Player::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_REGISTRATION_AGE_CATEGORY_ID)
                            .from(
                                TournamentRegistration::Table,
                                TournamentRegistration::AgeCategoryId,
                            )
                            .to(AgeCategory::Table, AgeCategory::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_REGISTRATION_WEIGHT_CATEGORY_ID)
                            .from(
                                TournamentRegistration::Table,
                                TournamentRegistration::WeightCategoryId,
                            )
                            .to(WeightCategory::Table, WeightCategory::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_REGISTRATION_TOURNAMENT_PLAYER)
                    .table(TournamentRegistration::Table)
                    .col(TournamentRegistration::TournamentId)
                    .col(TournamentRegistration::PlayerId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_REGISTRATION_TOURNAMENT_PLAYER)
                    .table(TournamentRegistration::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(TournamentRegistration::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum TournamentRegistration {
    Table,
    Id,
    TournamentId,
    PlayerId,
    AgeCategoryId,
    WeightCategoryId,
    WeighInWeight,
    CreatedAt,
}
