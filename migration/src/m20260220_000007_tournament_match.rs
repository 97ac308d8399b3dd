use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20260220_000001_player::Player, m20260220_000006_bracket::Bracket};

static IDX_MATCH_BRACKET_ROUND_NUMBER: &str =
    "idx-tournament_match-bracket_id-round_number-match_number";
static FK_MATCH_BRACKET_ID: &str = "fk-tournament_match-bracket_id";
static FK_MATCH_PLAYER_ONE_ID: &str = "fk-tournament_match-player_one_id";
static FK_MATCH_PLAYER_TWO_ID: &str = "fk-tournament_match-player_two_id";
static FK_MATCH_WINNER_ID: &str = "fk-tournament_match-winner_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TournamentMatch::Table)
                    .if_not_exists()
                    .col(pk_auto(TournamentMatch::Id))
                    .col(integer(TournamentMatch::BracketId))
                    .col(integer(TournamentMatch::RoundNumber))
                    .col(integer(TournamentMatch::MatchNumber))
                    .col(integer_null(TournamentMatch::PlayerOneId))
                    .col(integer_null(TournamentMatch::PlayerTwoId))
                    .col(integer_null(TournamentMatch::WinnerId))
                    .col(string_len(TournamentMatch::Status, 30))
                    .col(timestamp(TournamentMatch::CreatedAt))
                    .col(timestamp(TournamentMatch::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_MATCH_BRACKET_ID)
                            .from(TournamentMatch::Table, TournamentMatch::BracketId)
                            .to(Bracket::Table, Bracket::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_MATCH_PLAYER_ONE_ID)
                            .from(TournamentMatch::Table, TournamentMatch::PlayerOneId)
                            .to(Player::Table, Player::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_MATCH_PLAYER_TWO_ID)
                            .from(TournamentMatch::Table, TournamentMatch::PlayerTwoId)
                            .to(Player::Table, Player::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_MATCH_WINNER_ID)
                            .from(TournamentMatch::Table, TournamentMatch::WinnerId)
                            .to(Player::Table, Player::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_MATCH_BRACKET_ROUND_NUMBER)
                    .table(TournamentMatch::Table)
                    .col(TournamentMatch::BracketId)
                    .col(TournamentMatch::RoundNumber)
                    .col(TournamentMatch::MatchNumber)
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
                    .name(IDX_MATCH_BRACKET_ROUND_NUMBER)
                    .table(TournamentMatch::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(TournamentMatch::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum TournamentMatch {
    Table,
    Id,
    BracketId,
    RoundNumber,
    MatchNumber,
    PlayerOneId,
    PlayerTwoId,
    WinnerId,
    Status,
    CreatedAt,
    UpdatedAt,
}
