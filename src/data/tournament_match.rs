use chrono::Utc;
use entity::sea_orm_active_enums::MatchStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::bracket::{advance::Slot, MatchSlot};

pub struct TournamentMatchRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TournamentMatchRepository<'a, C> {
    /// Creates a new instance of [`TournamentMatchRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Insert the matches of a bracket in a single statement
    ///
    /// # Arguments
    /// - `bracket_id`: ID of the bracket owning the matches
    /// - `slots`: Match positions and any pre-assigned players
    ///
    /// # Returns
    /// - `u64`: Number of matches inserted, 0 without touching the database when `slots` is empty
    pub async fn create_many(&self, bracket_id: i32, slots: &[MatchSlot]) -> Result<u64, DbErr> {
        if slots.is_empty() {
            return Ok(0);
        }

        let now = Utc::now().naive_utc();
        let matches = slots.iter().map(|slot| entity::tournament_match::ActiveModel {
            bracket_id: ActiveValue::Set(bracket_id),
            round_number: ActiveValue::Set(slot.round_number),
            match_number: ActiveValue::Set(slot.match_number),
            player_one_id: ActiveValue::Set(slot.player_one_id),
            player_two_id: ActiveValue::Set(slot.player_two_id),
            winner_id: ActiveValue::Set(None),
            status: ActiveValue::Set(MatchStatus::Scheduled),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        });

        entity::prelude::TournamentMatch::insert_many(matches)
            .exec_without_returning(self.db)
            .await
    }

    /// Get a match by ID
    pub async fn get_by_id(
        &self,
        match_id: i32,
    ) -> Result<Option<entity::tournament_match::Model>, DbErr> {
        entity::prelude::TournamentMatch::find_by_id(match_id)
            .one(self.db)
            .await
    }

    /// Get the matches of the provided brackets ordered by bracket, round, then match number
    pub async fn get_by_bracket_ids(
        &self,
        bracket_ids: &[i32],
    ) -> Result<Vec<entity::tournament_match::Model>, DbErr> {
        if bracket_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::TournamentMatch::find()
            .filter(entity::tournament_match::Column::BracketId.is_in(bracket_ids.iter().copied()))
            .order_by_asc(entity::tournament_match::Column::BracketId)
            .order_by_asc(entity::tournament_match::Column::RoundNumber)
            .order_by_asc(entity::tournament_match::Column::MatchNumber)
            .all(self.db)
            .await
    }

    /// Find the match at a round and match number within a bracket
    pub async fn find_by_position(
        &self,
        bracket_id: i32,
        round_number: i32,
        match_number: i32,
    ) -> Result<Option<entity::tournament_match::Model>, DbErr> {
        entity::prelude::TournamentMatch::find()
            .filter(entity::tournament_match::Column::BracketId.eq(bracket_id))
            .filter(entity::tournament_match::Column::RoundNumber.eq(round_number))
            .filter(entity::tournament_match::Column::MatchNumber.eq(match_number))
            .one(self.db)
            .await
    }

    /// Record the winner of a match and mark it completed
    pub async fn record_winner(
        &self,
        match_model: entity::tournament_match::Model,
        winner_id: i32,
    ) -> Result<entity::tournament_match::Model, DbErr> {
        let mut tournament_match = match_model.into_active_model();
        tournament_match.winner_id = ActiveValue::Set(Some(winner_id));
        tournament_match.status = ActiveValue::Set(MatchStatus::Completed);
        tournament_match.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        tournament_match.update(self.db).await
    }

    /// Write a player into one slot of a match
    pub async fn assign_slot(
        &self,
        match_model: entity::tournament_match::Model,
        slot: Slot,
        player_id: i32,
    ) -> Result<entity::tournament_match::Model, DbErr> {
        let mut tournament_match = match_model.into_active_model();
        match slot {
            Slot::PlayerOne => tournament_match.player_one_id = ActiveValue::Set(Some(player_id)),
            Slot::PlayerTwo => tournament_match.player_two_id = ActiveValue::Set(Some(player_id)),
        }
        tournament_match.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        tournament_match.update(self.db).await
    }
}
