use dioxus_logger::tracing;
use entity::sea_orm_active_enums::TournamentStatus;
use sea_orm::TransactionTrait;

use crate::{
    bracket::advance::{is_participant, next_position},
    data::{
        bracket::BracketRepository, tournament::TournamentRepository,
        tournament_match::TournamentMatchRepository,
    },
    error::{BracketError, Error},
    service::bracket::BracketService,
};

impl<'a> BracketService<'a> {
    /// Records the winner of a match and advances them into the next round.
    ///
    /// Round-robin matches and elimination finals are terminal. For any other elimination match
    /// the winner is written into the next-round match fed by this one. Recording the same winner
    /// again is a no-op rewrite; recording a different winner replaces the propagated player as
    /// long as the next-round match has no result yet.
    ///
    /// # Arguments
    /// - `tournament_id` - Tournament the match is expected to belong to
    /// - `match_id` - ID of the decided match
    /// - `winner_id` - Player ID of the winner, must occupy one of the match's slots
    ///
    /// # Returns
    /// - `Ok(Model)` - The updated match
    /// - `Err(BracketError::MatchNotFound)` - Match does not exist or belongs to another tournament
    /// - `Err(BracketError::TournamentNotFound)` - Tournament does not exist
    /// - `Err(BracketError::TournamentCompleted)` - Tournament is completed
    /// - `Err(BracketError::WinnerNotInMatch)` - Winner is not a participant of the match
    /// - `Err(BracketError::DownstreamMatchDecided)` - Winner would change after the next-round
    ///   match already has a result
    /// - `Err(Error::DbErr)` - Database operation failed, nothing was changed
    pub async fn advance_match(
        &self,
        tournament_id: i32,
        match_id: i32,
        winner_id: i32,
    ) -> Result<entity::tournament_match::Model, Error> {
        let txn = self.db.begin().await?;

        let tournament_repo = TournamentRepository::new(&txn);
        let bracket_repo = BracketRepository::new(&txn);
        let match_repo = TournamentMatchRepository::new(&txn);

        let match_not_found = || BracketError::MatchNotFound {
            tournament_id,
            match_id,
        };

        let tournament_match = match_repo
            .get_by_id(match_id)
            .await?
            .ok_or_else(match_not_found)?;

        let bracket = bracket_repo
            .get_by_id(tournament_match.bracket_id)
            .await?
            .filter(|bracket| bracket.tournament_id == tournament_id)
            .ok_or_else(match_not_found)?;

        let tournament = tournament_repo
            .get_by_id(tournament_id)
            .await?
            .ok_or(BracketError::TournamentNotFound(tournament_id))?;

        if tournament.status == TournamentStatus::Completed {
            return Err(BracketError::TournamentCompleted { tournament_id }.into());
        }

        if !is_participant(
            tournament_match.player_one_id,
            tournament_match.player_two_id,
            winner_id,
        ) {
            return Err(BracketError::WinnerNotInMatch {
                match_id,
                winner_id,
            }
            .into());
        }

        let next = match next_position(
            bracket.format,
            bracket.rounds,
            tournament_match.round_number,
            tournament_match.match_number,
        ) {
            Some(position) => match_repo
                .find_by_position(bracket.id, position.round_number, position.match_number)
                .await?
                .map(|next_match| (position, next_match)),
            None => None,
        };

        // A changed result may only move downstream while the next match is undecided
        if let (Some(previous), Some((_, next_match))) = (tournament_match.winner_id, &next) {
            if previous != winner_id && next_match.winner_id.is_some() {
                return Err(BracketError::DownstreamMatchDecided {
                    match_id,
                    next_match_id: next_match.id,
                }
                .into());
            }
        }

        let updated = match_repo.record_winner(tournament_match, winner_id).await?;

        let propagated = match next {
            Some((position, next_match)) => {
                let next_match_id = next_match.id;
                match_repo
                    .assign_slot(next_match, position.slot, winner_id)
                    .await?;

                Some((next_match_id, position.slot))
            }
            None => None,
        };

        txn.commit().await?;

        match propagated {
            Some((next_match_id, slot)) => tracing::info!(
                tournament_id,
                match_id,
                winner_id,
                next_match_id,
                slot = ?slot,
                "Recorded match winner and advanced to next round"
            ),
            None => tracing::info!(tournament_id, match_id, winner_id, "Recorded match winner"),
        }

        Ok(updated)
    }
}
