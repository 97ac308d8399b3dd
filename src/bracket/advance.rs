//! Winner propagation rules.
//!
//! Round-robin matches are terminal. In single elimination the winner of match `m` in round
//! `r` moves to match `ceil(m / 2)` of round `r + 1`, taking the first slot when `m` is odd and
//! the second slot when `m` is even.

use entity::sea_orm_active_enums::BracketFormat;

/// Player slot of a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Slot {
    PlayerOne,
    PlayerTwo,
}

/// Where a winner advances to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NextPosition {
    pub round_number: i32,
    pub match_number: i32,
    pub slot: Slot,
}

/// Computes where the winner of a match advances to.
///
/// # Arguments
/// - `format` - Format of the bracket the match belongs to
/// - `rounds` - Total rounds in the bracket
/// - `round_number` - Round of the decided match
/// - `match_number` - Position of the decided match within its round
///
/// # Returns
/// - `Some(NextPosition)` - Next-round match and slot the winner is written to
/// - `None` - Round-robin match, or the decided match is already in the final round
pub fn next_position(
    format: BracketFormat,
    rounds: i32,
    round_number: i32,
    match_number: i32,
) -> Option<NextPosition> {
    if format != BracketFormat::SingleElimination {
        return None;
    }

    let next_round = round_number + 1;
    if next_round > rounds {
        return None;
    }

    let slot = if match_number % 2 == 1 {
        Slot::PlayerOne
    } else {
        Slot::PlayerTwo
    };

    Some(NextPosition {
        round_number: next_round,
        match_number: (match_number + 1) / 2,
        slot,
    })
}

/// Whether `player_id` occupies one of the match's filled slots.
pub fn is_participant(
    player_one_id: Option<i32>,
    player_two_id: Option<i32>,
    player_id: i32,
) -> bool {
    player_one_id == Some(player_id) || player_two_id == Some(player_id)
}

/// The participant of a decided match who is not the winner.
///
/// Returns `None` while the match is undecided, or when the winner had no opponent.
pub fn loser_of(match_model: &entity::tournament_match::Model) -> Option<i32> {
    let winner_id = match_model.winner_id?;

    if Some(winner_id) == match_model.player_one_id {
        match_model.player_two_id
    } else {
        match_model.player_one_id
    }
}
