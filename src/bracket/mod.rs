//! Pure bracket engine.
//!
//! This module holds the algorithmic core of tournament generation: classifying players into
//! age and weight categories, grouping registrations into cohorts, choosing a bracket format,
//! scheduling round-robin pairings, seeding single-elimination brackets with club-diversity
//! balancing, computing winner propagation, and resolving placements. Nothing in here touches
//! the database; the service layer feeds it loaded records and persists what it returns.

pub mod advance;
pub mod classify;
pub mod cohort;
pub mod format;
pub mod placement;
pub mod plan;
pub mod round_robin;
pub mod seeding;

#[cfg(test)]
mod tests;

/// A competitor taking part in a single generation run.
///
/// Constructed per run from a registration and its player record; never persisted on its own.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Participant {
    /// Player record ID
    pub id: i32,
    /// Club name, empty when the player has no club on record
    pub club: String,
}

/// A match position produced by the round-robin scheduler or the elimination seeder.
///
/// Either player slot may be empty: elimination byes leave one slot empty in round one and
/// every later elimination round starts out with both slots empty.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MatchSlot {
    pub round_number: i32,
    pub match_number: i32,
    pub player_one_id: Option<i32>,
    pub player_two_id: Option<i32>,
}

impl MatchSlot {
    /// Creates a match slot with no participants assigned.
    pub fn empty(round_number: i32, match_number: i32) -> Self {
        Self {
            round_number,
            match_number,
            player_one_id: None,
            player_two_id: None,
        }
    }
}
