use serde::{Deserialize, Serialize};

/// Counts reported after a generation run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationSummary {
    pub tournament_id: i32,
    pub brackets_created: usize,
    pub matches_created: u64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerDto {
    pub id: i32,
    pub full_name: String,
    pub club: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchDto {
    pub id: i32,
    pub round_number: i32,
    pub match_number: i32,
    pub player_one: Option<PlayerDto>,
    pub player_two: Option<PlayerDto>,
    pub winner_id: Option<i32>,
    /// "scheduled" or "completed"
    pub status: String,
}

/// Placements derived from the match tree, empty for round-robin brackets.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AwardsDto {
    pub gold: Option<PlayerDto>,
    pub silver: Option<PlayerDto>,
    pub bronze: Vec<PlayerDto>,
}

/// A bracket with its matches and derived results.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BracketDto {
    pub id: i32,
    pub gender: String,
    pub age_category: String,
    pub weight_category: String,
    /// "round_robin" or "single_elimination"
    pub format: String,
    pub rounds: i32,
    pub entrant_count: usize,
    pub champion: Option<PlayerDto>,
    pub awards: AwardsDto,
    /// Ordered by round then match number
    pub matches: Vec<MatchDto>,
}

/// Number of eligible registrants in one cohort.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryParticipantsDto {
    pub gender: String,
    pub age_category: String,
    pub weight_category: String,
    pub participants: usize,
}

impl From<&entity::player::Model> for PlayerDto {
    fn from(player: &entity::player::Model) -> Self {
        Self {
            id: player.id,
            full_name: player.full_name.clone(),
            club: player.club.clone(),
        }
    }
}
