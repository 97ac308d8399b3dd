//! Placement resolution for completed brackets.

use entity::sea_orm_active_enums::BracketFormat;

use super::advance::loser_of;

/// Gold, silver, and bronze placements derived from a bracket's match tree.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Placements {
    pub gold: Option<i32>,
    pub silver: Option<i32>,
    /// Semifinal losers, deduplicated, in match order
    pub bronze: Vec<i32>,
}

/// Derives placements from a bracket's matches.
///
/// For single elimination gold is the winner of the final, silver is the other finalist, and
/// bronze holds the losers of the semifinal round. Placements fill in as results are recorded;
/// an undecided final leaves gold and silver empty. Round-robin brackets never produce
/// placements.
///
/// # Arguments
/// - `format` - Bracket format
/// - `rounds` - Total rounds in the bracket
/// - `matches` - Every match of the bracket, in any order
pub fn resolve_placements(
    format: BracketFormat,
    rounds: i32,
    matches: &[entity::tournament_match::Model],
) -> Placements {
    if format != BracketFormat::SingleElimination {
        return Placements::default();
    }

    let mut ordered: Vec<&entity::tournament_match::Model> = matches.iter().collect();
    ordered.sort_by_key(|m| (m.round_number, m.match_number));

    let final_match = ordered.iter().find(|m| m.round_number == rounds);
    let gold = final_match.and_then(|m| m.winner_id);
    let silver = final_match.and_then(|m| loser_of(m));

    let mut bronze = Vec::new();
    let semifinal_round = rounds - 1;
    if semifinal_round >= 1 {
        for semifinal in ordered.iter().filter(|m| m.round_number == semifinal_round) {
            if let Some(loser) = loser_of(semifinal) {
                if !bronze.contains(&loser) {
                    bronze.push(loser);
                }
            }
        }
    }

    Placements {
        gold,
        silver,
        bronze,
    }
}

/// Number of distinct players appearing in any slot of the bracket's matches.
pub fn entrant_count(matches: &[entity::tournament_match::Model]) -> usize {
    let mut entrants: Vec<i32> = matches
        .iter()
        .flat_map(|m| [m.player_one_id, m.player_two_id])
        .flatten()
        .collect();
    entrants.sort_unstable();
    entrants.dedup();

    entrants.len()
}
