//! Bracket format selection and round counts.

use entity::sea_orm_active_enums::BracketFormat;

/// Largest cohort still played as a round-robin; the boundary is inclusive.
pub const ROUND_ROBIN_MAX_PARTICIPANTS: usize = 5;

/// Format and round count chosen for a cohort.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FormatPlan {
    pub format: BracketFormat,
    pub rounds: i32,
}

/// Chooses round-robin for small cohorts and single elimination for larger ones.
///
/// # Arguments
/// - `participant_count` - Number of participants in the cohort
///
/// # Returns
/// - Round-robin with [`round_robin_rounds`] rounds when `participant_count <= 5`
/// - Single elimination with [`single_elimination_rounds`] rounds otherwise
pub fn select_format(participant_count: usize) -> FormatPlan {
    if participant_count <= ROUND_ROBIN_MAX_PARTICIPANTS {
        FormatPlan {
            format: BracketFormat::RoundRobin,
            rounds: round_robin_rounds(participant_count),
        }
    } else {
        FormatPlan {
            format: BracketFormat::SingleElimination,
            rounds: single_elimination_rounds(participant_count),
        }
    }
}

/// Smallest power of two greater than or equal to `participant_count`.
pub fn bracket_size(participant_count: usize) -> usize {
    participant_count.max(1).next_power_of_two()
}

/// Round count for a round-robin: `N - 1` when even, `N` when odd since every participant
/// sits out one round.
pub fn round_robin_rounds(participant_count: usize) -> i32 {
    let count = participant_count as i32;
    if count % 2 == 0 {
        (count - 1).max(0)
    } else {
        count
    }
}

/// Round count for single elimination: `log2` of the bracket size.
pub fn single_elimination_rounds(participant_count: usize) -> i32 {
    bracket_size(participant_count).trailing_zeros() as i32
}
