//! Per-cohort bracket plans.

use entity::sea_orm_active_enums::BracketFormat;
use rand::Rng;

use super::{
    cohort::{Cohort, CohortKey},
    format::select_format,
    round_robin::round_robin_schedule,
    seeding::seed_single_elimination,
    MatchSlot,
};

/// Everything needed to persist one bracket and its matches.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BracketPlan {
    pub key: CohortKey,
    pub format: BracketFormat,
    pub rounds: i32,
    pub matches: Vec<MatchSlot>,
}

/// Selects a format for the cohort and materializes its matches.
///
/// # Arguments
/// - `cohort` - Cohort with at least two participants
/// - `rng` - Randomness source, only drawn from for single-elimination seeding
pub fn plan_bracket<R: Rng + ?Sized>(cohort: Cohort, rng: &mut R) -> BracketPlan {
    let plan = select_format(cohort.participants.len());

    let matches = match plan.format {
        BracketFormat::RoundRobin => {
            let player_ids: Vec<i32> = cohort.participants.iter().map(|p| p.id).collect();
            round_robin_schedule(&player_ids)
        }
        BracketFormat::SingleElimination => seed_single_elimination(&cohort.participants, rng),
    };

    BracketPlan {
        key: cohort.key,
        format: plan.format,
        rounds: plan.rounds,
        matches,
    }
}
