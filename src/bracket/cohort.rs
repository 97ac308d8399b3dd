//! Cohort grouping.
//!
//! Partitions eligible registrations into disjoint cohorts keyed by gender, age category, and
//! weight category. Each cohort becomes exactly one bracket.

use std::collections::BTreeMap;

use super::Participant;

/// Cohorts smaller than this never get a bracket.
pub const MIN_COHORT_SIZE: usize = 2;

/// Registration data needed for grouping, flattened from a registration and its player.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Registrant {
    pub player_id: i32,
    pub gender: String,
    pub club: String,
    pub age_category_id: i32,
    /// Registrations without a weight category are not eligible for any bracket
    pub weight_category_id: Option<i32>,
}

/// Key partitioning participants into cohorts.
///
/// Ordering follows (gender, age category, weight category), which is also the order brackets
/// are reported in.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CohortKey {
    pub gender: String,
    pub age_category_id: i32,
    pub weight_category_id: i32,
}

/// Participants sharing a gender, age category, and weight category.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cohort {
    pub key: CohortKey,
    pub participants: Vec<Participant>,
}

/// Groups registrants into cohorts.
///
/// Registrants without a weight category are dropped. Cohorts with fewer than
/// [`MIN_COHORT_SIZE`] participants are skipped entirely; this is a floor, not an error.
/// Participants keep their registration order within a cohort and cohorts are returned in
/// [`CohortKey`] order.
///
/// # Arguments
/// - `registrants` - All registrations for a single tournament
///
/// # Returns
/// - `Vec<Cohort>` - Disjoint cohorts, every key unique, every participant in at most one cohort
pub fn group_cohorts(registrants: impl IntoIterator<Item = Registrant>) -> Vec<Cohort> {
    let mut grouped: BTreeMap<CohortKey, Vec<Participant>> = BTreeMap::new();

    for registrant in registrants {
        let Some(weight_category_id) = registrant.weight_category_id else {
            continue;
        };

        let key = CohortKey {
            gender: registrant.gender,
            age_category_id: registrant.age_category_id,
            weight_category_id,
        };

        grouped.entry(key).or_default().push(Participant {
            id: registrant.player_id,
            club: registrant.club,
        });
    }

    grouped
        .into_iter()
        .filter(|(_, participants)| participants.len() >= MIN_COHORT_SIZE)
        .map(|(key, participants)| Cohort { key, participants })
        .collect()
}
