//! Single-elimination seeding with club-diversity balancing.
//!
//! Participants are shuffled, split into two equal-capacity regions ("east" and "west") so
//! clubs are spread across both halves of the bracket, and then paired within each region
//! preferring opponents from a different club. Round one holds the resulting pairs, and every
//! later round is created empty and filled as winners advance.

use std::collections::{HashMap, VecDeque};

use rand::{seq::SliceRandom, Rng};

use super::{format::bracket_size, MatchSlot, Participant};

/// Half of an elimination bracket.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Region {
    East,
    West,
}

/// A first-round pairing; an empty slot is a bye, two empty slots are a placeholder.
pub type Pair = (Option<Participant>, Option<Participant>);

/// Shuffles participants and builds the full single-elimination match structure.
///
/// The shuffle uses the supplied generator, so a seeded generator yields a reproducible
/// bracket.
///
/// # Arguments
/// - `participants` - Cohort participants, at least two
/// - `rng` - Randomness source for the initial shuffle
///
/// # Returns
/// - `Vec<MatchSlot>` - Round one populated from the seeded pairs followed by every later
///   round empty, halving the match count each round down to the final
pub fn seed_single_elimination<R: Rng + ?Sized>(
    participants: &[Participant],
    rng: &mut R,
) -> Vec<MatchSlot> {
    let mut shuffled = participants.to_vec();
    shuffled.shuffle(rng);

    build_elimination_slots(shuffled)
}

/// Builds the single-elimination match structure from participants in their final order.
///
/// The bracket size `P` is the next power of two at or above the participant count. Round one
/// has `P / 2` matches: the east region's pairs followed by the west region's pairs. A bracket
/// of size two has no room for two regions, so its lone match pairs both participants directly.
pub fn build_elimination_slots(participants: Vec<Participant>) -> Vec<MatchSlot> {
    let size = bracket_size(participants.len());
    let first_round_matches = size / 2;

    let first_round_pairs: Vec<Pair> = if size <= 2 {
        let mut players = participants.into_iter();
        vec![(players.next(), players.next())]
    } else {
        let half_size = size / 2;
        let (east, west) = split_regions(participants, half_size);

        first_round_pairs(east, half_size)
            .into_iter()
            .chain(first_round_pairs(west, half_size))
            .collect()
    };

    let mut slots = Vec::with_capacity(size.saturating_sub(1));
    let mut pairs = first_round_pairs.into_iter();

    for match_number in 1..=first_round_matches {
        let (player_one, player_two) = pairs.next().unwrap_or((None, None));

        slots.push(MatchSlot {
            round_number: 1,
            match_number: match_number as i32,
            player_one_id: player_one.map(|p| p.id),
            player_two_id: player_two.map(|p| p.id),
        });
    }

    let mut round = 2;
    let mut matches_in_round = first_round_matches / 2;
    while matches_in_round >= 1 {
        for match_number in 1..=matches_in_round {
            slots.push(MatchSlot::empty(round, match_number as i32));
        }

        round += 1;
        matches_in_round /= 2;
    }

    slots
}

/// Splits participants into the east and west regions, each holding at most `half_size`.
///
/// Participants are ordered by descending club frequency, keeping their existing order among
/// equally frequent clubs, so the largest clubs are spread first. Each participant then goes
/// to the region chosen by [`pick_region`] over the regions as they stand at that step.
///
/// # Returns
/// - `(east, west)` - Region members in assignment order
pub fn split_regions(
    participants: Vec<Participant>,
    half_size: usize,
) -> (Vec<Participant>, Vec<Participant>) {
    let frequency = club_frequency(&participants);
    let frequency_of = |participant: &Participant| {
        frequency.get(participant.club.as_str()).copied().unwrap_or(0)
    };

    let mut ordered = participants;
    ordered.sort_by(|a, b| frequency_of(b).cmp(&frequency_of(a)));

    let mut east = Vec::with_capacity(half_size);
    let mut west = Vec::with_capacity(half_size);

    for participant in ordered {
        match pick_region(&east, &west, &participant, half_size) {
            Region::East => east.push(participant),
            Region::West => west.push(participant),
        }
    }

    (east, west)
}

/// Chooses the region for the next participant.
///
/// A full region is never chosen. Otherwise the region with fewer members wins; on a tie the
/// region with fewer members from the participant's club wins, and a remaining tie goes east.
pub fn pick_region(
    east: &[Participant],
    west: &[Participant],
    participant: &Participant,
    half_size: usize,
) -> Region {
    if east.len() >= half_size {
        return Region::West;
    }
    if west.len() >= half_size {
        return Region::East;
    }

    if east.len() < west.len() {
        Region::East
    } else if west.len() < east.len() {
        Region::West
    } else if club_count(east, &participant.club) <= club_count(west, &participant.club) {
        Region::East
    } else {
        Region::West
    }
}

/// Pairs one region's participants for round one.
///
/// The region's capacity shortfall (`capacity - members`) is consumed first as byes for the
/// participants at the front. Remaining participants are paired greedily: each takes the first
/// later participant from a different club, or the next participant when none differs. A
/// leftover participant gets a bye, and the list is padded with empty placeholders up to
/// `capacity / 2` pairs.
///
/// # Arguments
/// - `region` - Members of one region in assignment order
/// - `capacity` - Number of first-round slots in the region
pub fn first_round_pairs(region: Vec<Participant>, capacity: usize) -> Vec<Pair> {
    let pair_count = capacity / 2;
    let mut players: VecDeque<Participant> = region.into();
    let mut pairs: Vec<Pair> = Vec::with_capacity(pair_count);

    let byes = capacity.saturating_sub(players.len());
    for _ in 0..byes {
        match players.pop_front() {
            Some(player) => pairs.push((Some(player), None)),
            None => break,
        }
    }

    while players.len() >= 2 {
        let Some(first) = players.pop_front() else {
            break;
        };

        let second_index = players
            .iter()
            .position(|candidate| candidate.club != first.club)
            .unwrap_or(0);
        let second = players.remove(second_index);

        pairs.push((Some(first), second));
    }

    if let Some(last) = players.pop_front() {
        pairs.push((Some(last), None));
    }

    while pairs.len() < pair_count {
        pairs.push((None, None));
    }

    pairs
}

fn club_frequency(participants: &[Participant]) -> HashMap<String, usize> {
    let mut frequency = HashMap::new();
    for participant in participants {
        *frequency.entry(participant.club.clone()).or_insert(0) += 1;
    }

    frequency
}

fn club_count(region: &[Participant], club: &str) -> usize {
    region.iter().filter(|p| p.club == club).count()
}
