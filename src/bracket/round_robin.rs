//! Round-robin scheduling using the circle method.

use super::MatchSlot;

/// Produces a full round-robin schedule.
///
/// When the participant count is odd a bye slot is added so the total `T` is even. Each of the
/// `T - 1` rounds pairs slot `i` with slot `T - 1 - i`; a pairing with the bye slot produces no
/// match, which is how the opponent sits out that round. After each round slot 0 stays fixed and
/// the remaining slots rotate by one, moving the last slot to the front.
///
/// Match numbers start at 1 in every round and only count materialized pairings.
///
/// # Arguments
/// - `player_ids` - Participants in seeding order
///
/// # Returns
/// - `Vec<MatchSlot>` - `N * (N - 1) / 2` matches with both slots filled, ordered by round then
///   match number
pub fn round_robin_schedule(player_ids: &[i32]) -> Vec<MatchSlot> {
    let mut slots: Vec<Option<i32>> = player_ids.iter().copied().map(Some).collect();
    if slots.len() % 2 != 0 {
        slots.push(None);
    }

    let total = slots.len();
    let mut matches = Vec::new();

    for round in 1..total {
        let mut match_number = 1;

        for i in 0..total / 2 {
            if let (Some(player_one), Some(player_two)) = (slots[i], slots[total - 1 - i]) {
                matches.push(MatchSlot {
                    round_number: round as i32,
                    match_number,
                    player_one_id: Some(player_one),
                    player_two_id: Some(player_two),
                });

                match_number += 1;
            }
        }

        slots[1..].rotate_right(1);
    }

    matches
}
