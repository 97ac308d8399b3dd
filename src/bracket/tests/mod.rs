use chrono::Utc;
use entity::sea_orm_active_enums::MatchStatus;

use super::{MatchSlot, Participant};


fn participant(id: i32, club: &str) -> Participant {
    Participant {
        id,
        club: club.to_string(),
    }
}

fn round_count(slots: &[MatchSlot], round_number: i32) -> usize {
    slots
        .iter()
        .filter(|slot| slot.round_number == round_number)
        .count()
}

fn placed_ids(slots: &[MatchSlot]) -> Vec<i32> {
    let mut ids: Vec<i32> = slots
        .iter()
        .flat_map(|slot| [slot.player_one_id, slot.player_two_id])
        .flatten()
        .collect();
    ids.sort_unstable();

    ids
}

fn match_model(
    id: i32,
    round_number: i32,
    match_number: i32,
    player_one_id: Option<i32>,
    player_two_id: Option<i32>,
    winner_id: Option<i32>,
) -> entity::tournament_match::Model {
    let now = Utc::now().naive_utc();
    entity::tournament_match::Model {
        id,
        bracket_id: 1,
        round_number,
        match_number,
        player_one_id,
        player_two_id,
        winner_id,
        status: if winner_id.is_some() {
            MatchStatus::Completed
        } else {
            MatchStatus::Scheduled
        },
        created_at: now,
        updated_at: now,
    }
}
