//! Tests for BracketService::advance_match method.
//!
//! This module verifies winner recording, propagation into the next elimination round,
//! terminal round-robin and final matches, re-advancement rules, and rejected requests.

use entity::sea_orm_active_enums::MatchStatus;
use sea_orm::EntityTrait;
use tatami::{
    error::{BracketError, Error, ErrorKind},
    service::bracket::BracketService,
};

use super::*;

async fn reload(test: &TestContext, match_id: i32) -> Result<MatchModel, TestError> {
    Ok(entity::prelude::TournamentMatch::find_by_id(match_id)
        .one(&test.db)
        .await?
        .expect("match should exist"))
}

/// Slots, winner, and status of a match, ignoring timestamps.
fn state(m: &MatchModel) -> (Option<i32>, Option<i32>, Option<i32>, MatchStatus) {
    (m.player_one_id, m.player_two_id, m.winner_id, m.status)
}

/// Tests advancing both first-round winners into the final.
///
/// Verifies that the winner of an odd match takes the final's first slot and the winner of an
/// even match takes the second slot.
///
/// Expected: Ok, final holds both winners in slot order
#[tokio::test]
async fn propagates_winners_into_final() -> Result<(), TestError> {
    let (test, players, [first, second, final_match]) =
        elimination_of_four(TournamentStatus::Ongoing).await?;

    let service = BracketService::new(&test.db);
    let result = service.advance_match(1, first.id, players[1]).await;

    assert!(result.is_ok(), "Error: {:?}", result);
    let decided = result.unwrap();
    assert_eq!(decided.winner_id, Some(players[1]));
    assert_eq!(decided.status, MatchStatus::Completed);

    let after_first = reload(&test, final_match.id).await?;
    assert_eq!(after_first.player_one_id, Some(players[1]));
    assert_eq!(after_first.player_two_id, None);

    service
        .advance_match(1, second.id, players[2])
        .await
        .unwrap();

    let after_second = reload(&test, final_match.id).await?;
    assert_eq!(after_second.player_one_id, Some(players[1]));
    assert_eq!(after_second.player_two_id, Some(players[2]));

    Ok(())
}

/// Tests recording the winner of the final.
///
/// Expected: Ok, final completed, no other match changed
#[tokio::test]
async fn final_match_does_not_propagate() -> Result<(), TestError> {
    let (test, players, [first, second, final_match]) =
        elimination_of_four(TournamentStatus::Ongoing).await?;

    let service = BracketService::new(&test.db);
    service.advance_match(1, first.id, players[0]).await.unwrap();
    service
        .advance_match(1, second.id, players[3])
        .await
        .unwrap();
    let decided = service
        .advance_match(1, final_match.id, players[3])
        .await
        .unwrap();

    assert_eq!(decided.winner_id, Some(players[3]));
    assert_eq!(decided.status, MatchStatus::Completed);

    let matches = entity::prelude::TournamentMatch::find().all(&test.db).await?;
    assert_eq!(matches.len(), 3);

    Ok(())
}

/// Tests recording a round-robin result.
///
/// Expected: Ok, match completed, other matches untouched
#[tokio::test]
async fn round_robin_match_is_terminal() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_bracket_tables()
        .with_mock_tournament(TournamentStatus::Ongoing)
        .build()
        .await?;
    let categories = insert_categories(&test).await?;
    let players = test
        .tournament()
        .insert_mock_cohort(1, "male", categories.age, categories.male_light, 3)
        .await?;
    let bracket = test
        .tournament()
        .insert_mock_bracket(
            1,
            "male",
            categories.age,
            categories.male_light,
            BracketFormat::RoundRobin,
            3,
        )
        .await?;
    let first = test
        .tournament()
        .insert_mock_match(bracket.id, 1, 1, Some(players[0].id), Some(players[1].id))
        .await?;
    let later = test
        .tournament()
        .insert_mock_match(bracket.id, 2, 1, Some(players[1].id), Some(players[2].id))
        .await?;

    let service = BracketService::new(&test.db);
    let decided = service
        .advance_match(1, first.id, players[0].id)
        .await
        .unwrap();

    assert_eq!(decided.status, MatchStatus::Completed);
    assert_eq!(state(&reload(&test, later.id).await?), state(&later));

    Ok(())
}

/// Tests recording a winner who is not in the match.
///
/// Expected: Err(WinnerNotInMatch) classified as Validation, match unchanged
#[tokio::test]
async fn rejects_winner_not_in_match() -> Result<(), TestError> {
    let (test, _, [first, _, final_match]) =
        elimination_of_four(TournamentStatus::Ongoing).await?;

    let service = BracketService::new(&test.db);
    let result = service.advance_match(1, first.id, 999).await;

    assert!(matches!(
        result,
        Err(Error::BracketError(BracketError::WinnerNotInMatch { winner_id: 999, .. }))
    ));
    assert_eq!(result.unwrap_err().kind(), ErrorKind::Validation);
    assert_eq!(state(&reload(&test, first.id).await?), state(&first));
    assert_eq!(state(&reload(&test, final_match.id).await?), state(&final_match));

    Ok(())
}

/// Tests recording a winner for an empty slot.
///
/// Verifies that an empty slot never matches a player, including for matches that have not
/// been filled yet.
///
/// Expected: Err(WinnerNotInMatch)
#[tokio::test]
async fn rejects_winner_for_unfilled_match() -> Result<(), TestError> {
    let (test, players, [_, _, final_match]) =
        elimination_of_four(TournamentStatus::Ongoing).await?;

    let service = BracketService::new(&test.db);
    let result = service
        .advance_match(1, final_match.id, players[0])
        .await;

    assert!(matches!(
        result,
        Err(Error::BracketError(BracketError::WinnerNotInMatch { .. }))
    ));

    Ok(())
}

/// Tests advancing a match of another tournament.
///
/// Expected: Err(MatchNotFound) classified as NotFound
#[tokio::test]
async fn rejects_match_from_other_tournament() -> Result<(), TestError> {
    let (test, players, [first, _, _]) = elimination_of_four(TournamentStatus::Ongoing).await?;
    test.tournament()
        .insert_mock_tournament(TournamentStatus::Ongoing)
        .await?;

    let service = BracketService::new(&test.db);
    let result = service.advance_match(2, first.id, players[0]).await;

    assert!(matches!(
        result,
        Err(Error::BracketError(BracketError::MatchNotFound {
            tournament_id: 2,
            ..
        }))
    ));
    assert_eq!(result.unwrap_err().kind(), ErrorKind::NotFound);

    Ok(())
}

/// Tests advancing a match that does not exist.
///
/// Expected: Err(MatchNotFound)
#[tokio::test]
async fn rejects_unknown_match() -> Result<(), TestError> {
    let (test, players, _) = elimination_of_four(TournamentStatus::Ongoing).await?;

    let service = BracketService::new(&test.db);
    let result = service.advance_match(1, 404, players[0]).await;

    assert!(matches!(
        result,
        Err(Error::BracketError(BracketError::MatchNotFound { match_id: 404, .. }))
    ));

    Ok(())
}

/// Tests advancing a match of a completed tournament.
///
/// Expected: Err(TournamentCompleted) classified as Integrity, match unchanged
#[tokio::test]
async fn rejects_completed_tournament() -> Result<(), TestError> {
    let (test, players, [first, _, _]) = elimination_of_four(TournamentStatus::Completed).await?;

    let service = BracketService::new(&test.db);
    let result = service.advance_match(1, first.id, players[0]).await;

    assert!(matches!(
        result,
        Err(Error::BracketError(BracketError::TournamentCompleted { tournament_id: 1 }))
    ));
    assert_eq!(result.unwrap_err().kind(), ErrorKind::Integrity);
    assert_eq!(state(&reload(&test, first.id).await?), state(&first));

    Ok(())
}

/// Tests changing a winner while the next match is undecided.
///
/// Expected: Ok, final's first slot replaced by the new winner
#[tokio::test]
async fn changed_winner_replaces_propagated_player() -> Result<(), TestError> {
    let (test, players, [first, _, final_match]) =
        elimination_of_four(TournamentStatus::Ongoing).await?;

    let service = BracketService::new(&test.db);
    service.advance_match(1, first.id, players[0]).await.unwrap();
    let corrected = service
        .advance_match(1, first.id, players[1])
        .await
        .unwrap();

    assert_eq!(corrected.winner_id, Some(players[1]));
    assert_eq!(
        reload(&test, final_match.id).await?.player_one_id,
        Some(players[1])
    );

    Ok(())
}

/// Tests changing a winner after the next match has a result.
///
/// Verifies that re-recording the same winner is still accepted.
///
/// Expected: Err(DownstreamMatchDecided) for a different winner, Ok for the same winner
#[tokio::test]
async fn rejects_changed_winner_after_next_match_decided() -> Result<(), TestError> {
    let (test, players, [first, second, final_match]) =
        elimination_of_four(TournamentStatus::Ongoing).await?;

    let service = BracketService::new(&test.db);
    service.advance_match(1, first.id, players[0]).await.unwrap();
    service
        .advance_match(1, second.id, players[2])
        .await
        .unwrap();
    service
        .advance_match(1, final_match.id, players[0])
        .await
        .unwrap();

    let result = service.advance_match(1, first.id, players[1]).await;

    assert!(matches!(
        result,
        Err(Error::BracketError(BracketError::DownstreamMatchDecided { next_match_id, .. }))
            if next_match_id == final_match.id
    ));
    assert_eq!(result.unwrap_err().kind(), ErrorKind::Integrity);
    assert_eq!(
        reload(&test, final_match.id).await?.player_one_id,
        Some(players[0])
    );

    let repeated = service.advance_match(1, first.id, players[0]).await;
    assert!(repeated.is_ok(), "Error: {:?}", repeated);

    Ok(())
}

/// Tests recording the other first-round match after the final was decided through a bye.
///
/// Verifies that a first result is accepted even when the next match already has a winner, so
/// the bracket can still be completed.
///
/// Expected: Ok, second match completed and its winner placed in the final's second slot
#[tokio::test]
async fn records_first_result_after_final_decided_through_bye() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_bracket_tables()
        .with_mock_tournament(TournamentStatus::Ongoing)
        .build()
        .await?;
    let categories = insert_categories(&test).await?;
    let players: Vec<i32> = test
        .tournament()
        .insert_mock_cohort(1, "male", categories.age, categories.male_light, 3)
        .await?
        .into_iter()
        .map(|player| player.id)
        .collect();
    let bracket = test
        .tournament()
        .insert_mock_bracket(
            1,
            "male",
            categories.age,
            categories.male_light,
            BracketFormat::SingleElimination,
            2,
        )
        .await?;
    let bye = test
        .tournament()
        .insert_mock_match(bracket.id, 1, 1, Some(players[0]), None)
        .await?;
    let second = test
        .tournament()
        .insert_mock_match(bracket.id, 1, 2, Some(players[1]), Some(players[2]))
        .await?;
    let final_match = test
        .tournament()
        .insert_mock_match(bracket.id, 2, 1, None, None)
        .await?;

    let service = BracketService::new(&test.db);
    service.advance_match(1, bye.id, players[0]).await.unwrap();
    service
        .advance_match(1, final_match.id, players[0])
        .await
        .unwrap();

    let result = service.advance_match(1, second.id, players[1]).await;

    assert!(result.is_ok(), "Error: {:?}", result);
    assert_eq!(
        state(&reload(&test, second.id).await?),
        (
            Some(players[1]),
            Some(players[2]),
            Some(players[1]),
            MatchStatus::Completed
        )
    );
    assert_eq!(
        state(&reload(&test, final_match.id).await?),
        (
            Some(players[0]),
            Some(players[1]),
            Some(players[0]),
            MatchStatus::Completed
        )
    );

    Ok(())
}
