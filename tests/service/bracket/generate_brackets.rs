//! Tests for BracketService::generate_brackets method.
//!
//! This module verifies cohort grouping, format selection, match creation, destructive
//! regeneration, and the failure cases that must leave stored brackets untouched.

use std::collections::HashSet;

use entity::sea_orm_active_enums::{BracketFormat, MatchStatus};
use rand::{rngs::StdRng, SeedableRng};
use sea_orm::{EntityTrait, PaginatorTrait};
use tatami::{
    error::{BracketError, Error, ErrorKind},
    service::bracket::BracketService,
};
use tatami_test_utils::fixtures::tournament::data::mock_birthday;

use super::*;

/// Tests generating a round-robin bracket.
///
/// Verifies that a cohort of four produces a single round-robin bracket with every pairing.
///
/// Expected: Ok with 1 bracket of 3 rounds and 6 scheduled matches
#[tokio::test]
async fn generates_round_robin_for_small_cohort() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_bracket_tables()
        .with_mock_tournament(TournamentStatus::Open)
        .build()
        .await?;
    let categories = insert_categories(&test).await?;
    test.tournament()
        .insert_mock_cohort(1, "male", categories.age, categories.male_light, 4)
        .await?;

    let service = BracketService::new(&test.db);
    let result = service.generate_brackets(1).await;

    assert!(result.is_ok(), "Error: {:?}", result);
    let summary = result.unwrap();
    assert_eq!(summary.brackets_created, 1);
    assert_eq!(summary.matches_created, 6);

    let brackets = entity::prelude::Bracket::find().all(&test.db).await?;
    assert_eq!(brackets.len(), 1);
    assert_eq!(brackets[0].format, BracketFormat::RoundRobin);
    assert_eq!(brackets[0].rounds, 3);

    let matches = entity::prelude::TournamentMatch::find().all(&test.db).await?;
    assert!(matches.iter().all(|m| m.status == MatchStatus::Scheduled));
    assert!(matches
        .iter()
        .all(|m| m.player_one_id.is_some() && m.player_two_id.is_some()));

    Ok(())
}

/// Tests generating a single-elimination bracket.
///
/// Verifies that a cohort of six gets a bracket of eight: four first-round matches holding all
/// six players, then two semifinals and a final created empty.
///
/// Expected: Ok with 1 bracket of 3 rounds and 7 matches
#[tokio::test]
async fn generates_single_elimination_for_large_cohort() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_bracket_tables()
        .with_mock_tournament(TournamentStatus::Open)
        .build()
        .await?;
    let categories = insert_categories(&test).await?;
    let players = test
        .tournament()
        .insert_mock_cohort(1, "male", categories.age, categories.male_light, 6)
        .await?;

    let service = BracketService::new(&test.db);
    let mut rng = StdRng::seed_from_u64(2026);
    let summary = service
        .generate_brackets_with_rng(1, &mut rng)
        .await
        .unwrap();

    assert_eq!(summary.brackets_created, 1);
    assert_eq!(summary.matches_created, 7);

    let bracket = entity::prelude::Bracket::find()
        .one(&test.db)
        .await?
        .expect("bracket should exist");
    assert_eq!(bracket.format, BracketFormat::SingleElimination);
    assert_eq!(bracket.rounds, 3);

    let matches = entity::prelude::TournamentMatch::find().all(&test.db).await?;
    let first_round: Vec<_> = matches.iter().filter(|m| m.round_number == 1).collect();
    assert_eq!(first_round.len(), 4);

    let placed: HashSet<i32> = first_round
        .iter()
        .flat_map(|m| [m.player_one_id, m.player_two_id])
        .flatten()
        .collect();
    let expected: HashSet<i32> = players.iter().map(|p| p.id).collect();
    assert_eq!(placed, expected);

    assert!(matches
        .iter()
        .filter(|m| m.round_number > 1)
        .all(|m| m.player_one_id.is_none() && m.player_two_id.is_none()));

    Ok(())
}

/// Tests generating brackets for several cohorts.
///
/// Verifies that cohorts are split by gender and weight category and that a cohort with a
/// single participant gets no bracket.
///
/// Expected: Ok with 2 brackets (3 male light, 2 female) and 4 matches
#[tokio::test]
async fn skips_cohorts_with_single_participant() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_bracket_tables()
        .with_mock_tournament(TournamentStatus::Open)
        .build()
        .await?;
    let categories = insert_categories(&test).await?;
    test.tournament()
        .insert_mock_cohort(1, "male", categories.age, categories.male_light, 3)
        .await?;
    test.tournament()
        .insert_mock_cohort(1, "male", categories.age, categories.male_heavy, 1)
        .await?;
    test.tournament()
        .insert_mock_cohort(1, "female", categories.age, categories.female, 2)
        .await?;

    let service = BracketService::new(&test.db);
    let summary = service.generate_brackets(1).await.unwrap();

    assert_eq!(summary.brackets_created, 2);
    assert_eq!(summary.matches_created, 3 + 1);

    let weight_categories: HashSet<i32> = entity::prelude::Bracket::find()
        .all(&test.db)
        .await?
        .into_iter()
        .map(|b| b.weight_category_id)
        .collect();
    assert_eq!(
        weight_categories,
        HashSet::from([categories.male_light, categories.female])
    );

    Ok(())
}

/// Tests generating without eligible registrations.
///
/// Verifies that registrations without a weight category do not count, and that existing
/// brackets are kept when generation is rejected.
///
/// Expected: Err(NoEligibleRegistrations) classified as Input, existing bracket still present
#[tokio::test]
async fn rejects_tournament_without_eligible_registrations() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_bracket_tables()
        .with_mock_tournament(TournamentStatus::Open)
        .build()
        .await?;
    let categories = insert_categories(&test).await?;
    let player = test
        .tournament()
        .insert_mock_player("Unweighed", "male", None, mock_birthday())
        .await?;
    test.tournament()
        .insert_mock_registration(1, player.id, categories.age, None, None)
        .await?;
    test.tournament()
        .insert_mock_bracket(
            1,
            "male",
            categories.age,
            categories.male_light,
            BracketFormat::RoundRobin,
            1,
        )
        .await?;

    let service = BracketService::new(&test.db);
    let result = service.generate_brackets(1).await;

    assert!(matches!(
        result,
        Err(Error::BracketError(BracketError::NoEligibleRegistrations { tournament_id: 1 }))
    ));
    assert_eq!(result.unwrap_err().kind(), ErrorKind::Input);

    let brackets = entity::prelude::Bracket::find().count(&test.db).await?;
    assert_eq!(brackets, 1);

    Ok(())
}

/// Tests regenerating brackets.
///
/// Verifies that a second generation run replaces every bracket and match from the first.
///
/// Expected: Ok, same counts as the first run, none of the first run's brackets remain
#[tokio::test]
async fn regeneration_replaces_previous_brackets() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_bracket_tables()
        .with_mock_tournament(TournamentStatus::Open)
        .build()
        .await?;
    let categories = insert_categories(&test).await?;
    test.tournament()
        .insert_mock_cohort(1, "male", categories.age, categories.male_light, 7)
        .await?;

    let service = BracketService::new(&test.db);
    service.generate_brackets(1).await.unwrap();
    let first_ids: HashSet<i32> = entity::prelude::Bracket::find()
        .all(&test.db)
        .await?
        .into_iter()
        .map(|b| b.id)
        .collect();

    let summary = service.generate_brackets(1).await.unwrap();

    assert_eq!(summary.brackets_created, 1);
    assert_eq!(summary.matches_created, 7);

    let brackets = entity::prelude::Bracket::find().all(&test.db).await?;
    assert_eq!(brackets.len(), 1);
    assert!(!first_ids.contains(&brackets[0].id));

    let matches = entity::prelude::TournamentMatch::find().count(&test.db).await?;
    assert_eq!(matches, 7);

    Ok(())
}

/// Tests generation with a seeded generator.
///
/// Verifies that two databases with identical data and the same seed produce identical
/// first-round pairings.
///
/// Expected: Identical (round, match, player one, player two) lists
#[tokio::test]
async fn seeded_generation_is_reproducible() -> Result<(), TestError> {
    let mut pairings = Vec::new();

    for _ in 0..2 {
        let test = TestBuilder::new()
            .with_bracket_tables()
            .with_mock_tournament(TournamentStatus::Open)
            .build()
            .await?;
        let categories = insert_categories(&test).await?;
        test.tournament()
            .insert_mock_cohort(1, "male", categories.age, categories.male_light, 11)
            .await?;

        let service = BracketService::new(&test.db);
        let mut rng = StdRng::seed_from_u64(99);
        service
            .generate_brackets_with_rng(1, &mut rng)
            .await
            .unwrap();

        let matches: Vec<(i32, i32, Option<i32>, Option<i32>)> =
            entity::prelude::TournamentMatch::find()
                .all(&test.db)
                .await?
                .into_iter()
                .map(|m| {
                    (
                        m.round_number,
                        m.match_number,
                        m.player_one_id,
                        m.player_two_id,
                    )
                })
                .collect();
        pairings.push(matches);
    }

    assert_eq!(pairings[0], pairings[1]);

    Ok(())
}

/// Tests generating for a tournament that does not exist.
///
/// Expected: Err(TournamentNotFound) classified as NotFound
#[tokio::test]
async fn rejects_unknown_tournament() -> Result<(), TestError> {
    let test = TestBuilder::new().with_bracket_tables().build().await?;

    let service = BracketService::new(&test.db);
    let result = service.generate_brackets(7).await;

    assert!(matches!(
        result,
        Err(Error::BracketError(BracketError::TournamentNotFound(7)))
    ));
    assert_eq!(result.unwrap_err().kind(), ErrorKind::NotFound);

    Ok(())
}
