//! Tests for BracketService::get_category_participants method.

use tatami::service::bracket::BracketService;
use tatami_test_utils::fixtures::tournament::data::mock_birthday;

use super::*;

/// Tests counting registrants per cohort.
///
/// Verifies that cohorts too small for a bracket are still counted, registrations without a
/// weight category are not, and the result is ordered by gender then category.
///
/// Expected: Ok with female Open 2, male -35kg 3, male +35kg 1
#[tokio::test]
async fn counts_eligible_registrants_per_cohort() -> Result<(), TestError> {
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
    let unweighed = test
        .tournament()
        .insert_mock_player("Unweighed", "male", None, mock_birthday())
        .await?;
    test.tournament()
        .insert_mock_registration(1, unweighed.id, categories.age, None, None)
        .await?;

    let service = BracketService::new(&test.db);
    let result = service.get_category_participants(1).await;

    assert!(result.is_ok(), "Error: {:?}", result);
    let counts: Vec<(String, String, String, usize)> = result
        .unwrap()
        .into_iter()
        .map(|c| (c.gender, c.age_category, c.weight_category, c.participants))
        .collect();

    assert_eq!(
        counts,
        vec![
            ("female".into(), "Cadet".into(), "Open".into(), 2),
            ("male".into(), "Cadet".into(), "-35kg".into(), 3),
            ("male".into(), "Cadet".into(), "+35kg".into(), 1),
        ]
    );

    Ok(())
}

/// Tests counting registrants in categories that share a name.
///
/// Verifies that cohorts are reported per category name, so a duplicated weight class is shown
/// as one row holding both cohorts.
///
/// Expected: Ok with a single male Cadet -35kg row counting 3
#[tokio::test]
async fn merges_categories_sharing_a_name() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_bracket_tables()
        .with_mock_tournament(TournamentStatus::Open)
        .build()
        .await?;
    let categories = insert_categories(&test).await?;
    let duplicate = test
        .tournament()
        .insert_mock_weight_category("-35kg", "male", categories.age, 0.0, 35.0)
        .await?;
    test.tournament()
        .insert_mock_cohort(1, "male", categories.age, categories.male_light, 2)
        .await?;
    test.tournament()
        .insert_mock_cohort(1, "male", categories.age, duplicate.id, 1)
        .await?;

    let service = BracketService::new(&test.db);
    let counts = service.get_category_participants(1).await.unwrap();

    assert_eq!(counts.len(), 1);
    assert_eq!(counts[0].gender, "male");
    assert_eq!(counts[0].age_category, "Cadet");
    assert_eq!(counts[0].weight_category, "-35kg");
    assert_eq!(counts[0].participants, 3);

    Ok(())
}
