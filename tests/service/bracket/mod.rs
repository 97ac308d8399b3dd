use entity::sea_orm_active_enums::{BracketFormat, TournamentStatus};
use tatami_test_utils::{model::MatchModel, prelude::*};

mod advance_match;
mod generate_brackets;
mod get_category_participants;

/// Category IDs inserted by [`insert_categories`].
struct Categories {
    age: i32,
    male_light: i32,
    male_heavy: i32,
    female: i32,
}

/// Insert one age category with two male weight classes and one female weight class.
async fn insert_categories(test: &TestContext) -> Result<Categories, TestError> {
    let age = test
        .tournament()
        .insert_mock_age_category("Cadet", 10, 13)
        .await?;
    let male_light = test
        .tournament()
        .insert_mock_weight_category("-35kg", "male", age.id, 0.0, 35.0)
        .await?;
    let male_heavy = test
        .tournament()
        .insert_mock_weight_category("+35kg", "male", age.id, 35.0, 200.0)
        .await?;
    let female = test
        .tournament()
        .insert_mock_weight_category("Open", "female", age.id, 0.0, 200.0)
        .await?;

    Ok(Categories {
        age: age.id,
        male_light: male_light.id,
        male_heavy: male_heavy.id,
        female: female.id,
    })
}

/// Insert tournament 1 with a four-player elimination bracket built by hand.
///
/// Round one pairs players 0 vs 1 and 2 vs 3, round two holds the empty final.
///
/// # Returns
/// - `(TestContext, player IDs, [r1/m1, r1/m2, final])`
async fn elimination_of_four(
    status: TournamentStatus,
) -> Result<(TestContext, Vec<i32>, [MatchModel; 3]), TestError> {
    let test = TestBuilder::new()
        .with_bracket_tables()
        .with_mock_tournament(status)
        .build()
        .await?;
    let categories = insert_categories(&test).await?;
    let players: Vec<i32> = test
        .tournament()
        .insert_mock_cohort(1, "male", categories.age, categories.male_light, 4)
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
    let first = test
        .tournament()
        .insert_mock_match(bracket.id, 1, 1, Some(players[0]), Some(players[1]))
        .await?;
    let second = test
        .tournament()
        .insert_mock_match(bracket.id, 1, 2, Some(players[2]), Some(players[3]))
        .await?;
    let final_match = test
        .tournament()
        .insert_mock_match(bracket.id, 2, 1, None, None)
        .await?;

    Ok((test, players, [first, second, final_match]))
}
