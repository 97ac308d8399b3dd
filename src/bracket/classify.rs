//! Category classification.
//!
//! Maps a player onto an age category and a weight category using externally supplied, ordered
//! range tables. Age ranges are inclusive on both ends. Weight ranges are exclusive on the lower
//! bound and inclusive on the upper bound, so a player weighing exactly on a boundary falls into
//! the heavier class.

use chrono::NaiveDate;

/// Inclusive age range mapped to an age category ID.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AgeRange {
    pub id: i32,
    pub min_age: i32,
    pub max_age: i32,
}

/// Weight range scoped to a gender and an age category.
#[derive(Clone, Debug, PartialEq)]
pub struct WeightRange {
    pub id: i32,
    pub gender: String,
    pub age_category_id: i32,
    pub min_weight: f64,
    pub max_weight: f64,
}

impl From<&entity::age_category::Model> for AgeRange {
    fn from(model: &entity::age_category::Model) -> Self {
        Self {
            id: model.id,
            min_age: model.min_age,
            max_age: model.max_age,
        }
    }
}

impl From<&entity::weight_category::Model> for WeightRange {
    fn from(model: &entity::weight_category::Model) -> Self {
        Self {
            id: model.id,
            gender: model.gender.clone(),
            age_category_id: model.age_category_id,
            min_weight: model.min_weight,
            max_weight: model.max_weight,
        }
    }
}

/// Calculates a player's age in completed years on the given date.
///
/// # Arguments
/// - `birthday` - The player's date of birth
/// - `on` - Date the age is evaluated at, typically today or the tournament date
///
/// # Returns
/// - `Some(age)` - Whole years elapsed since `birthday`
/// - `None` - `birthday` lies after `on`
pub fn age_on(birthday: NaiveDate, on: NaiveDate) -> Option<i32> {
    on.years_since(birthday)
        .and_then(|years| i32::try_from(years).ok())
}

/// Finds the first age range covering `age`.
///
/// Ranges are checked in the order given; overlapping tables resolve to the earliest match.
///
/// # Returns
/// - `Some(id)` - ID of the first range where `min_age <= age <= max_age`
/// - `None` - No range covers the age, the player is ineligible
pub fn classify_age(age: i32, ranges: &[AgeRange]) -> Option<i32> {
    ranges
        .iter()
        .find(|range| range.min_age <= age && age <= range.max_age)
        .map(|range| range.id)
}

/// Finds the first weight range for the gender and age category covering `weight`.
///
/// A missing weight, or a weight that is not a positive number, never classifies.
///
/// # Arguments
/// - `gender` - Gender the weight table is scoped to
/// - `age_category_id` - Age category the weight table is scoped to
/// - `weight` - Weigh-in weight, if one was recorded
/// - `ranges` - Ordered weight ranges, possibly spanning several genders and age categories
///
/// # Returns
/// - `Some(id)` - ID of the first in-scope range where `min_weight < weight <= max_weight`
/// - `None` - No weight recorded or no range covers it
pub fn classify_weight(
    gender: &str,
    age_category_id: i32,
    weight: Option<f64>,
    ranges: &[WeightRange],
) -> Option<i32> {
    let weight = weight.filter(|w| *w > 0.0)?;

    ranges
        .iter()
        .filter(|range| range.gender == gender && range.age_category_id == age_category_id)
        .find(|range| range.min_weight < weight && weight <= range.max_weight)
        .map(|range| range.id)
}
