//! Tournament database insertion utilities.
//!
//! Inserts players, categories, tournaments, registrations, brackets, and matches into the test
//! database. Parent records are never created implicitly, so callers insert them in foreign key
//! order.

use chrono::{NaiveDate, Utc};
use entity::sea_orm_active_enums::{BracketFormat, MatchStatus, TournamentStatus};
use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    error::TestError,
    fixtures::tournament::{TournamentFixtures, CLUBS},
    model::{
        AgeCategoryModel, BracketModel, MatchModel, PlayerModel, RegistrationModel,
        TournamentModel, WeightCategoryModel,
    },
};

/// Date every mock tournament is held on.
pub fn mock_tournament_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 6, 1).unwrap_or_default()
}

/// Birthday of mock players, 12 years old on [`mock_tournament_date`].
pub fn mock_birthday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2014, 1, 15).unwrap_or_default()
}

impl<'a> TournamentFixtures<'a> {
    /// Insert a mock tournament.
    ///
    /// # Arguments
    /// - `status` - Lifecycle status of the tournament
    ///
    /// # Returns
    /// - `Ok(TournamentModel)` - The created tournament
    /// - `Err(TestError::DbErr)` - Insert failed
    pub async fn insert_mock_tournament(
        &self,
        status: TournamentStatus,
    ) -> Result<TournamentModel, TestError> {
        Ok(
            entity::prelude::Tournament::insert(entity::tournament::ActiveModel {
                name: ActiveValue::Set("Spring Open".to_string()),
                tournament_date: ActiveValue::Set(mock_tournament_date()),
                status: ActiveValue::Set(status),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a mock player.
    ///
    /// # Arguments
    /// - `full_name` - Player name
    /// - `gender` - Player gender, "male" or "female"
    /// - `club` - Club name, None for unaffiliated players
    /// - `birthday` - Date of birth
    pub async fn insert_mock_player(
        &self,
        full_name: &str,
        gender: &str,
        club: Option<&str>,
        birthday: NaiveDate,
    ) -> Result<PlayerModel, TestError> {
        Ok(
            entity::prelude::Player::insert(entity::player::ActiveModel {
                full_name: ActiveValue::Set(full_name.to_string()),
                birthday: ActiveValue::Set(birthday),
                gender: ActiveValue::Set(gender.to_string()),
                club: ActiveValue::Set(club.map(str::to_string)),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a mock age category covering `min_age..=max_age`.
    pub async fn insert_mock_age_category(
        &self,
        name: &str,
        min_age: i32,
        max_age: i32,
    ) -> Result<AgeCategoryModel, TestError> {
        Ok(
            entity::prelude::AgeCategory::insert(entity::age_category::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                min_age: ActiveValue::Set(min_age),
                max_age: ActiveValue::Set(max_age),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a mock weight category covering weights above `min_weight` up to `max_weight`.
    pub async fn insert_mock_weight_category(
        &self,
        name: &str,
        gender: &str,
        age_category_id: i32,
        min_weight: f64,
        max_weight: f64,
    ) -> Result<WeightCategoryModel, TestError> {
        Ok(
            entity::prelude::WeightCategory::insert(entity::weight_category::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                gender: ActiveValue::Set(gender.to_string()),
                age_category_id: ActiveValue::Set(age_category_id),
                min_weight: ActiveValue::Set(min_weight),
                max_weight: ActiveValue::Set(max_weight),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a registration of a player for a tournament.
    ///
    /// # Arguments
    /// - `weight_category_id` - None leaves the registration ineligible for brackets
    pub async fn insert_mock_registration(
        &self,
        tournament_id: i32,
        player_id: i32,
        age_category_id: i32,
        weight_category_id: Option<i32>,
        weigh_in_weight: Option<f64>,
    ) -> Result<RegistrationModel, TestError> {
        Ok(entity::prelude::TournamentRegistration::insert(
            entity::tournament_registration::ActiveModel {
                tournament_id: ActiveValue::Set(tournament_id),
                player_id: ActiveValue::Set(player_id),
                age_category_id: ActiveValue::Set(age_category_id),
                weight_category_id: ActiveValue::Set(weight_category_id),
                weigh_in_weight: ActiveValue::Set(weigh_in_weight),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            },
        )
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    /// Insert `size` players and register them all into the same cohort.
    ///
    /// Players are named "<gender> <n>" and take clubs from [`CLUBS`] in rotation, so any cohort
    /// of three or more mixes clubs.
    ///
    /// # Arguments
    /// - `tournament_id` - Tournament to register into
    /// - `gender` - Gender of every player
    /// - `age_category_id` - Age category of every registration
    /// - `weight_category_id` - Weight category of every registration
    /// - `size` - Number of players to create
    ///
    /// # Returns
    /// - `Ok(Vec<PlayerModel>)` - Created players in registration order
    /// - `Err(TestError::DbErr)` - Insert failed
    pub async fn insert_mock_cohort(
        &self,
        tournament_id: i32,
        gender: &str,
        age_category_id: i32,
        weight_category_id: i32,
        size: usize,
    ) -> Result<Vec<PlayerModel>, TestError> {
        let mut players = Vec::with_capacity(size);

        for n in 0..size {
            let player = self
                .insert_mock_player(
                    &format!("{} {}", gender, n + 1),
                    gender,
                    Some(CLUBS[n % CLUBS.len()]),
                    mock_birthday(),
                )
                .await?;

            self.insert_mock_registration(
                tournament_id,
                player.id,
                age_category_id,
                Some(weight_category_id),
                Some(30.0),
            )
            .await?;

            players.push(player);
        }

        Ok(players)
    }

    /// Insert a bracket record without any matches.
    pub async fn insert_mock_bracket(
        &self,
        tournament_id: i32,
        gender: &str,
        age_category_id: i32,
        weight_category_id: i32,
        format: BracketFormat,
        rounds: i32,
    ) -> Result<BracketModel, TestError> {
        Ok(
            entity::prelude::Bracket::insert(entity::bracket::ActiveModel {
                tournament_id: ActiveValue::Set(tournament_id),
                gender: ActiveValue::Set(gender.to_string()),
                age_category_id: ActiveValue::Set(age_category_id),
                weight_category_id: ActiveValue::Set(weight_category_id),
                format: ActiveValue::Set(format),
                rounds: ActiveValue::Set(rounds),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a scheduled match at a bracket position.
    pub async fn insert_mock_match(
        &self,
        bracket_id: i32,
        round_number: i32,
        match_number: i32,
        player_one_id: Option<i32>,
        player_two_id: Option<i32>,
    ) -> Result<MatchModel, TestError> {
        Ok(
            entity::prelude::TournamentMatch::insert(entity::tournament_match::ActiveModel {
                bracket_id: ActiveValue::Set(bracket_id),
                round_number: ActiveValue::Set(round_number),
                match_number: ActiveValue::Set(match_number),
                player_one_id: ActiveValue::Set(player_one_id),
                player_two_id: ActiveValue::Set(player_two_id),
                winner_id: ActiveValue::Set(None),
                status: ActiveValue::Set(MatchStatus::Scheduled),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                updated_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
