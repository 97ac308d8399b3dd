//! Player registration and category assignment.

use chrono::NaiveDate;
use dioxus_logger::tracing;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    bracket::classify::{age_on, classify_age, classify_weight, AgeRange, WeightRange},
    data::{
        category::CategoryRepository, player::PlayerRepository,
        registration::RegistrationRepository, tournament::TournamentRepository,
    },
    error::{BracketError, Error},
};

/// Service for registering players into tournaments.
pub struct RegistrationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RegistrationService<'a> {
    /// Creates a new instance of [`RegistrationService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a player for a tournament, classifying them into age and weight categories.
    ///
    /// The age category is mandatory. The weight category is not: a missing weigh-in or a
    /// weight outside every range still registers the player, but leaves the registration out of
    /// bracket generation. Registering the same player twice updates the existing registration.
    ///
    /// # Arguments
    /// - `tournament_id` - Tournament to register into
    /// - `player_id` - Player being registered
    /// - `weigh_in_weight` - Weigh-in weight, if one was taken
    /// - `evaluated_on` - Date the player's age is calculated at
    ///
    /// # Returns
    /// - `Ok(Model)` - The created or updated registration
    /// - `Err(BracketError::TournamentNotFound)` - Tournament does not exist
    /// - `Err(BracketError::PlayerNotFound)` - Player does not exist
    /// - `Err(BracketError::PlayerNotEligible)` - No age category covers the player
    /// - `Err(Error::DbErr)` - Database operation failed, nothing was changed
    pub async fn register_player(
        &self,
        tournament_id: i32,
        player_id: i32,
        weigh_in_weight: Option<f64>,
        evaluated_on: NaiveDate,
    ) -> Result<entity::tournament_registration::Model, Error> {
        let txn = self.db.begin().await?;

        let tournament_repo = TournamentRepository::new(&txn);
        let player_repo = PlayerRepository::new(&txn);
        let category_repo = CategoryRepository::new(&txn);
        let registration_repo = RegistrationRepository::new(&txn);

        if tournament_repo.get_by_id(tournament_id).await?.is_none() {
            return Err(BracketError::TournamentNotFound(tournament_id).into());
        }

        let player = player_repo
            .get_by_id(player_id)
            .await?
            .ok_or(BracketError::PlayerNotFound(player_id))?;

        let age_ranges: Vec<AgeRange> = category_repo
            .get_age_categories()
            .await?
            .iter()
            .map(AgeRange::from)
            .collect();

        let age_category_id = age_on(player.birthday, evaluated_on)
            .and_then(|age| classify_age(age, &age_ranges))
            .ok_or(BracketError::PlayerNotEligible { player_id })?;

        let weight_ranges: Vec<WeightRange> = category_repo
            .get_weight_categories(age_category_id)
            .await?
            .iter()
            .map(WeightRange::from)
            .collect();

        let weight_category_id = classify_weight(
            &player.gender,
            age_category_id,
            weigh_in_weight,
            &weight_ranges,
        );

        let existing = registration_repo
            .get_by_tournament_and_player(tournament_id, player_id)
            .await?;

        let registration = match existing {
            Some(existing) => registration_repo
                .update(
                    existing.id,
                    age_category_id,
                    weight_category_id,
                    weigh_in_weight,
                )
                .await?
                .ok_or_else(|| {
                    Error::InternalError(format!(
                        "Registration {} disappeared while updating it within a transaction",
                        existing.id
                    ))
                })?,
            None => {
                registration_repo
                    .create(
                        tournament_id,
                        player_id,
                        age_category_id,
                        weight_category_id,
                        weigh_in_weight,
                    )
                    .await?
            }
        };

        txn.commit().await?;

        tracing::info!(
            tournament_id,
            player_id,
            age_category_id,
            weight_category_id = ?weight_category_id,
            "Registered player"
        );

        Ok(registration)
    }
}
