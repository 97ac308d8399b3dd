use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

pub struct RegistrationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RegistrationRepository<'a, C> {
    /// Creates a new instance of [`RegistrationRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Create a registration for a player in a tournament
    ///
    /// # Arguments
    /// - `tournament_id`: ID of the tournament being registered for
    /// - `player_id`: ID of the player being registered
    /// - `age_category_id`: Age category the player was classified into
    /// - `weight_category_id`: Weight category, None leaves the registration ineligible for brackets
    /// - `weigh_in_weight`: Recorded weigh-in weight, if any
    pub async fn create(
        &self,
        tournament_id: i32,
        player_id: i32,
        age_category_id: i32,
        weight_category_id: Option<i32>,
        weigh_in_weight: Option<f64>,
    ) -> Result<entity::tournament_registration::Model, DbErr> {
        let registration = entity::tournament_registration::ActiveModel {
            tournament_id: ActiveValue::Set(tournament_id),
            player_id: ActiveValue::Set(player_id),
            age_category_id: ActiveValue::Set(age_category_id),
            weight_category_id: ActiveValue::Set(weight_category_id),
            weigh_in_weight: ActiveValue::Set(weigh_in_weight),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        registration.insert(self.db).await
    }

    /// Update the classification and weigh-in of an existing registration
    ///
    /// # Returns
    /// - `Some(Model)`: The updated registration
    /// - `None`: No registration exists with the provided ID
    pub async fn update(
        &self,
        registration_id: i32,
        age_category_id: i32,
        weight_category_id: Option<i32>,
        weigh_in_weight: Option<f64>,
    ) -> Result<Option<entity::tournament_registration::Model>, DbErr> {
        let Some(registration) = entity::prelude::TournamentRegistration::find_by_id(registration_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut registration = registration.into_active_model();
        registration.age_category_id = ActiveValue::Set(age_category_id);
        registration.weight_category_id = ActiveValue::Set(weight_category_id);
        registration.weigh_in_weight = ActiveValue::Set(weigh_in_weight);

        let registration = registration.update(self.db).await?;

        Ok(Some(registration))
    }

    /// Get the registration of a player for a tournament, if there is one
    pub async fn get_by_tournament_and_player(
        &self,
        tournament_id: i32,
        player_id: i32,
    ) -> Result<Option<entity::tournament_registration::Model>, DbErr> {
        entity::prelude::TournamentRegistration::find()
            .filter(entity::tournament_registration::Column::TournamentId.eq(tournament_id))
            .filter(entity::tournament_registration::Column::PlayerId.eq(player_id))
            .one(self.db)
            .await
    }

    /// Get every registration of a tournament that has a weight category, with its player
    ///
    /// Registrations are returned in registration order. The player is None only when the
    /// registration references a player that no longer exists.
    pub async fn get_eligible_by_tournament_id(
        &self,
        tournament_id: i32,
    ) -> Result<
        Vec<(
            entity::tournament_registration::Model,
            Option<entity::player::Model>,
        )>,
        DbErr,
    > {
        entity::prelude::TournamentRegistration::find()
            .filter(entity::tournament_registration::Column::TournamentId.eq(tournament_id))
            .filter(entity::tournament_registration::Column::WeightCategoryId.is_not_null())
            .order_by_asc(entity::tournament_registration::Column::Id)
            .find_also_related(entity::player::Entity)
            .all(self.db)
            .await
    }
}
