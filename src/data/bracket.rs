use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::bracket::plan::BracketPlan;

pub struct BracketRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BracketRepository<'a, C> {
    /// Creates a new instance of [`BracketRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Create the bracket record for a planned cohort
    ///
    /// Only the bracket row is written, matches are inserted separately with
    /// [`TournamentMatchRepository::create_many`](super::tournament_match::TournamentMatchRepository::create_many).
    pub async fn create(
        &self,
        tournament_id: i32,
        plan: &BracketPlan,
    ) -> Result<entity::bracket::Model, DbErr> {
        let bracket = entity::bracket::ActiveModel {
            tournament_id: ActiveValue::Set(tournament_id),
            gender: ActiveValue::Set(plan.key.gender.clone()),
            age_category_id: ActiveValue::Set(plan.key.age_category_id),
            weight_category_id: ActiveValue::Set(plan.key.weight_category_id),
            format: ActiveValue::Set(plan.format),
            rounds: ActiveValue::Set(plan.rounds),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        bracket.insert(self.db).await
    }

    /// Delete every bracket of a tournament along with their matches
    ///
    /// Matches are deleted first so the result does not depend on the backend enforcing
    /// cascades. Pass a transaction as the connection when this is part of a regeneration.
    ///
    /// # Returns
    /// - `u64`: Number of brackets deleted
    pub async fn delete_by_tournament_id(&self, tournament_id: i32) -> Result<u64, DbErr> {
        let bracket_ids: Vec<i32> = entity::prelude::Bracket::find()
            .filter(entity::bracket::Column::TournamentId.eq(tournament_id))
            .all(self.db)
            .await?
            .into_iter()
            .map(|bracket| bracket.id)
            .collect();

        if bracket_ids.is_empty() {
            return Ok(0);
        }

        entity::prelude::TournamentMatch::delete_many()
            .filter(entity::tournament_match::Column::BracketId.is_in(bracket_ids.iter().copied()))
            .exec(self.db)
            .await?;

        let result = entity::prelude::Bracket::delete_many()
            .filter(entity::bracket::Column::Id.is_in(bracket_ids))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Get a bracket by ID
    pub async fn get_by_id(&self, bracket_id: i32) -> Result<Option<entity::bracket::Model>, DbErr> {
        entity::prelude::Bracket::find_by_id(bracket_id)
            .one(self.db)
            .await
    }

    /// Get the brackets of a tournament ordered by gender, age category, then weight category
    pub async fn get_by_tournament_id(
        &self,
        tournament_id: i32,
    ) -> Result<Vec<entity::bracket::Model>, DbErr> {
        entity::prelude::Bracket::find()
            .filter(entity::bracket::Column::TournamentId.eq(tournament_id))
            .order_by_asc(entity::bracket::Column::Gender)
            .order_by_asc(entity::bracket::Column::AgeCategoryId)
            .order_by_asc(entity::bracket::Column::WeightCategoryId)
            .all(self.db)
            .await
    }
}
