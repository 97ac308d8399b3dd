use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};

/// Read-only access to the age and weight category tables.
///
/// Both tables are returned in ID order, which is the order classification walks them in.
pub struct CategoryRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CategoryRepository<'a, C> {
    /// Creates a new instance of [`CategoryRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Get all age categories ordered by ID
    pub async fn get_age_categories(&self) -> Result<Vec<entity::age_category::Model>, DbErr> {
        entity::prelude::AgeCategory::find()
            .order_by_asc(entity::age_category::Column::Id)
            .all(self.db)
            .await
    }

    /// Get the weight categories of a single age category ordered by ID
    ///
    /// # Arguments
    /// - `age_category_id`: ID of the age category the weight table belongs to
    pub async fn get_weight_categories(
        &self,
        age_category_id: i32,
    ) -> Result<Vec<entity::weight_category::Model>, DbErr> {
        entity::prelude::WeightCategory::find()
            .filter(entity::weight_category::Column::AgeCategoryId.eq(age_category_id))
            .order_by_asc(entity::weight_category::Column::Id)
            .all(self.db)
            .await
    }

    /// Get all weight categories ordered by ID
    pub async fn get_all_weight_categories(
        &self,
    ) -> Result<Vec<entity::weight_category::Model>, DbErr> {
        entity::prelude::WeightCategory::find()
            .order_by_asc(entity::weight_category::Column::Id)
            .all(self.db)
            .await
    }
}
