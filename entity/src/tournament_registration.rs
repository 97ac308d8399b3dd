use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "tournament_registration")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub tournament_id: i32,
    pub player_id: i32,
    pub age_category_id: i32,
    pub weight_category_id: Option<i32>,
    #[sea_orm(column_type = "Double", nullable)]
    pub weigh_in_weight: Option<f64>,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::tournament::Entity",
        from = "Column::TournamentId",
        to = "super::tournament::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Tournament,
    #[sea_orm(
        belongs_to = "super::player::Entity",
        from = "Column::PlayerId",
        to = "super::player::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Player,
    #[sea_orm(
        belongs_to = "super::age_category::Entity",
        from = "Column::AgeCategoryId",
        to = "super::age_category::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    AgeCategory,
    #[sea_orm(
        belongs_to = "super::weight_category::Entity",
        from = "Column::WeightCategoryId",
        to = "super::weight_category::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    WeightCategory,
}

impl Related<super::tournament::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Tournament.def()
    }
}

impl Related<super::player::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Player.def()
    }
}

impl Related<super::age_category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AgeCategory.def()
    }
}

impl Related<super::weight_category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WeightCategory.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
