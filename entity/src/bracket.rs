use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::BracketFormat;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "bracket")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub tournament_id: i32,
    pub gender: String,
    pub age_category_id: i32,
    pub weight_category_id: i32,
    pub format: BracketFormat,
    pub rounds: i32,
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
    #[sea_orm(has_many = "super::tournament_match::Entity")]
    TournamentMatch,
}

impl Related<super::tournament::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Tournament.def()
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

impl Related<super::tournament_match::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TournamentMatch.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
