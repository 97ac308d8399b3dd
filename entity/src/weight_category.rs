use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "weight_category")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub gender: String,
    pub age_category_id: i32,
    #[sea_orm(column_type = "Double")]
    pub min_weight: f64,
    #[sea_orm(column_type = "Double")]
    pub max_weight: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::age_category::Entity",
        from = "Column::AgeCategoryId",
        to = "super::age_category::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    AgeCategory,
}

impl Related<super::age_category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AgeCategory.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
