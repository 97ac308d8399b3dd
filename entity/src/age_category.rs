use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "age_category")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub min_age: i32,
    pub max_age: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::weight_category::Entity")]
    WeightCategory,
}

impl Related<super::weight_category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WeightCategory.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
