use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "player")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub full_name: String,
    pub birthday: Date,
    pub gender: String,
    pub club: Option<String>,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::tournament_registration::Entity")]
    TournamentRegistration,
}

impl Related<super::tournament_registration::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TournamentRegistration.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
