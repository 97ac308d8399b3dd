use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::TournamentStatus;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "tournament")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub tournament_date: Date,
    pub status: TournamentStatus,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::bracket::Entity")]
    Bracket,
    #[sea_orm(has_many = "super::tournament_registration::Entity")]
    TournamentRegistration,
}

impl Related<super::bracket::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Bracket.def()
    }
}

impl Related<super::tournament_registration::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TournamentRegistration.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
