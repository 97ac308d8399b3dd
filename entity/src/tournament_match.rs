use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::MatchStatus;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "tournament_match")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub bracket_id: i32,
    pub round_number: i32,
    pub match_number: i32,
    pub player_one_id: Option<i32>,
    pub player_two_id: Option<i32>,
    pub winner_id: Option<i32>,
    pub status: MatchStatus,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::bracket::Entity",
        from = "Column::BracketId",
        to = "super::bracket::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Bracket,
    #[sea_orm(
        belongs_to = "super::player::Entity",
        from = "Column::PlayerOneId",
        to = "super::player::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    PlayerOne,
    #[sea_orm(
        belongs_to = "super::player::Entity",
        from = "Column::PlayerTwoId",
        to = "super::player::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    PlayerTwo,
    #[sea_orm(
        belongs_to = "super::player::Entity",
        from = "Column::WinnerId",
        to = "super::player::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    Winner,
}

impl Related<super::bracket::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Bracket.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
