use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};

pub struct PlayerRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PlayerRepository<'a, C> {
    /// Creates a new instance of [`PlayerRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Get a player by ID, None if the player does not exist
    pub async fn get_by_id(&self, player_id: i32) -> Result<Option<entity::player::Model>, DbErr> {
        entity::prelude::Player::find_by_id(player_id)
            .one(self.db)
            .await
    }

    /// Get every player whose ID is in `player_ids`
    ///
    /// IDs without a matching player are skipped, the result is in no particular order.
    pub async fn get_many(&self, player_ids: &[i32]) -> Result<Vec<entity::player::Model>, DbErr> {
        if player_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Player::find()
            .filter(entity::player::Column::Id.is_in(player_ids.iter().copied()))
            .all(self.db)
            .await
    }
}
