pub use sea_orm_migration::prelude::*;

mod m20260220_000001_player;
mod m20260220_000002_age_category;
mod m20260220_000003_weight_category;
mod m20260220_000004_tournament;
mod m20260220_000005_tournament_registration;
mod m20260220_000006_bracket;
mod m20260220_000007_tournament_match;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260220_000001_player::Migration),
            Box::new(m20260220_000002_age_category::Migration),
            Box::new(m20260220_000003_weight_category::Migration),
            Box::new(m20260220_000004_tournament::Migration),
            Box::new(m20260220_000005_tournament_registration::Migration),
            Box::new(m20260220_000006_bracket::Migration),
            Box::new(m20260220_000007_tournament_match::Migration),
        ]
    }
}
