//! SeaORM entity models for the tatami database schema.

pub mod prelude;

pub mod age_category;
pub mod bracket;
pub mod player;
pub mod sea_orm_active_enums;
pub mod tournament;
pub mod tournament_match;
pub mod tournament_registration;
pub mod weight_category;
