//! Data access layer repositories.
//!
//! Repositories wrap sea-orm queries per table. Each one is generic over [`sea_orm::ConnectionTrait`]
//! so services can hand in either the database connection or an open transaction.

pub mod bracket;
pub mod category;
pub mod player;
pub mod registration;
pub mod tournament;
pub mod tournament_match;
