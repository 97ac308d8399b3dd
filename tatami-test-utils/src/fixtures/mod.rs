//! Test fixture modules for database record creation.
//!
//! - `tournament` - Players, categories, tournaments, registrations, brackets, and matches

pub mod tournament;
