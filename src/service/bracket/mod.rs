//! Bracket generation, advancement, and reporting.

mod advance;
mod generate;
mod view;

use sea_orm::DatabaseConnection;

/// Service for generating tournament brackets and recording match results.
///
/// Generation and advancement each commit as one transaction. Concurrent calls against the
/// same tournament are not coordinated here beyond what the database's transaction isolation
/// provides.
pub struct BracketService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BracketService<'a> {
    /// Creates a new instance of BracketService.
    ///
    /// # Arguments
    /// - `db` - Database connection reference
    ///
    /// # Returns
    /// - `BracketService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }
}
