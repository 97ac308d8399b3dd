//! Declarative test builder.
//!
//! This module provides the `TestBuilder` API for configuring test environments before execution.
//! Configuration methods are chained together and everything queued is executed during the final
//! `build()` call.

use entity::sea_orm_active_enums::TournamentStatus;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    include_bracket_tables: bool,

    // Tournaments to insert, by status
    tournaments: Vec<TournamentStatus>,
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    /// Create a new TestBuilder.
    ///
    /// Initializes an empty builder with no tables or fixtures configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_bracket_tables: false,
            tournaments: Vec::new(),
        }
    }

    /// Add every table used by bracket generation and advancement.
    ///
    /// Creates Player, Tournament, AgeCategory, WeightCategory, TournamentRegistration,
    /// Bracket, and TournamentMatch in foreign key order, ahead of any custom tables.
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_bracket_tables(mut self) -> Self {
        self.include_bracket_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// Generates a CREATE TABLE statement for the entity, which will be executed during `build()`.
    /// Chain multiple calls to add multiple tables.
    ///
    /// # Arguments
    /// - `entity` - Entity type implementing `EntityTrait`
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    ///
    /// # Example
    ///
    /// ```no_run
    /// use tatami_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), tatami_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(Player)
    ///     .with_table(Tournament)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a mock tournament with the provided status.
    ///
    /// Tournaments get IDs in the order they are queued, starting at 1.
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_mock_tournament(mut self, status: TournamentStatus) -> Self {
        self.tournaments.push(status);
        self
    }

    /// Build the test context, creating tables and inserting queued fixtures.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context
    /// - `Err(TestError::DbErr)` - Table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let setup = TestContext::new().await?;

        let mut all_tables = Vec::new();

        if self.include_bracket_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::Player),
                schema.create_table_from_entity(entity::prelude::Tournament),
                schema.create_table_from_entity(entity::prelude::AgeCategory),
                schema.create_table_from_entity(entity::prelude::WeightCategory),
                schema.create_table_from_entity(entity::prelude::TournamentRegistration),
                schema.create_table_from_entity(entity::prelude::Bracket),
                schema.create_table_from_entity(entity::prelude::TournamentMatch),
            ]);
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        for status in self.tournaments {
            setup.tournament().insert_mock_tournament(status).await?;
        }

        Ok(setup)
    }
}
