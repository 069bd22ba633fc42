use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};
use std::path::PathBuf;

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Bump, User};
///
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(Bump)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
    /// SQLite file to use instead of an in-memory database.
    file: Option<PathBuf>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            file: None,
        }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. The table will be created when `build()` is called.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity model implementing `EntityTrait` to create table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds every table the bump tracker uses.
    ///
    /// Convenience for service-level tests that touch users, the bump log, the reminder
    /// and the settings table at once.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_bump_tables(self) -> Self {
        self.with_table(User)
            .with_table(Bump)
            .with_table(Reminder)
            .with_table(Setting)
    }

    /// Backs the test database with a SQLite file behind a multi-connection pool.
    ///
    /// In-memory databases are private to a single connection, so tests that exercise
    /// concurrent writers need a file. Any existing file at `path` is replaced, and the
    /// file is removed when the context is dropped.
    ///
    /// # Arguments
    /// - `path` - Location of the database file
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn on_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.file = Some(path.into());
        self
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context with database and tables ready
    /// - `Err(TestError::Database)`- Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = match self.file {
            Some(path) => TestContext::on_file(path),
            None => TestContext::new(),
        };

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
