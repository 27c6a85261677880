use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};

use crate::error::TestError;

/// Test environment holding an isolated in-memory SQLite database.
///
/// Each context owns its own `sqlite::memory:` connection, so tests never see
/// each other's rows. The connection is created lazily on first access and
/// persists for the lifetime of the context.
pub struct TestContext {
    /// Optional database connection to the in-memory SQLite instance.
    ///
    /// Initialized lazily when `database()` is first called.
    pub db: Option<DatabaseConnection>,
}

impl TestContext {
    /// Creates a new empty test context with no database connection.
    pub fn new() -> Self {
        Self { db: None }
    }

    /// Gets or creates the in-memory SQLite database connection.
    ///
    /// # Returns
    /// - `Ok(&DatabaseConnection)` - Reference to the database connection
    /// - `Err(TestError::Database)` - Failed to connect to in-memory SQLite
    pub async fn database(&mut self) -> Result<&DatabaseConnection, TestError> {
        match self.db {
            Some(ref db) => Ok(db),
            None => {
                let db = Database::connect("sqlite::memory:").await?;
                let db_ref = self.db.insert(db);
                Ok(&*db_ref)
            }
        }
    }

    /// Executes the given CREATE TABLE statements against the context database.
    ///
    /// # Arguments
    /// - `tables` - Statements to execute, in dependency order
    pub async fn create_tables(
        &mut self,
        tables: &[TableCreateStatement],
    ) -> Result<(), TestError> {
        let db = self.database().await?;

        for table in tables {
            db.execute(table).await?;
        }

        Ok(())
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}
