//! Test context structure and utilities.
//!
//! The `TestContext` returned by `TestBuilder` holds an in-memory SQLite
//! database and a memory-backed session for exercising services and session
//! identity without a running server.

use std::sync::Arc;

use sea_orm::{
    sea_query::{IndexCreateStatement, TableCreateStatement},
    ConnectionTrait, Database, DatabaseConnection,
};
use tower_sessions::{MemoryStore, Session};

use crate::error::TestError;

/// Test context created by [`TestBuilder::build`](crate::TestBuilder::build).
///
/// Provides access to:
/// - an in-memory SQLite database with the requested tables created
/// - a session backed by a memory store
/// - fixture helpers via `users()`, `catalog()`, and `recipes()`
pub struct TestContext {
    /// Database connection to in-memory SQLite database
    pub db: DatabaseConnection,
    /// Session for test identity flows
    pub session: Session,
}

impl TestContext {
    /// Convert the test database into any state type constructed from it.
    ///
    /// Allows conversion to the application's `AppState` without a circular
    /// dependency between the test-utils crate and the main platter crate.
    pub fn to_app_state<T>(&self) -> T
    where
        T: From<DatabaseConnection>,
    {
        T::from(self.db.clone())
    }

    pub(crate) async fn new() -> Result<Self, TestError> {
        let store = Arc::new(MemoryStore::default());
        let session = Session::new(None, store, None);

        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestContext { db, session })
    }

    /// Create database tables from schema statements.
    pub(crate) async fn with_tables(
        &self,
        stmts: Vec<TableCreateStatement>,
    ) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Create indexes from schema statements.
    ///
    /// Used for constraints the entity derive cannot express, such as the
    /// composite unique index on ingredient (name, measurement_unit), so the
    /// test schema matches the migrated one.
    pub(crate) async fn with_indexes(
        &self,
        stmts: Vec<IndexCreateStatement>,
    ) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }
}
