//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources
//! needed by the application. The state is initialized once during startup and
//! then cloned for each request handler through Axum's state extraction.

use sea_orm::DatabaseConnection;

/// Application state containing shared resources.
///
/// Holds the database handle with an explicit constructed-at-startup lifecycle
/// rather than a module-wide singleton. `DatabaseConnection` is a connection
/// pool, so clones share the pool and are cheap.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,
}

impl AppState {
    /// Creates a new application state with the provided database handle.
    ///
    /// Called once during server startup after the database has been
    /// initialized; the resulting state is provided to the Axum router.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}
