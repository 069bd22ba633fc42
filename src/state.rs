//! Shared state for the liveness endpoints.

use sea_orm::DatabaseConnection;

/// Application state cloned into each request handler.
///
/// `DatabaseConnection` is a pool handle, so clones share the same connections.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool, pinged by `/health`.
    pub db: DatabaseConnection,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}
