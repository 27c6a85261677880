//! Application state shared across all request handlers.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use super::service::token::TokenVerifier;

/// Application state containing shared resources and dependencies.
///
/// Initialized once during server startup and cloned cheaply for each
/// incoming request via Axum's state extraction: `DatabaseConnection` is a
/// pooled handle and the verifier sits behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Verifier for bearer tokens on owner-scoped routes.
    ///
    /// Held behind a trait object so tests can substitute a canned verifier
    /// without a network round trip.
    pub verifier: Arc<dyn TokenVerifier>,

    /// Application base URL for generating `self` and pagination links.
    pub app_url: String,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `verifier` - Token verifier for authenticated routes
    /// - `app_url` - Application base URL
    pub fn new(db: DatabaseConnection, verifier: Arc<dyn TokenVerifier>, app_url: String) -> Self {
        Self {
            db,
            verifier,
            app_url,
        }
    }
}
