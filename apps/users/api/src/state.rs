//! Application state management.
//!
//! This module defines the shared application state passed to the
//! readiness handler and the shutdown cleanup.

use database::postgres::DatabaseConnection;

/// Shared application state.
///
/// Cloning is cheap: the connection is a handle onto a shared pool.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: crate::config::Config,
    /// PostgreSQL pool, absent when running on the in-memory repository
    pub db: Option<DatabaseConnection>,
}
