use axum::Router;
use domain_users::{InMemoryUserRepository, PgUserRepository, UserService, handlers};

use crate::state::AppState;

/// Users routes backed by Postgres when a pool exists, memory otherwise.
pub fn router(state: &AppState) -> Router {
    let config = state.config.users;

    match &state.db {
        Some(db) => handlers::router(UserService::new(PgUserRepository::new(db.clone()), config)),
        None => {
            tracing::warn!("DATABASE_URL not set, users are kept in memory only");
            handlers::router(UserService::new(InMemoryUserRepository::new(), config))
        }
    }
}
