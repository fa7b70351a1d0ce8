//! PostgreSQL connectivity for the users service
//!
//! - [`postgres`]: pool configuration (`FromEnv`), connection with retry,
//!   migration runner and health check
//! - [`common`]: shared error type and exponential-backoff retry
//!
//! ```ignore
//! use core_config::FromEnv;
//! use database::postgres::{self, PostgresConfig};
//! use migration::Migrator;
//!
//! let config = PostgresConfig::from_env()?;
//! let db = postgres::connect_from_config_with_retry(config, None).await?;
//! postgres::run_migrations::<Migrator>(&db, "users_api").await?;
//! ```

pub mod common;
pub mod postgres;

pub use common::{DatabaseError, DatabaseResult};
