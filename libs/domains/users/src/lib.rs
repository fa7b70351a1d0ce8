//! Users domain: registration with a minimum-age rule, unique emails,
//! partial updates and birthday range search.
//!
//! - [`UserService`] holds the business rules
//! - [`UserRepository`] is the persistence port, with
//!   [`InMemoryUserRepository`] and [`PgUserRepository`] implementations
//! - [`handlers::router`] exposes the service over HTTP

pub mod dates;
pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

pub use error::{UserError, UserResult};
pub use handlers::{ApiDoc, router};
pub use models::{BirthdayRange, CreateUser, NewUser, UpdateUser, User, UserRecord};
pub use postgres::PgUserRepository;
pub use repository::{InMemoryUserRepository, UserRepository};
pub use service::UserService;
