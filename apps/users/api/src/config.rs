use core_config::{AppInfo, FromEnv, app_info, server::ServerConfig, users::UsersConfig};

// Import database config from the database library
use database::postgres::PostgresConfig;

// Re-export Environment for use in other modules
pub use core_config::Environment;

/// Application-specific configuration
/// Composes shared config components from the `config` library
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    /// `None` when `DATABASE_URL` is unset; users are then kept in memory
    pub database: Option<PostgresConfig>,
    pub server: ServerConfig,
    pub users: UsersConfig,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let database = match std::env::var("DATABASE_URL") {
            Ok(_) => Some(PostgresConfig::from_env()?),
            Err(_) => None,
        };
        let server = ServerConfig::from_env()?; // Uses defaults: HOST=0.0.0.0, PORT=8080
        let users = UsersConfig::from_env()?; // USER_MINIMUM_AGE, default 18

        Ok(Self {
            app: app_info!(),
            database,
            server,
            users,
            environment,
        })
    }
}
