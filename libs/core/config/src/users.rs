use crate::{env_parse_or_default, ConfigError, FromEnv};

/// Default minimum age (in whole years) for registered users
pub const DEFAULT_MINIMUM_AGE: u32 = 18;

/// Business-rule settings for the users domain.
///
/// Read once at startup and handed to the service; the value is constant for
/// the lifetime of the service instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UsersConfig {
    /// Minimum age in whole years a user must have reached
    pub minimum_age: u32,
}

impl UsersConfig {
    pub fn new(minimum_age: u32) -> Self {
        Self { minimum_age }
    }
}

impl Default for UsersConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MINIMUM_AGE)
    }
}

impl FromEnv for UsersConfig {
    /// Reads `USER_MINIMUM_AGE` (default: 18)
    fn from_env() -> Result<Self, ConfigError> {
        let minimum_age =
            env_parse_or_default("USER_MINIMUM_AGE", &DEFAULT_MINIMUM_AGE.to_string())?;

        Ok(Self { minimum_age })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_users_config_from_env_default() {
        temp_env::with_var_unset("USER_MINIMUM_AGE", || {
            let config = UsersConfig::from_env().unwrap();
            assert_eq!(config.minimum_age, 18);
        });
    }

    #[test]
    fn test_users_config_from_env_custom() {
        temp_env::with_var("USER_MINIMUM_AGE", Some("21"), || {
            let config = UsersConfig::from_env().unwrap();
            assert_eq!(config.minimum_age, 21);
        });
    }

    #[test]
    fn test_users_config_from_env_rejects_negative() {
        temp_env::with_var("USER_MINIMUM_AGE", Some("-1"), || {
            let err = UsersConfig::from_env().unwrap_err();
            assert!(err.to_string().contains("USER_MINIMUM_AGE"));
        });
    }

    #[test]
    fn test_users_config_from_env_rejects_garbage() {
        temp_env::with_var("USER_MINIMUM_AGE", Some("adult"), || {
            assert!(UsersConfig::from_env().is_err());
        });
    }
}
