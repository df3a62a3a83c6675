use chrono::Duration;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_SERVER_ADDR: &str = "0.0.0.0:3333";
const DEFAULT_TOKEN_TTL_HOURS: i64 = 24;

/// Account created at startup when it does not exist yet.
#[derive(Debug, Clone, PartialEq)]
pub struct AdminAccount {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub server_addr: String,
    pub token_ttl: Duration,
    pub admin: Option<AdminAccount>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let database_url = var("DATABASE_URL")
            .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let server_addr = var("SERVER_ADDR").unwrap_or_else(|| DEFAULT_SERVER_ADDR.to_string());

        let token_ttl_hours = match var("TOKEN_TTL_HOURS") {
            Some(value) => match value.trim().parse::<i64>() {
                Ok(hours) if hours > 0 => hours,
                _ => {
                    return Err(ConfigError::InvalidEnvVar {
                        name: "TOKEN_TTL_HOURS".to_string(),
                        value,
                        reason: "expected a positive number of hours".to_string(),
                    }
                    .into())
                }
            },
            None => DEFAULT_TOKEN_TTL_HOURS,
        };

        let admin = match (var("ADMIN_USERNAME"), var("ADMIN_PASSWORD")) {
            (Some(username), Some(password)) => Some(AdminAccount { username, password }),
            (None, None) => None,
            (Some(_), None) => return Err(ConfigError::MissingEnvVar("ADMIN_PASSWORD".to_string()).into()),
            (None, Some(_)) => return Err(ConfigError::MissingEnvVar("ADMIN_USERNAME".to_string()).into()),
        };

        Ok(Self {
            database_url,
            server_addr,
            token_ttl: Duration::hours(token_ttl_hours),
            admin,
        })
    }
}
