use std::env;
use std::str::FromStr;
use std::time::Duration;

use business::domain::shopping_list::model::DEFAULT_SHOPPING_LIST_NAME;
use persistence::db::DatabaseConfig;

/// Application configuration loaded from the environment.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub migrations_path: String,
    pub default_list_name: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

fn parse_or<T: FromStr>(value: Option<String>, default: T) -> T {
    value
        .and_then(|raw| raw.trim().parse::<T>().ok())
        .unwrap_or(default)
}

impl AppConfig {
    /// Environment variables:
    /// - MIGRATIONS_PATH (default: "./migrations")
    /// - SHOPPING_LIST_DEFAULT_NAME (default: "Shopping List")
    /// - DATABASE_MAX_CONNECTIONS (default: 5)
    /// - DATABASE_ACQUIRE_TIMEOUT_SECS (default: 30)
    pub fn from_env() -> Self {
        Self::from_vars(|name| env::var(name).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            migrations_path: var("MIGRATIONS_PATH").unwrap_or_else(|| "./migrations".to_string()),
            default_list_name: var("SHOPPING_LIST_DEFAULT_NAME")
                .filter(|name| !name.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_SHOPPING_LIST_NAME.to_string()),
            max_connections: parse_or(
                var("DATABASE_MAX_CONNECTIONS"),
                DatabaseConfig::DEFAULT_MAX_CONNECTIONS,
            ),
            acquire_timeout: Duration::from_secs(parse_or(
                var("DATABASE_ACQUIRE_TIMEOUT_SECS"),
                DatabaseConfig::DEFAULT_ACQUIRE_TIMEOUT_SECS,
            )),
        }
    }
}
