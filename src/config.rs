//! Application configuration management.
//!
//! This module handles loading configuration from environment variables.
//! It uses the `envy` crate to automatically deserialize environment variables into a type-safe struct.

use serde::Deserialize;

/// Which persistence backend the server runs against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageKind {
    /// PostgreSQL via sqlx
    Postgres,

    /// In-process store, lost on restart
    Memory,
}

/// Application configuration loaded from environment variables.
///
/// # Environment Variables
///
/// - `DATABASE_URL` (optional): PostgreSQL connection string, defaults to a local database
/// - `SERVER_PORT` (optional): HTTP server port, defaults to 4500
/// - `STORAGE` (optional): `postgres` or `memory`, defaults to `postgres`
/// - `DATABASE_MAX_CONNECTIONS` (optional): pool size, defaults to 5
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_database_url")]
    pub database_url: String,

    #[serde(default = "default_port")]
    pub server_port: u16,

    #[serde(default = "default_storage")]
    pub storage: StorageKind,

    #[serde(default = "default_max_connections")]
    pub database_max_connections: u32,
}

fn default_database_url() -> String {
    "postgres://127.0.0.1:5432/transactions".to_string()
}

/// Default port if SERVER_PORT environment variable is not set.
fn default_port() -> u16 {
    4500
}

fn default_storage() -> StorageKind {
    StorageKind::Postgres
}

fn default_max_connections() -> u32 {
    5
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// This method first attempts to load a `.env` file (which is optional),
    /// then reads environment variables and deserializes them into a Config struct.
    ///
    /// # Errors
    ///
    /// Returns an error if environment variable values cannot be parsed into expected types
    /// (e.g. `SERVER_PORT=abc` or `STORAGE=redis`).
    pub fn from_env() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();

        Self::from_vars(std::env::vars())
    }

    /// Build a config from an explicit set of `(KEY, value)` pairs.
    pub fn from_vars<I>(vars: I) -> Result<Self, envy::Error>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        // Field names are automatically converted: database_url -> DATABASE_URL
        envy::from_iter::<_, Config>(vars)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = Config::from_vars(Vec::new()).unwrap();

        assert_eq!(config.server_port, 4500);
        assert_eq!(config.storage, StorageKind::Postgres);
        assert_eq!(config.database_max_connections, 5);
        assert_eq!(config.database_url, "postgres://127.0.0.1:5432/transactions");
    }

    #[test]
    fn reads_overrides() {
        let config = Config::from_vars(vars(&[
            ("SERVER_PORT", "8080"),
            ("STORAGE", "memory"),
            ("DATABASE_URL", "postgres://db/tx"),
        ]))
        .unwrap();

        assert_eq!(config.server_port, 8080);
        assert_eq!(config.storage, StorageKind::Memory);
        assert_eq!(config.database_url, "postgres://db/tx");
    }

    #[test]
    fn rejects_unknown_storage() {
        assert!(Config::from_vars(vars(&[("STORAGE", "mongo")])).is_err());
    }
}
