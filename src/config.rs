//! Application configuration parsed from environment variables.
//!
//! DESIGN
//! ======
//! Everything the service needs at startup is read once into `AppConfig`.
//! Pool and layout knobs fall back to defaults when absent or unparseable.
//! `PORT` and enum-like values reject bad spellings so typos fail at boot.

use crate::panel::{Direction, PanelConfig};

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_DB_ACQUIRE_TIMEOUT_SECS: u64 = 5;
pub const DEFAULT_PANEL_SPACING: u16 = 8;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required env var {0}")]
    Missing(&'static str),
    #[error("config parse failed: {0}")]
    Parse(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub acquire_timeout_secs: u64,
}

/// Which painting store backs the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreConfig {
    Postgres(DatabaseConfig),
    Memory,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub port: u16,
    pub store: StoreConfig,
    pub panel: PanelConfig,
}

impl AppConfig {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `STORE_BACKEND`: `postgres` (default) or `memory`
    /// - `DATABASE_URL`: required when the backend is `postgres`
    /// - `DB_MAX_CONNECTIONS`: default 5
    /// - `DB_ACQUIRE_TIMEOUT_SECS`: default 5
    /// - `PANEL_DIRECTION`: `column` (default) or `row`
    /// - `PANEL_SPACING`: default 8
    ///
    /// # Errors
    ///
    /// Returns an error for an unparseable `PORT`, unknown backend/direction
    /// values, or a missing `DATABASE_URL` with the postgres backend.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = parse_port(std::env::var("PORT").ok().as_deref())?;
        let store = match std::env::var("STORE_BACKEND").ok().as_deref().unwrap_or("postgres") {
            "postgres" => {
                let url = std::env::var("DATABASE_URL").map_err(|_| ConfigError::Missing("DATABASE_URL"))?;
                StoreConfig::Postgres(DatabaseConfig {
                    url,
                    max_connections: env_parse("DB_MAX_CONNECTIONS", DEFAULT_DB_MAX_CONNECTIONS),
                    acquire_timeout_secs: env_parse("DB_ACQUIRE_TIMEOUT_SECS", DEFAULT_DB_ACQUIRE_TIMEOUT_SECS),
                })
            }
            "memory" => StoreConfig::Memory,
            other => return Err(ConfigError::Parse(format!("unknown STORE_BACKEND: {other}"))),
        };

        let panel = PanelConfig {
            direction: parse_direction(std::env::var("PANEL_DIRECTION").ok().as_deref())?,
            spacing: env_parse("PANEL_SPACING", DEFAULT_PANEL_SPACING),
        };

        Ok(Self { port, store, panel })
    }
}

pub(crate) fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<T>().ok())
        .unwrap_or(default)
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw {
        None => Ok(DEFAULT_PORT),
        Some(v) => v.trim().parse().map_err(|_| ConfigError::Parse(format!("invalid PORT '{v}'"))),
    }
}

fn parse_direction(raw: Option<&str>) -> Result<Direction, ConfigError> {
    match raw.unwrap_or("column") {
        "column" => Ok(Direction::Column),
        "row" => Ok(Direction::Row),
        other => Err(ConfigError::Parse(format!(
            "unsupported PANEL_DIRECTION '{other}' (expected 'column' or 'row')"
        ))),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
