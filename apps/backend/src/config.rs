//! Server configuration read from the environment.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("invalid value for {name}: {value}")]
    Invalid { name: &'static str, value: String },
}

/// Backend configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub card_database_path: PathBuf,
    pub watch_card_database: bool,
}

impl Config {
    /// Read configuration from environment variables.
    ///
    /// Required env vars:
    /// - CARD_DATABASE_PATH: JSON card database built from the card dump
    ///
    /// Optional env vars:
    /// - HOST (default "0.0.0.0")
    /// - PORT (default 3000)
    /// - WATCH_CARD_DATABASE: reload the database when the file changes (default false)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let card_database_path = lookup("CARD_DATABASE_PATH")
            .map(PathBuf::from)
            .ok_or(ConfigError::Missing("CARD_DATABASE_PATH"))?;

        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());

        let port = match lookup("PORT") {
            Some(value) => value.parse().map_err(|_| ConfigError::Invalid {
                name: "PORT",
                value,
            })?,
            None => 3000,
        };

        let watch_card_database = match lookup("WATCH_CARD_DATABASE").as_deref() {
            None | Some("") | Some("0") | Some("false") => false,
            Some("1") | Some("true") => true,
            Some(other) => {
                return Err(ConfigError::Invalid {
                    name: "WATCH_CARD_DATABASE",
                    value: other.to_string(),
                })
            }
        };

        Ok(Self {
            host,
            port,
            card_database_path,
            watch_card_database,
        })
    }

    /// Socket address string to bind.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
