//! Layered configuration
//!
//! Lowest to highest precedence: built-in defaults, the TOML file
//! (`--config` or `~/.stagebill/config.toml`), `.env` plus process
//! environment, command-line flags.
//!
//! ```toml
//! [database]
//! url = "postgres://localhost/stagebill"
//! max_connections = 5
//!
//! [booking]
//! bind = "127.0.0.1:5000"
//!
//! [trivia]
//! bind = "127.0.0.1:5001"
//! cors_permissive = false
//! ```

use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use stagebill_server::db::DEFAULT_MAX_CONNECTIONS;
use stagebill_server::App;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DatabaseSection {
    pub url: Option<String>,
    pub max_connections: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BookingSection {
    pub bind: Option<SocketAddr>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TriviaSection {
    pub bind: Option<SocketAddr>,
    pub cors_permissive: Option<bool>,
}

/// Contents of the config file; every key is optional
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StagebillConfig {
    pub database: DatabaseSection,
    pub booking: BookingSection,
    pub trivia: TriviaSection,
}

impl StagebillConfig {
    /// Default config file path: ~/.stagebill/config.toml
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".stagebill/config.toml")
    }

    /// Load the config file.
    ///
    /// An explicit path must exist; the default path is optional.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => {
                let path = Self::config_path();
                if path.exists() {
                    Self::from_file(&path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("invalid TOML")
    }

    /// Database URL: flag or environment first, then the file.
    pub fn database_url(&self, from_cli_or_env: Option<String>) -> Result<String> {
        from_cli_or_env
            .filter(|url| !url.trim().is_empty())
            .or_else(|| self.database.url.clone())
            .context(
                "No database URL. Set --database-url, DATABASE_URL (environment or .env), \
                 or [database] url in ~/.stagebill/config.toml",
            )
    }

    pub fn max_connections(&self) -> u32 {
        self.database
            .max_connections
            .filter(|n| *n > 0)
            .unwrap_or(DEFAULT_MAX_CONNECTIONS)
    }

    /// Bind address for `app`: flag, then file, then the app's default.
    pub fn bind_addr(&self, app: App, from_cli: Option<SocketAddr>) -> SocketAddr {
        let from_file = match app {
            App::Booking => self.booking.bind,
            App::Trivia => self.trivia.bind,
        };
        from_cli
            .or(from_file)
            .unwrap_or_else(|| app.default_bind_addr())
    }

    /// A set flag always wins; otherwise the file decides.
    pub fn cors_permissive(&self, from_cli: bool) -> bool {
        from_cli || self.trivia.cors_permissive.unwrap_or(false)
    }
}

/// Load `.env` from the working directory and `~/.stagebill/.env`.
///
/// Existing environment variables are never overwritten.
pub fn load_dotenv() {
    let _ = dotenvy::dotenv();
    if let Some(home) = dirs::home_dir() {
        let _ = dotenvy::from_path(home.join(".stagebill/.env"));
    }
}
