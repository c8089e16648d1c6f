//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all application settings.
//! Configuration is loaded from a TOML file; every section is optional and
//! falls back to defaults. `CATALOGUE_DATABASE` overrides the database path.
//!
//! # Example
//!
//! ```no_run
//! use catalogue::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use std::net::SocketAddr;
use std::path::Path;

use axum::http::HeaderName;
use serde::Deserialize;

use super::auth::AuthConfig;
use super::logging::LoggingConfig;
use super::messages::MessagesConfig;
use super::server::ServerConfig;
use super::storage::{StorageBackend, StorageConfig};
use crate::error::{ConfigError, Result};
use crate::port::outbound::message::Locale;

/// Environment variable overriding `storage.database`.
pub const DATABASE_ENV: &str = "CATALOGUE_DATABASE";

/// Main application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// HTTP listener and base path.
    #[serde(default)]
    pub server: ServerConfig,

    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Product store backend.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Scope gate.
    #[serde(default)]
    pub auth: AuthConfig,

    /// Message catalogues and default locale.
    #[serde(default)]
    pub messages: MessagesConfig,
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The TOML content is malformed
    /// - Validation fails (e.g., unparseable bind address)
    pub fn parse_toml(content: &str) -> Result<Self> {
        let mut config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;

        if let Ok(database) = std::env::var(DATABASE_ENV) {
            config.storage.database = database;
        }

        config.validate()?;

        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The TOML content is malformed
    /// - Validation fails
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Validate configuration values.
    fn validate(&self) -> Result<()> {
        self.bind_addr()?;

        let base = &self.server.base_path;
        if !base.is_empty() && (!base.starts_with('/') || base.ends_with('/')) {
            return Err(ConfigError::InvalidValue {
                field: "base_path",
                reason: "must be empty or start with '/' and have no trailing '/'".to_string(),
            }
            .into());
        }

        if !matches!(self.logging.format.as_str(), "pretty" | "json") {
            return Err(ConfigError::InvalidValue {
                field: "format",
                reason: format!("expected \"pretty\" or \"json\", got {:?}", self.logging.format),
            }
            .into());
        }

        if self.storage.backend == StorageBackend::Sqlite {
            if self.storage.database.trim().is_empty() {
                return Err(ConfigError::MissingField { field: "database" }.into());
            }
            if !cfg!(feature = "sqlite") {
                return Err(ConfigError::InvalidValue {
                    field: "backend",
                    reason: "sqlite support requires the sqlite feature".to_string(),
                }
                .into());
            }
        }

        self.scope_header()?;
        self.default_locale()?;

        Ok(())
    }

    /// Parsed listen address.
    ///
    /// # Errors
    /// Returns an error if `server.bind` is not a socket address.
    pub fn bind_addr(&self) -> Result<SocketAddr> {
        self.server.bind.parse().map_err(|e: std::net::AddrParseError| {
            ConfigError::InvalidValue {
                field: "bind",
                reason: e.to_string(),
            }
            .into()
        })
    }

    /// Header name carrying the scope claim.
    ///
    /// # Errors
    /// Returns an error if `auth.scope_header` is not a valid header name.
    pub fn scope_header(&self) -> Result<HeaderName> {
        HeaderName::from_bytes(self.auth.scope_header.as_bytes()).map_err(|e| {
            ConfigError::InvalidValue {
                field: "scope_header",
                reason: e.to_string(),
            }
            .into()
        })
    }

    /// Parsed default locale.
    ///
    /// # Errors
    /// Returns an error if `messages.default_locale` is not a language tag.
    pub fn default_locale(&self) -> Result<Locale> {
        self.messages.default_locale.parse().map_err(|e: crate::port::outbound::message::InvalidLocale| {
            ConfigError::InvalidValue {
                field: "default_locale",
                reason: e.to_string(),
            }
            .into()
        })
    }

    /// Initialize logging with the configured settings.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}
