//! Product storage configuration.

use serde::Deserialize;

/// Available product store backends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// Products live in process memory and vanish on exit.
    Memory,
    /// Products are persisted in a SQLite database file.
    #[default]
    Sqlite,
}

/// Storage settings.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    #[serde(default)]
    pub backend: StorageBackend,
    /// Path to the SQLite database file, or `:memory:`.
    ///
    /// Overridden by the `CATALOGUE_DATABASE` environment variable.
    #[serde(default = "default_database_path")]
    pub database: String,
}

fn default_database_path() -> String {
    "catalogue.db".to_string()
}

impl StorageConfig {
    /// Connection URL for the configured database.
    #[must_use]
    pub fn database_url(&self) -> String {
        if self.database == ":memory:" {
            self.database.clone()
        } else {
            format!("sqlite://{}", self.database)
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            database: default_database_path(),
        }
    }
}
