//! Message catalogue configuration.

use std::path::PathBuf;

use serde::Deserialize;

/// Localization settings.
#[derive(Debug, Clone, Deserialize)]
pub struct MessagesConfig {
    /// Locale used when a request sends no usable `Accept-Language`.
    #[serde(default = "default_locale")]
    pub default_locale: String,
    /// Optional directory of `<tag>.toml` catalogues merged over the
    /// bundled ones.
    #[serde(default)]
    pub directory: Option<PathBuf>,
}

fn default_locale() -> String {
    "en".to_string()
}

impl Default for MessagesConfig {
    fn default() -> Self {
        Self {
            default_locale: default_locale(),
            directory: None,
        }
    }
}
