//! HTTP server configuration.

use serde::Deserialize;

/// HTTP listener and routing settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Socket address to listen on.
    #[serde(default = "default_bind")]
    pub bind: String,
    /// Prefix in front of `/products`. Empty, or starts with `/` and has no
    /// trailing slash.
    #[serde(default = "default_base_path")]
    pub base_path: String,
}

fn default_bind() -> String {
    "127.0.0.1:8081".into()
}

fn default_base_path() -> String {
    "/catalogue-api".into()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            base_path: default_base_path(),
        }
    }
}
