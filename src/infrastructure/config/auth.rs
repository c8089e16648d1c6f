//! Authorization gate configuration.

use serde::Deserialize;

use crate::adapter::inbound::http::auth::DEFAULT_SCOPE_HEADER;

const fn default_true() -> bool {
    true
}

/// Scope gate settings.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// Check scopes in-process. Disable only behind a gateway that already
    /// enforces them.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Trusted header carrying the verified token's `scope` claim.
    #[serde(default = "default_scope_header")]
    pub scope_header: String,
}

fn default_scope_header() -> String {
    DEFAULT_SCOPE_HEADER.to_string()
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            scope_header: default_scope_header(),
        }
    }
}
