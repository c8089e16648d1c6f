//! Scope gate.
//!
//! Token verification happens upstream; the gateway forwards the verified
//! token's space-separated `scope` claim in a trusted header. This layer
//! only compares that claim with the scope each method requires and
//! answers 403 before any handler runs.

use std::fmt;

use axum::extract::{OriginalUri, Request, State};
use axum::http::{HeaderMap, HeaderName, Method};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use tracing::warn;

use super::problem::Failure;
use super::state::Localizer;

/// Header the gateway uses when none is configured.
pub const DEFAULT_SCOPE_HEADER: &str = "x-authenticated-scope";

/// Scopes recognised by the catalogue API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// Read access: `GET` and `HEAD`.
    ViewCatalogue,
    /// Write access: every other method.
    EditCatalogue,
}

impl Scope {
    /// Claim value of the scope.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ViewCatalogue => "view_catalogue",
            Self::EditCatalogue => "edit_catalogue",
        }
    }

    /// Scope a request with this method must carry.
    #[must_use]
    pub fn required_for(method: &Method) -> Self {
        if method == Method::GET || method == Method::HEAD {
            Self::ViewCatalogue
        } else {
            Self::EditCatalogue
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// State of the scope-checking middleware.
#[derive(Clone)]
pub struct ScopeGate {
    enabled: bool,
    header: HeaderName,
    localizer: Localizer,
}

impl ScopeGate {
    pub fn new(enabled: bool, header: HeaderName, localizer: Localizer) -> Self {
        Self {
            enabled,
            header,
            localizer,
        }
    }

    /// Whether the forwarded claim grants `scope`.
    #[must_use]
    pub fn grants(&self, headers: &HeaderMap, scope: Scope) -> bool {
        headers
            .get_all(&self.header)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .flat_map(str::split_whitespace)
            .any(|granted| granted == scope.as_str())
    }
}

/// Reject requests whose scope claim does not cover the route.
pub async fn require_scope(State(gate): State<ScopeGate>, request: Request, next: Next) -> Response {
    if !gate.enabled {
        return next.run(request).await;
    }

    let required = Scope::required_for(request.method());
    if gate.grants(request.headers(), required) {
        return next.run(request).await;
    }

    let path = request
        .extensions()
        .get::<OriginalUri>()
        .map_or_else(|| request.uri().path().to_string(), |uri| uri.0.path().to_string());
    warn!(method = %request.method(), path = %path, required = %required, "Request lacks required scope");

    gate.localizer
        .translator(request.headers(), path)
        .translate(Failure::Forbidden(required))
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::http::HeaderValue;

    use crate::adapter::outbound::i18n::BundleMessageResolver;
    use crate::port::outbound::message::Locale;

    fn gate() -> ScopeGate {
        let messages = BundleMessageResolver::bundled(Locale::new("en")).unwrap();
        ScopeGate::new(
            true,
            HeaderName::from_static(DEFAULT_SCOPE_HEADER),
            Localizer::new(Arc::new(messages), Locale::new("en")),
        )
    }

    #[test]
    fn reads_require_view_scope() {
        assert_eq!(Scope::required_for(&Method::GET), Scope::ViewCatalogue);
        assert_eq!(Scope::required_for(&Method::HEAD), Scope::ViewCatalogue);
    }

    #[test]
    fn writes_require_edit_scope() {
        for method in [Method::POST, Method::PATCH, Method::DELETE, Method::PUT] {
            assert_eq!(Scope::required_for(&method), Scope::EditCatalogue);
        }
    }

    #[test]
    fn grants_matches_whole_space_separated_claims() {
        let gate = gate();
        let mut headers = HeaderMap::new();
        headers.insert(
            DEFAULT_SCOPE_HEADER,
            HeaderValue::from_static("openid view_catalogue"),
        );

        assert!(gate.grants(&headers, Scope::ViewCatalogue));
        assert!(!gate.grants(&headers, Scope::EditCatalogue));
    }

    #[test]
    fn partial_claim_does_not_grant() {
        let gate = gate();
        let mut headers = HeaderMap::new();
        headers.insert(DEFAULT_SCOPE_HEADER, HeaderValue::from_static("view_catalogue_extra"));
        assert!(!gate.grants(&headers, Scope::ViewCatalogue));
    }

    #[test]
    fn missing_header_grants_nothing() {
        let gate = gate();
        assert!(!gate.grants(&HeaderMap::new(), Scope::ViewCatalogue));
    }
}
