//! Request builders and response readers for router-level tests.

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, Response};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use catalogue::adapter::inbound::http::auth::DEFAULT_SCOPE_HEADER;
use catalogue::adapter::outbound::memory::MemoryProductStore;
use catalogue::infrastructure::bootstrap::build_router;
use catalogue::infrastructure::config::settings::Config;
use catalogue::port::outbound::store::ProductStore;

pub const VIEW: &str = "view_catalogue";
pub const EDIT: &str = "edit_catalogue";
pub const ALL_SCOPES: &str = "openid view_catalogue edit_catalogue";

pub fn config() -> Config {
    Config::parse_toml("[storage]\nbackend = \"memory\"\n").expect("memory config")
}

pub fn memory_app() -> Router {
    app_with_store(Arc::new(MemoryProductStore::new()))
}

pub fn app_with_store<S: ProductStore>(store: Arc<S>) -> Router {
    build_router(&config(), store).expect("build router")
}

/// Builder for a single request against the router.
pub struct Call {
    builder: axum::http::request::Builder,
    body: Body,
}

impl Call {
    pub fn new(method: Method, uri: &str) -> Self {
        Self {
            builder: Request::builder().method(method).uri(uri),
            body: Body::empty(),
        }
    }

    pub fn get(uri: &str) -> Self {
        Self::new(Method::GET, uri).scope(VIEW)
    }

    pub fn post(uri: &str, body: Value) -> Self {
        Self::new(Method::POST, uri).scope(EDIT).json(body)
    }

    pub fn patch(uri: &str, body: Value) -> Self {
        Self::new(Method::PATCH, uri).scope(EDIT).json(body)
    }

    pub fn delete(uri: &str) -> Self {
        Self::new(Method::DELETE, uri).scope(EDIT)
    }

    pub fn scope(mut self, scope: &str) -> Self {
        self.builder = self.builder.header(DEFAULT_SCOPE_HEADER, scope);
        self
    }

    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.builder = self.builder.header(name, value);
        self
    }

    pub fn json(mut self, body: Value) -> Self {
        self.builder = self.builder.header(header::CONTENT_TYPE, "application/json");
        self.body = Body::from(body.to_string());
        self
    }

    pub fn raw(mut self, content_type: &str, body: &'static str) -> Self {
        self.builder = self.builder.header(header::CONTENT_TYPE, content_type);
        self.body = Body::from(body);
        self
    }

    pub async fn send(self, app: &Router) -> Response<Body> {
        let request = self.builder.body(self.body).expect("build request");
        app.clone().oneshot(request).await.expect("router is infallible")
    }
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("json body")
}

pub fn content_type(response: &Response<Body>) -> &str {
    response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
}
