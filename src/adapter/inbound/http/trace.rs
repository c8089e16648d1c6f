//! Request tracing middleware.

use std::time::Instant;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use tracing::{info, info_span, warn, Instrument};

/// Wrap each request in an `http_request` span and log its outcome.
pub async fn trace_requests(request: Request, next: Next) -> Response {
    let span = info_span!(
        "http_request",
        method = %request.method(),
        path = %request.uri().path(),
    );
    let started = Instant::now();

    let response = next.run(request).instrument(span.clone()).await;

    let status = response.status().as_u16();
    let elapsed_ms = started.elapsed().as_millis() as u64;
    span.in_scope(|| {
        if response.status().is_server_error() {
            warn!(status, elapsed_ms, "Request failed");
        } else {
            info!(status, elapsed_ms, "Request completed");
        }
    });

    response
}
