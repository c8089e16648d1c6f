//! Failure translation into RFC 7807 problem responses.
//!
//! Handlers report a tagged [`Failure`]; [`Translator::translate`] is the one
//! place that maps each tag to a status code and a localized problem body.

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use super::auth::Scope;
use super::payload::FieldViolation;
use crate::domain::DomainError;
use crate::error::Error;
use crate::port::outbound::message::{Locale, MessageResolver};

/// Media type of problem responses.
pub const PROBLEM_JSON: &str = "application/problem+json";

const MALFORMED_BODY: &str = "catalogue.errors.request.malformed_body";
const INVALID_ID: &str = "catalogue.errors.request.invalid_id";
const MALFORMED_QUERY: &str = "catalogue.errors.request.malformed_query";
const FORBIDDEN: &str = "catalogue.errors.request.forbidden";
const INTERNAL: &str = "catalogue.errors.internal";
const VALIDATION_DETAIL: &str = "errors.400.detail";

/// Problem body as described by RFC 7807.
///
/// Validation failures add an `errors` member with one message per
/// violated field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemDetail {
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub status: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
}

/// Why a request could not be served.
#[derive(Debug)]
pub enum Failure {
    /// The payload violated one or more field constraints.
    Validation(Vec<FieldViolation>),
    /// The addressed entity does not exist.
    NotFound(DomainError),
    /// The body was not valid JSON for the expected payload.
    MalformedBody(String),
    /// The path id is not an integer.
    InvalidId(String),
    /// The query string could not be decoded.
    MalformedQuery(String),
    /// The caller lacks the scope the route requires.
    Forbidden(Scope),
    /// Infrastructure failure; never echoed to the client.
    Internal(Error),
}

impl From<Error> for Failure {
    fn from(err: Error) -> Self {
        match err {
            Error::Domain(domain @ DomainError::ProductNotFound { .. }) => Self::NotFound(domain),
            other => Self::Internal(other),
        }
    }
}

impl From<JsonRejection> for Failure {
    fn from(rejection: JsonRejection) -> Self {
        Self::MalformedBody(rejection.body_text())
    }
}

impl From<QueryRejection> for Failure {
    fn from(rejection: QueryRejection) -> Self {
        Self::MalformedQuery(rejection.body_text())
    }
}

impl From<PathRejection> for Failure {
    fn from(rejection: PathRejection) -> Self {
        Self::InvalidId(rejection.body_text())
    }
}

/// A fully rendered problem response.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    problem: ProblemDetail,
}

impl ApiError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        self.status
    }

    #[must_use]
    pub fn problem(&self) -> &ProblemDetail {
        &self.problem
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            [(header::CONTENT_TYPE, HeaderValue::from_static(PROBLEM_JSON))],
            Json(self.problem),
        )
            .into_response()
    }
}

/// Renders failures for one request's locale.
pub struct Translator<'a> {
    messages: &'a dyn MessageResolver,
    locale: Locale,
    instance: String,
}

impl<'a> Translator<'a> {
    pub fn new(messages: &'a dyn MessageResolver, locale: Locale, instance: impl Into<String>) -> Self {
        Self {
            messages,
            locale,
            instance: instance.into(),
        }
    }

    /// Map a failure to its status code and localized problem body.
    pub fn translate(&self, failure: Failure) -> ApiError {
        match failure {
            Failure::Validation(violations) => {
                let errors = violations
                    .iter()
                    .map(|v| self.messages.message(v.code, &self.locale))
                    .collect();
                debug!(violations = ?violations, "Payload rejected");
                self.problem(StatusCode::BAD_REQUEST, VALIDATION_DETAIL, Some(errors))
            }
            Failure::NotFound(err) => {
                debug!(error = %err, "Entity not found");
                self.problem(StatusCode::NOT_FOUND, err.code(), None)
            }
            Failure::MalformedBody(reason) => {
                debug!(reason = %reason, "Unreadable request body");
                self.problem(StatusCode::BAD_REQUEST, MALFORMED_BODY, None)
            }
            Failure::InvalidId(raw) => {
                debug!(id = %raw, "Invalid product id in path");
                self.problem(StatusCode::BAD_REQUEST, INVALID_ID, None)
            }
            Failure::MalformedQuery(reason) => {
                debug!(reason = %reason, "Unreadable query string");
                self.problem(StatusCode::BAD_REQUEST, MALFORMED_QUERY, None)
            }
            Failure::Forbidden(required) => {
                debug!(required = %required, "Missing scope");
                self.problem(StatusCode::FORBIDDEN, FORBIDDEN, None)
            }
            Failure::Internal(err) => {
                error!(error = %err, instance = %self.instance, "Request failed");
                self.problem(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL, None)
            }
        }
    }

    fn problem(&self, status: StatusCode, detail_code: &str, errors: Option<Vec<String>>) -> ApiError {
        let title_code = format!("errors.{}.title", status.as_u16());
        let title = self.messages.resolve(
            &title_code,
            &self.locale,
            status.canonical_reason().unwrap_or("Error"),
        );

        ApiError {
            status,
            problem: ProblemDetail {
                kind: "about:blank".to_string(),
                title,
                status: status.as_u16(),
                detail: Some(self.messages.message(detail_code, &self.locale)),
                instance: Some(self.instance.clone()),
                errors,
            },
        }
    }
}
