//! Collection endpoint: `{base}/products`.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{OriginalUri, Query, State};
use axum::http::header::{HOST, LOCATION};
use axum::http::{HeaderMap, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;

use super::payload::NewProductPayload;
use super::problem::{ApiError, Failure};
use super::state::AppState;
use crate::domain::Product;
use crate::error::Error;
use crate::port::inbound::catalogue::ProductCatalogue;

const FORWARDED_PROTO: &str = "x-forwarded-proto";

/// Query string of `GET /products`.
#[derive(Debug, Default, Deserialize)]
pub struct ProductsQuery {
    pub filter: Option<String>,
}

/// `GET /products[?filter=...]`
pub async fn find_products<C: ProductCatalogue>(
    State(state): State<AppState<C>>,
    OriginalUri(uri): OriginalUri,
    headers: HeaderMap,
    query: Result<Query<ProductsQuery>, QueryRejection>,
) -> Result<Json<Vec<Product>>, ApiError> {
    find(&state, query)
        .await
        .map_err(|failure| state.localizer.translator(&headers, uri.path()).translate(failure))
}

async fn find<C: ProductCatalogue>(
    state: &AppState<C>,
    query: Result<Query<ProductsQuery>, QueryRejection>,
) -> Result<Json<Vec<Product>>, Failure> {
    let Query(query) = query?;
    let products = state
        .catalogue
        .find_all_products(query.filter.as_deref())
        .await?;
    Ok(Json(products))
}

/// `POST /products`
pub async fn create_product<C: ProductCatalogue>(
    State(state): State<AppState<C>>,
    OriginalUri(uri): OriginalUri,
    headers: HeaderMap,
    payload: Result<Json<NewProductPayload>, JsonRejection>,
) -> Result<Response, ApiError> {
    create(&state, &headers, payload)
        .await
        .map_err(|failure| state.localizer.translator(&headers, uri.path()).translate(failure))
}

async fn create<C: ProductCatalogue>(
    state: &AppState<C>,
    headers: &HeaderMap,
    payload: Result<Json<NewProductPayload>, JsonRejection>,
) -> Result<Response, Failure> {
    let Json(payload) = payload?;
    let fields = payload.validate().map_err(Failure::Validation)?;

    let product = state
        .catalogue
        .create_product(&fields.title, fields.details.as_deref())
        .await?;

    let location = location(headers, &state.product_path(product.id));
    let location = HeaderValue::from_str(&location)
        .map_err(|e| Failure::Internal(Error::Parse(e.to_string())))?;

    Ok((StatusCode::CREATED, [(LOCATION, location)], Json(product)).into_response())
}

/// Join the request's base URI with `path`.
///
/// The scheme comes from `X-Forwarded-Proto` when a proxy sets it. Without a
/// `Host` header only the path is returned.
fn location(headers: &HeaderMap, path: &str) -> String {
    let Some(host) = headers.get(HOST).and_then(|h| h.to_str().ok()) else {
        return path.to_string();
    };

    let scheme = headers
        .get(FORWARDED_PROTO)
        .and_then(|h| h.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or("http");

    format!("{scheme}://{host}{path}")
}
