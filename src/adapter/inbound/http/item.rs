//! Item endpoint: `{base}/products/{id}`.
//!
//! Every handler first resolves the id to an existing product; a missing
//! product is a 404 no matter what the request body contains.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{OriginalUri, Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::Json;

use super::payload::UpdateProductPayload;
use super::problem::{ApiError, Failure};
use super::state::AppState;
use crate::domain::{DomainError, Product, ProductId};
use crate::port::inbound::catalogue::ProductCatalogue;

type IdPath = Result<Path<String>, PathRejection>;

/// Resolve the path id to an existing product.
async fn resolve_product<C: ProductCatalogue>(
    state: &AppState<C>,
    raw_id: IdPath,
) -> Result<Product, Failure> {
    let Path(raw_id) = raw_id?;
    let id: ProductId = raw_id.parse().map_err(|_| Failure::InvalidId(raw_id))?;

    state
        .catalogue
        .find_product(id)
        .await?
        .ok_or(Failure::NotFound(DomainError::ProductNotFound { id }))
}

/// `GET /products/{id}`
pub async fn find_product<C: ProductCatalogue>(
    State(state): State<AppState<C>>,
    raw_id: IdPath,
    OriginalUri(uri): OriginalUri,
    headers: HeaderMap,
) -> Result<Json<Product>, ApiError> {
    resolve_product(&state, raw_id)
        .await
        .map(Json)
        .map_err(|failure| state.localizer.translator(&headers, uri.path()).translate(failure))
}

/// `PATCH /products/{id}`
pub async fn update_product<C: ProductCatalogue>(
    State(state): State<AppState<C>>,
    raw_id: IdPath,
    OriginalUri(uri): OriginalUri,
    headers: HeaderMap,
    payload: Result<Json<UpdateProductPayload>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    update(&state, raw_id, payload)
        .await
        .map_err(|failure| state.localizer.translator(&headers, uri.path()).translate(failure))
}

async fn update<C: ProductCatalogue>(
    state: &AppState<C>,
    raw_id: IdPath,
    payload: Result<Json<UpdateProductPayload>, JsonRejection>,
) -> Result<StatusCode, Failure> {
    let product = resolve_product(state, raw_id).await?;
    let Json(payload) = payload?;
    let fields = payload.validate().map_err(Failure::Validation)?;

    state
        .catalogue
        .update_product(product.id, &fields.title, fields.details.as_deref())
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// `DELETE /products/{id}`
pub async fn delete_product<C: ProductCatalogue>(
    State(state): State<AppState<C>>,
    raw_id: IdPath,
    OriginalUri(uri): OriginalUri,
    headers: HeaderMap,
) -> Result<StatusCode, ApiError> {
    delete(&state, raw_id)
        .await
        .map_err(|failure| state.localizer.translator(&headers, uri.path()).translate(failure))
}

async fn delete<C: ProductCatalogue>(state: &AppState<C>, raw_id: IdPath) -> Result<StatusCode, Failure> {
    let product = resolve_product(state, raw_id).await?;
    // A concurrent delete can still win here; the service reports it as NotFound.
    state.catalogue.delete_product(product.id).await?;
    Ok(StatusCode::NO_CONTENT)
}
