//! JSON-over-HTTP API for the product catalogue.
//!
//! | Method | Path | Scope |
//! |---|---|---|
//! | `GET` | `{base}/products` | `view_catalogue` |
//! | `POST` | `{base}/products` | `edit_catalogue` |
//! | `GET` | `{base}/products/{id}` | `view_catalogue` |
//! | `PATCH` | `{base}/products/{id}` | `edit_catalogue` |
//! | `DELETE` | `{base}/products/{id}` | `edit_catalogue` |
//!
//! Failures are rendered as `application/problem+json` by
//! [`problem::Translator`].

pub mod auth;
pub mod collection;
pub mod item;
pub mod locale;
pub mod payload;
pub mod problem;
pub mod state;
pub mod trace;

use axum::middleware;
use axum::routing::get;
use axum::Router;

pub use auth::{Scope, ScopeGate};
pub use state::{AppState, Localizer};

use crate::port::inbound::catalogue::ProductCatalogue;

/// Build the API router.
///
/// Routes live under `state.base_path`; the scope gate only guards matched
/// routes, so unknown paths stay plain 404s.
pub fn router<C: ProductCatalogue>(state: AppState<C>, gate: ScopeGate) -> Router {
    let base_path = state.base_path.to_string();

    let products = Router::new()
        .route(
            "/products",
            get(collection::find_products::<C>).post(collection::create_product::<C>),
        )
        .route(
            "/products/:id",
            get(item::find_product::<C>)
                .patch(item::update_product::<C>)
                .delete(item::delete_product::<C>),
        )
        .route_layer(middleware::from_fn_with_state(gate, auth::require_scope))
        .with_state(state);

    let app = if base_path.is_empty() {
        products
    } else {
        Router::new().nest(&base_path, products)
    };

    app.layer(middleware::from_fn(trace::trace_requests))
}
