//! Persistence port for products.

use std::future::Future;

use crate::domain::{Product, ProductDraft, ProductId};
use crate::error::Result;

/// Storage operations for products.
///
/// # Implementation Notes
///
/// - Implementations must be thread-safe (`Send + Sync`)
/// - Ids handed out by [`create`](Self::create) are never reused, even after
///   the product is deleted
/// - [`save`](Self::save) and [`delete`](Self::delete) against an unknown id
///   must report `false` rather than create or corrupt a row
pub trait ProductStore: Send + Sync + 'static {
    /// Get a product by ID.
    fn find_by_id(&self, id: ProductId) -> impl Future<Output = Result<Option<Product>>> + Send;

    /// List products in id order.
    ///
    /// With `Some(filter)`, only products whose title contains `filter`
    /// (case-insensitive, unanchored) are returned.
    fn find_all(&self, filter: Option<&str>) -> impl Future<Output = Result<Vec<Product>>> + Send;

    /// Persist a new product and return it with its assigned id.
    fn create(&self, draft: &ProductDraft) -> impl Future<Output = Result<Product>> + Send;

    /// Replace an existing product. Returns true if the product existed.
    fn save(&self, product: &Product) -> impl Future<Output = Result<bool>> + Send;

    /// Delete a product by ID. Returns true if the product existed.
    fn delete(&self, id: ProductId) -> impl Future<Output = Result<bool>> + Send;
}
