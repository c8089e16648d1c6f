//! Product catalogue use cases.

use std::future::Future;

use crate::domain::{Product, ProductId};
use crate::error::Result;

/// Operations the HTTP API drives on the catalogue.
///
/// `update_product` and `delete_product` fail with
/// [`DomainError::ProductNotFound`](crate::domain::DomainError::ProductNotFound)
/// when the id is unknown. `find_product` reports absence as `None`.
pub trait ProductCatalogue: Send + Sync + 'static {
    /// Look up a single product.
    fn find_product(&self, id: ProductId) -> impl Future<Output = Result<Option<Product>>> + Send;

    /// List products, optionally filtered by a case-insensitive title substring.
    fn find_all_products(
        &self,
        filter: Option<&str>,
    ) -> impl Future<Output = Result<Vec<Product>>> + Send;

    /// Create a product; the store assigns its id.
    fn create_product(
        &self,
        title: &str,
        details: Option<&str>,
    ) -> impl Future<Output = Result<Product>> + Send;

    /// Overwrite title and details of an existing product.
    fn update_product(
        &self,
        id: ProductId,
        title: &str,
        details: Option<&str>,
    ) -> impl Future<Output = Result<()>> + Send;

    /// Remove an existing product.
    fn delete_product(&self, id: ProductId) -> impl Future<Output = Result<()>> + Send;
}
