//! Product service.
//!
//! Applies the catalogue's business rules (existence checks, field
//! assignment) on top of a [`ProductStore`]. Payload validation happens in
//! the inbound adapter before any of these methods run.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::{DomainError, Product, ProductDraft, ProductId};
use crate::error::Result;
use crate::port::inbound::catalogue::ProductCatalogue;
use crate::port::outbound::store::ProductStore;

/// Catalogue service backed by a product store.
pub struct ProductService<S> {
    store: Arc<S>,
}

impl<S: ProductStore> ProductService<S> {
    /// Create a new service over the given store.
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }
}

/// Blank filters mean "no filter".
fn normalize_filter(filter: Option<&str>) -> Option<&str> {
    filter.filter(|f| !f.trim().is_empty())
}

impl<S: ProductStore> ProductCatalogue for ProductService<S> {
    async fn find_product(&self, id: ProductId) -> Result<Option<Product>> {
        self.store.find_by_id(id).await
    }

    async fn find_all_products(&self, filter: Option<&str>) -> Result<Vec<Product>> {
        let filter = normalize_filter(filter);
        let products = self.store.find_all(filter).await?;
        debug!(filter = ?filter, count = products.len(), "Listed products");
        Ok(products)
    }

    async fn create_product(&self, title: &str, details: Option<&str>) -> Result<Product> {
        let draft = ProductDraft::new(title, details.map(str::to_string));
        let product = self.store.create(&draft).await?;
        info!(product_id = %product.id, title = %product.title, "Product created");
        Ok(product)
    }

    async fn update_product(&self, id: ProductId, title: &str, details: Option<&str>) -> Result<()> {
        let Some(mut product) = self.store.find_by_id(id).await? else {
            return Err(DomainError::ProductNotFound { id }.into());
        };

        product.apply(title, details.map(str::to_string));
        if !self.store.save(&product).await? {
            // Deleted between the lookup and the write.
            return Err(DomainError::ProductNotFound { id }.into());
        }

        info!(product_id = %id, "Product updated");
        Ok(())
    }

    async fn delete_product(&self, id: ProductId) -> Result<()> {
        if !self.store.delete(id).await? {
            return Err(DomainError::ProductNotFound { id }.into());
        }

        info!(product_id = %id, "Product deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::outbound::memory::MemoryProductStore;
    use crate::error::Error;

    fn service() -> ProductService<MemoryProductStore> {
        ProductService::new(Arc::new(MemoryProductStore::new()))
    }

    fn is_not_found(err: &Error, expected: ProductId) -> bool {
        matches!(err, Error::Domain(DomainError::ProductNotFound { id }) if *id == expected)
    }

    #[tokio::test]
    async fn create_then_find_returns_same_fields() {
        let service = service();

        let created = service
            .create_product("New name", Some("New details"))
            .await
            .unwrap();
        let found = service.find_product(created.id).await.unwrap().unwrap();

        assert_eq!(found.title, "New name");
        assert_eq!(found.details.as_deref(), Some("New details"));
        assert_eq!(found, created);
    }

    #[tokio::test]
    async fn find_missing_product_is_none() {
        let service = service();
        assert!(service.find_product(ProductId::new(1)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn created_ids_are_distinct() {
        let service = service();
        let a = service.create_product("First", None).await.unwrap();
        let b = service.create_product("Second", None).await.unwrap();
        assert_ne!(a.id, b.id);
    }

    #[tokio::test]
    async fn find_all_without_filter_returns_everything_in_id_order() {
        let service = service();
        for title in ["Товар №1", "Товар №2", "Lamp"] {
            service.create_product(title, None).await.unwrap();
        }

        let all = service.find_all_products(None).await.unwrap();
        let titles: Vec<_> = all.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, ["Товар №1", "Товар №2", "Lamp"]);
    }

    #[tokio::test]
    async fn blank_filter_is_treated_as_no_filter() {
        let service = service();
        service.create_product("Lamp", None).await.unwrap();
        service.create_product("Chair", None).await.unwrap();

        assert_eq!(service.find_all_products(Some("")).await.unwrap().len(), 2);
        assert_eq!(service.find_all_products(Some("   ")).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn filter_is_case_insensitive_substring() {
        let service = service();
        service.create_product("Product №1", None).await.unwrap();
        service.create_product("Another thing", None).await.unwrap();

        let by_word = service.find_all_products(Some("product")).await.unwrap();
        assert_eq!(by_word.len(), 1);
        assert_eq!(by_word[0].title, "Product №1");

        let by_suffix = service.find_all_products(Some("№1")).await.unwrap();
        assert_eq!(by_suffix.len(), 1);

        let none = service.find_all_products(Some("missing")).await.unwrap();
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn update_overwrites_title_and_details() {
        let service = service();
        let product = service.create_product("Old", Some("old")).await.unwrap();

        service
            .update_product(product.id, "New name", None)
            .await
            .unwrap();

        let updated = service.find_product(product.id).await.unwrap().unwrap();
        assert_eq!(updated.title, "New name");
        assert_eq!(updated.details, None);
        assert_eq!(updated.id, product.id);
    }

    #[tokio::test]
    async fn update_missing_product_fails_with_not_found() {
        let service = service();
        let err = service
            .update_product(ProductId::new(99), "Title", None)
            .await
            .unwrap_err();
        assert!(is_not_found(&err, ProductId::new(99)), "unexpected error: {err}");
    }

    #[tokio::test]
    async fn delete_removes_product_then_reports_not_found() {
        let service = service();
        let product = service.create_product("Lamp", None).await.unwrap();

        service.delete_product(product.id).await.unwrap();
        assert!(service.find_product(product.id).await.unwrap().is_none());

        let err = service.delete_product(product.id).await.unwrap_err();
        assert!(is_not_found(&err, product.id), "unexpected error: {err}");
    }

    struct FailingStore;

    impl ProductStore for FailingStore {
        async fn find_by_id(&self, _id: ProductId) -> Result<Option<Product>> {
            Err(Error::Connection("store offline".into()))
        }

        async fn find_all(&self, _filter: Option<&str>) -> Result<Vec<Product>> {
            Err(Error::Connection("store offline".into()))
        }

        async fn create(&self, _draft: &ProductDraft) -> Result<Product> {
            Err(Error::Connection("store offline".into()))
        }

        async fn save(&self, _product: &Product) -> Result<bool> {
            Err(Error::Connection("store offline".into()))
        }

        async fn delete(&self, _id: ProductId) -> Result<bool> {
            Err(Error::Connection("store offline".into()))
        }
    }

    #[tokio::test]
    async fn store_failures_are_not_reported_as_not_found() {
        let service = ProductService::new(Arc::new(FailingStore));

        let err = service.delete_product(ProductId::new(1)).await.unwrap_err();
        assert!(matches!(err, Error::Connection(_)));

        let err = service
            .update_product(ProductId::new(1), "Title", None)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Connection(_)));
    }
}
