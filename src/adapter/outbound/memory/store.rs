//! In-memory product store.
//!
//! Keeps products in a `BTreeMap` so listings come back in id order. Ids come
//! from a monotonic counter and are never handed out twice.

use std::collections::BTreeMap;

use parking_lot::RwLock;

use crate::domain::product::fold_case;
use crate::domain::{Product, ProductDraft, ProductId};
use crate::error::Result;
use crate::port::outbound::store::ProductStore;

#[derive(Debug)]
struct Inner {
    products: BTreeMap<ProductId, Product>,
    next_id: i32,
}

/// In-memory product store for tests and single-process deployments.
#[derive(Debug)]
pub struct MemoryProductStore {
    inner: RwLock<Inner>,
}

impl MemoryProductStore {
    /// Create a new empty store. The first product gets id 1.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                products: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }

    /// Number of stored products.
    pub fn len(&self) -> usize {
        self.inner.read().products.len()
    }

    /// Whether the store holds no products.
    pub fn is_empty(&self) -> bool {
        self.inner.read().products.is_empty()
    }
}

impl Default for MemoryProductStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ProductStore for MemoryProductStore {
    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>> {
        Ok(self.inner.read().products.get(&id).cloned())
    }

    async fn find_all(&self, filter: Option<&str>) -> Result<Vec<Product>> {
        let inner = self.inner.read();
        let products = match filter {
            Some(filter) => {
                let needle = fold_case(filter);
                inner
                    .products
                    .values()
                    .filter(|p| p.title_contains_folded(&needle))
                    .cloned()
                    .collect()
            }
            None => inner.products.values().cloned().collect(),
        };
        Ok(products)
    }

    async fn create(&self, draft: &ProductDraft) -> Result<Product> {
        let mut inner = self.inner.write();
        let id = ProductId::new(inner.next_id);
        inner.next_id += 1;

        let product = Product::from_draft(id, draft.clone());
        inner.products.insert(id, product.clone());
        Ok(product)
    }

    async fn save(&self, product: &Product) -> Result<bool> {
        let mut inner = self.inner.write();
        match inner.products.get_mut(&product.id) {
            Some(existing) => {
                existing.clone_from(product);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: ProductId) -> Result<bool> {
        Ok(self.inner.write().products.remove(&id).is_some())
    }
}
