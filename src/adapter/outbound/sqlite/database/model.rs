//! Database model types for Diesel ORM.

use diesel::prelude::*;

use super::schema::products;
use crate::domain::product::fold_case;
use crate::domain::{Product, ProductDraft, ProductId};

/// Database row for a product (queryable).
#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = products)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ProductRow {
    pub id: i32,
    pub title: String,
    pub title_folded: String,
    pub details: Option<String>,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Product::new(ProductId::new(row.id), row.title, row.details)
    }
}

/// Database row for a product (insertable).
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = products)]
pub struct NewProductRow {
    pub title: String,
    pub title_folded: String,
    pub details: Option<String>,
}

impl From<&ProductDraft> for NewProductRow {
    fn from(draft: &ProductDraft) -> Self {
        Self {
            title: draft.title.clone(),
            title_folded: fold_case(&draft.title),
            details: draft.details.clone(),
        }
    }
}

/// Mutable columns of a product. `None` details are written as NULL.
#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = products)]
#[diesel(treat_none_as_null = true)]
pub struct ProductChangeset {
    pub title: String,
    pub title_folded: String,
    pub details: Option<String>,
}

impl From<&Product> for ProductChangeset {
    fn from(product: &Product) -> Self {
        Self {
            title: product.title.clone(),
            title_folded: fold_case(&product.title),
            details: product.details.clone(),
        }
    }
}
