//! SQLite product store implementation.
//!
//! Provides persistent storage for catalogue products using SQLite and
//! Diesel ORM. Title filtering runs against the `title_folded` column, which
//! holds the Unicode-lowercased title, because SQLite's `LIKE` only folds
//! ASCII letters.

use diesel::prelude::*;

use crate::adapter::outbound::sqlite::database::connection::DbPool;
use crate::adapter::outbound::sqlite::database::model::{NewProductRow, ProductChangeset, ProductRow};
use crate::adapter::outbound::sqlite::database::schema::products;
use crate::domain::product::fold_case;
use crate::domain::{Product, ProductDraft, ProductId};
use crate::error::{Error, Result};
use crate::port::outbound::store::ProductStore;

const LIKE_ESCAPE: char = '\\';

/// SQLite-backed product store.
///
/// Implements the [`ProductStore`] trait on top of a pooled Diesel
/// connection. Ids come from an `AUTOINCREMENT` key and are never reused.
pub struct SqliteProductStore {
    /// Database connection pool.
    pool: DbPool,
}

impl SqliteProductStore {
    /// Create a new SQLite product store with the given connection pool.
    #[must_use]
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(
        &self,
    ) -> Result<diesel::r2d2::PooledConnection<diesel::r2d2::ConnectionManager<SqliteConnection>>>
    {
        self.pool.get().map_err(|e| Error::Connection(e.to_string()))
    }
}

/// Build a `LIKE` pattern matching `filter` anywhere, with wildcards in the
/// filter taken literally.
fn contains_pattern(filter: &str) -> String {
    let mut pattern = String::with_capacity(filter.len() + 2);
    pattern.push('%');
    for c in fold_case(filter).chars() {
        if matches!(c, '%' | '_' | LIKE_ESCAPE) {
            pattern.push(LIKE_ESCAPE);
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

impl ProductStore for SqliteProductStore {
    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>> {
        let mut conn = self.conn()?;

        let row: Option<ProductRow> = products::table
            .find(id.value())
            .select(ProductRow::as_select())
            .first(&mut conn)
            .optional()
            .map_err(|e| Error::Database(e.to_string()))?;

        Ok(row.map(Product::from))
    }

    async fn find_all(&self, filter: Option<&str>) -> Result<Vec<Product>> {
        let mut conn = self.conn()?;

        let rows: Vec<ProductRow> = match filter {
            Some(filter) => products::table
                .filter(
                    products::title_folded
                        .like(contains_pattern(filter))
                        .escape(LIKE_ESCAPE),
                )
                .order(products::id.asc())
                .select(ProductRow::as_select())
                .load(&mut conn)
                .map_err(|e| Error::Database(e.to_string()))?,
            None => products::table
                .order(products::id.asc())
                .select(ProductRow::as_select())
                .load(&mut conn)
                .map_err(|e| Error::Database(e.to_string()))?,
        };

        Ok(rows.into_iter().map(Product::from).collect())
    }

    async fn create(&self, draft: &ProductDraft) -> Result<Product> {
        let mut conn = self.conn()?;

        let row: ProductRow = diesel::insert_into(products::table)
            .values(NewProductRow::from(draft))
            .returning(ProductRow::as_returning())
            .get_result(&mut conn)
            .map_err(|e| Error::Database(e.to_string()))?;

        Ok(Product::from(row))
    }

    async fn save(&self, product: &Product) -> Result<bool> {
        let mut conn = self.conn()?;

        let updated = diesel::update(products::table.find(product.id.value()))
            .set(ProductChangeset::from(product))
            .execute(&mut conn)
            .map_err(|e| Error::Database(e.to_string()))?;

        Ok(updated > 0)
    }

    async fn delete(&self, id: ProductId) -> Result<bool> {
        let mut conn = self.conn()?;

        let deleted = diesel::delete(products::table.find(id.value()))
            .execute(&mut conn)
            .map_err(|e| Error::Database(e.to_string()))?;

        Ok(deleted > 0)
    }
}
