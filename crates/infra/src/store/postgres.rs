//! Postgres-backed product store.
//!
//! Products live in a single `products` table that mirrors the document
//! shape: one row per document, categories as a `TEXT[]`. The table is
//! created on connect if it does not exist yet.
//!
//! ## Ordering
//!
//! `find_all` returns rows ordered by a `BIGSERIAL` insertion counter, so
//! listing order matches the in-memory backend.

use async_trait::async_trait;
use sqlx::postgres::{PgPool, PgPoolOptions, PgRow};
use sqlx::Row;
use tracing::{debug, instrument};

use catalog_core::ProductId;
use catalog_products::{Product, ProductFields, ProductFilter};

use super::{ProductStore, StoreError};

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS products (
    id          TEXT PRIMARY KEY,
    seq         BIGSERIAL NOT NULL,
    name        TEXT NOT NULL,
    price       DOUBLE PRECISION NOT NULL,
    stock       DOUBLE PRECISION NOT NULL,
    categories  TEXT[] NOT NULL DEFAULT '{}'
)
"#;

const MAX_CONNECTIONS: u32 = 10;

/// Postgres-backed product store.
///
/// `PgPool` is internally reference counted, so cloning the store is cheap
/// and every clone shares the same pool.
#[derive(Debug, Clone)]
pub struct PostgresProductStore {
    pool: PgPool,
}

impl PostgresProductStore {
    /// Open a pool against `url` and make sure the table exists.
    pub async fn connect(url: &str) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .connect(url)
            .await?;
        let store = Self::new(pool);
        store.ensure_schema().await?;
        Ok(store)
    }

    /// Wrap an existing pool. The schema is not touched.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn ensure_schema(&self) -> Result<(), StoreError> {
        sqlx::query(SCHEMA).execute(&self.pool).await?;
        debug!("products table ready");
        Ok(())
    }
}

fn row_to_product(row: PgRow) -> Result<Product, StoreError> {
    Ok(Product {
        id: ProductId::from(row.try_get::<String, _>("id")?),
        name: row.try_get("name")?,
        price: row.try_get("price")?,
        stock: row.try_get("stock")?,
        categories: row.try_get("categories")?,
    })
}

#[async_trait]
impl ProductStore for PostgresProductStore {
    #[instrument(skip(self), err)]
    async fn find_all(&self, filter: &ProductFilter) -> Result<Vec<Product>, StoreError> {
        let rows = match filter.category_value() {
            Some(category) => {
                sqlx::query(
                    r#"
                    SELECT id, name, price, stock, categories
                    FROM products
                    WHERE $1 = ANY(categories)
                    ORDER BY seq
                    "#,
                )
                .bind(category)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query(
                    r#"
                    SELECT id, name, price, stock, categories
                    FROM products
                    ORDER BY seq
                    "#,
                )
                .fetch_all(&self.pool)
                .await?
            }
        };

        rows.into_iter().map(row_to_product).collect()
    }

    #[instrument(skip(self), err)]
    async fn find_by_id(&self, id: &str) -> Result<Option<Product>, StoreError> {
        sqlx::query(
            r#"
            SELECT id, name, price, stock, categories
            FROM products
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .map(row_to_product)
        .transpose()
    }

    #[instrument(skip(self), err)]
    async fn create(&self, fields: ProductFields) -> Result<Product, StoreError> {
        let row = sqlx::query(
            r#"
            INSERT INTO products (id, name, price, stock, categories)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, price, stock, categories
            "#,
        )
        .bind(ProductId::generate().into_inner())
        .bind(&fields.name)
        .bind(fields.price)
        .bind(fields.stock)
        .bind(&fields.categories)
        .fetch_one(&self.pool)
        .await?;

        row_to_product(row)
    }

    #[instrument(skip(self), err)]
    async fn update_by_id(
        &self,
        id: &str,
        fields: ProductFields,
    ) -> Result<Option<Product>, StoreError> {
        sqlx::query(
            r#"
            UPDATE products
            SET name = $2, price = $3, stock = $4, categories = $5
            WHERE id = $1
            RETURNING id, name, price, stock, categories
            "#,
        )
        .bind(id)
        .bind(&fields.name)
        .bind(fields.price)
        .bind(fields.stock)
        .bind(&fields.categories)
        .fetch_optional(&self.pool)
        .await?
        .map(row_to_product)
        .transpose()
    }

    #[instrument(skip(self), err)]
    async fn delete_by_id(&self, id: &str) -> Result<Option<Product>, StoreError> {
        sqlx::query(
            r#"
            DELETE FROM products
            WHERE id = $1
            RETURNING id, name, price, stock, categories
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .map(row_to_product)
        .transpose()
    }
}
