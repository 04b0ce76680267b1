//! Product repository for database operations.
//!
//! The `product` table is the single source of truth for the catalog; the
//! admin panel re-reads the full collection after every mutation instead of
//! patching any in-memory copy. Writes are last-write-wins: there is no
//! optimistic-concurrency guard on concurrent edits of the same record.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;

use basha_core::{Price, ProductId};

use super::RepositoryError;
use crate::models::{NewProduct, Product, ProductChanges};

/// Database row for `product`.
#[derive(sqlx::FromRow)]
struct ProductRow {
    id: i32,
    name: String,
    description: String,
    specs: Option<String>,
    price: Decimal,
    images: Vec<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ProductRow> for Product {
    type Error = RepositoryError;

    fn try_from(row: ProductRow) -> Result<Self, Self::Error> {
        // Price is only validated at the form boundary, so a hand-edited row
        // could hold a negative amount.
        let price = Price::new(row.price).map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid price in database: {e}"))
        })?;

        Ok(Self {
            id: ProductId::new(row.id),
            name: row.name,
            description: row.description,
            specs: row.specs,
            price,
            images: row.images,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

/// Repository for product database operations.
pub struct ProductRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ProductRepository<'a> {
    /// Create a new product repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Fetch the full product collection, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<Product>, RepositoryError> {
        let rows: Vec<ProductRow> = sqlx::query_as(
            "SELECT id, name, description, specs, price, images, created_at, updated_at
             FROM product
             ORDER BY created_at DESC",
        )
        .fetch_all(self.pool)
        .await?;

        rows.into_iter().map(Product::try_from).collect()
    }

    /// Get a product by its ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_by_id(&self, id: ProductId) -> Result<Option<Product>, RepositoryError> {
        let row: Option<ProductRow> = sqlx::query_as(
            "SELECT id, name, description, specs, price, images, created_at, updated_at
             FROM product
             WHERE id = $1",
        )
        .bind(id.as_i32())
        .fetch_optional(self.pool)
        .await?;

        row.map(Product::try_from).transpose()
    }

    /// Insert a new product, assigning a fresh ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(&self, new: &NewProduct) -> Result<Product, RepositoryError> {
        let row: ProductRow = sqlx::query_as(
            "INSERT INTO product (name, description, specs, price, images)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING id, name, description, specs, price, images, created_at, updated_at",
        )
        .bind(&new.name)
        .bind(&new.description)
        .bind(new.specs.as_deref())
        .bind(new.price.amount())
        .bind(&new.images)
        .fetch_one(self.pool)
        .await?;

        Product::try_from(row)
    }

    /// Merge updated fields into an existing product in place.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no product has the given ID.
    /// Returns `RepositoryError::Database` if the update fails.
    pub async fn update(
        &self,
        id: ProductId,
        changes: &ProductChanges,
    ) -> Result<Product, RepositoryError> {
        let row: Option<ProductRow> = sqlx::query_as(
            "UPDATE product
             SET name = $1, description = $2, specs = $3, price = $4, images = $5,
                 updated_at = now()
             WHERE id = $6
             RETURNING id, name, description, specs, price, images, created_at, updated_at",
        )
        .bind(&changes.name)
        .bind(&changes.description)
        .bind(changes.specs.as_deref())
        .bind(changes.price.amount())
        .bind(&changes.images)
        .bind(id.as_i32())
        .fetch_optional(self.pool)
        .await?;

        row.map(Product::try_from)
            .transpose()?
            .ok_or(RepositoryError::NotFound)
    }

    /// Delete a product record.
    ///
    /// Does not touch the stored image objects the record referenced.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no product has the given ID
    /// (a repeated delete observes this without corrupting state).
    /// Returns `RepositoryError::Database` if the delete fails.
    pub async fn delete(&self, id: ProductId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM product WHERE id = $1")
            .bind(id.as_i32())
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
