//! Read-only catalog repository.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;

use basha_core::{Price, ProductId};

use super::RepositoryError;
use crate::models::CatalogProduct;

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
}

impl TryFrom<ProductRow> for CatalogProduct {
    type Error = RepositoryError;

    fn try_from(row: ProductRow) -> Result<Self, Self::Error> {
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
        })
    }
}

/// Read-only repository over the catalog the admin panel maintains.
pub struct CatalogRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> CatalogRepository<'a> {
    /// Create a new catalog repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Fetch the full catalog, newest first.
    ///
    /// Every page load re-reads the collection; there is no caching or
    /// pagination.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<CatalogProduct>, RepositoryError> {
        let rows: Vec<ProductRow> = sqlx::query_as(
            "SELECT id, name, description, specs, price, images, created_at
             FROM product
             ORDER BY created_at DESC",
        )
        .fetch_all(self.pool)
        .await?;

        rows.into_iter().map(CatalogProduct::try_from).collect()
    }
}
