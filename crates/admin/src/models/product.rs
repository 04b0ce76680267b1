//! Product domain types.

use chrono::{DateTime, Utc};

use basha_core::{Price, ProductId};

/// A catalog product (domain type).
///
/// The `images` list holds public download URLs resolved at upload time.
/// Edits append to this list; URLs are never removed by the edit flow, and
/// deleting a product does not delete the stored objects behind them.
#[derive(Debug, Clone)]
pub struct Product {
    /// Unique product ID, assigned by the database on first insert.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Marketing description.
    pub description: String,
    /// Free-form specification text.
    pub specs: Option<String>,
    /// Price in INR.
    pub price: Price,
    /// Public image URLs, oldest first.
    pub images: Vec<String>,
    /// When the product was created.
    pub created_at: DateTime<Utc>,
    /// When the product was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Fields for creating a product. The ID does not exist until insert.
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub specs: Option<String>,
    pub price: Price,
    pub images: Vec<String>,
}

/// Full replacement state for an existing product.
///
/// The caller is responsible for building `images` as the existing list plus
/// any newly uploaded URLs (append-only edit semantics).
#[derive(Debug, Clone)]
pub struct ProductChanges {
    pub name: String,
    pub description: String,
    pub specs: Option<String>,
    pub price: Price,
    pub images: Vec<String>,
}
