//! Catalog product read model.

use chrono::{DateTime, Utc};

use basha_core::{Price, ProductId};

/// A product as rendered on the public catalog.
///
/// Read-only view of the record the admin panel manages; the storefront
/// never mutates it.
#[derive(Debug, Clone)]
pub struct CatalogProduct {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub specs: Option<String>,
    pub price: Price,
    /// Public image URLs, oldest first.
    pub images: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl CatalogProduct {
    /// The image shown on catalog cards (first upload wins).
    #[must_use]
    pub fn primary_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rust_decimal::Decimal;

    fn product(images: Vec<String>) -> CatalogProduct {
        CatalogProduct {
            id: ProductId::new(1),
            name: "Electric Kettle".to_string(),
            description: "1.5L stainless steel kettle".to_string(),
            specs: None,
            price: Price::new(Decimal::new(999, 0)).expect("non-negative"),
            images,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_primary_image_is_first_upload() {
        let p = product(vec!["/media/a.jpg".to_string(), "/media/b.jpg".to_string()]);
        assert_eq!(p.primary_image(), Some("/media/a.jpg"));
    }

    #[test]
    fn test_primary_image_none_without_uploads() {
        assert_eq!(product(Vec::new()).primary_image(), None);
    }
}
