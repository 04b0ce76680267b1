//! Domain models for the storefront.

pub mod product;

pub use product::CatalogProduct;
