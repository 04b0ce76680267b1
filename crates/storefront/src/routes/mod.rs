//! HTTP route handlers for the storefront.
//!
//! ```text
//! GET /            - Marketing home page
//! GET /products    - Full product catalog
//! GET /health      - Health check
//! ```

pub mod home;
pub mod products;

use axum::{Router, routing::get};

use crate::state::AppState;

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::home))
        .route("/products", get(products::index))
}
