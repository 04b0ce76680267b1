//! Product catalog route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use tracing::instrument;

use crate::db::products::CatalogRepository;
use crate::error::AppError;
use crate::filters;
use crate::models::CatalogProduct;
use crate::state::AppState;

/// Catalog listing template.
#[derive(Template, WebTemplate)]
#[template(path = "products/index.html")]
pub struct ProductsTemplate {
    pub products: Vec<CatalogProduct>,
}

/// Display the full product catalog.
///
/// Re-reads the whole collection on every request; a fetch failure surfaces
/// as HTTP 500 through the unified error type.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Result<ProductsTemplate, AppError> {
    let products = CatalogRepository::new(state.pool()).list().await?;

    Ok(ProductsTemplate { products })
}
