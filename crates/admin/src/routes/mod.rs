//! HTTP route handlers for the admin panel.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Dashboard (requires auth)
//! GET  /health                 - Health check
//!
//! # Auth
//! GET  /auth/login             - Login page
//! POST /auth/login             - Login action
//! POST /auth/logout            - Logout action
//!
//! # Products (require auth)
//! GET  /products               - Listing + add/edit form
//! POST /products               - Create product (multipart)
//! GET  /products/:id/edit      - Edit form
//! POST /products/:id           - Update product (multipart)
//! POST /products/:id/delete    - Delete product
//! ```

pub mod auth;
pub mod dashboard;
pub mod products;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};

use crate::state::AppState;

/// Body cap for the multipart product form. Phone photos run several
/// megabytes each and the form accepts multiple files, so axum's default
/// 2 MiB limit is far too small.
const MAX_PRODUCT_FORM_BYTES: usize = 50 * 1024 * 1024;

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", get(auth::login_page).post(auth::login))
        .route("/logout", post(auth::logout))
}

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::index).post(products::create))
        .route("/{id}/edit", get(products::edit_form))
        .route("/{id}", post(products::update))
        .route("/{id}/delete", post(products::delete))
        .layer(DefaultBodyLimit::max(MAX_PRODUCT_FORM_BYTES))
}

/// Create all routes for the admin panel.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(dashboard::index))
        .nest("/auth", auth_routes())
        .nest("/products", product_routes())
}
