//! Product management route handlers.
//!
//! All three mutations finish with a redirect back to the listing, which
//! re-reads the whole collection from the database. Failures redirect with a
//! human-readable `error` query parameter that the listing renders as a
//! banner.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Multipart, Path, Query, State},
    response::{IntoResponse, Redirect, Response},
};
use rust_decimal::Decimal;
use serde::Deserialize;

use basha_core::{Price, ProductId};

use crate::db::{RepositoryError, products::ProductRepository};
use crate::error::AppError;
use crate::filters;
use crate::middleware::RequireAdminAuth;
use crate::models::{NewProduct, Product, ProductChanges};
use crate::state::AppState;

/// Product listing template, with the add-product form inline.
#[derive(Template, WebTemplate)]
#[template(path = "products/index.html")]
pub struct ProductsTemplate {
    products: Vec<Product>,
    error: Option<String>,
}

/// Edit form template for a single product.
#[derive(Template, WebTemplate)]
#[template(path = "products/edit.html")]
pub struct EditProductTemplate {
    product: Product,
}

/// Query parameters for the listing page.
#[derive(Deserialize)]
pub struct ListingQuery {
    error: Option<String>,
}

/// A file part pulled out of the multipart body.
struct UploadedFile {
    filename: String,
    bytes: Vec<u8>,
}

/// Parsed product form: text fields plus any attached image files.
struct ProductSubmission {
    name: String,
    description: String,
    specs: Option<String>,
    price: Price,
    files: Vec<UploadedFile>,
}

/// `GET /products` - Listing with inline add form.
pub async fn index(
    RequireAdminAuth(_admin): RequireAdminAuth,
    State(state): State<AppState>,
    Query(query): Query<ListingQuery>,
) -> Result<ProductsTemplate, AppError> {
    let products = ProductRepository::new(state.pool()).list().await?;

    Ok(ProductsTemplate {
        products,
        error: query.error,
    })
}

/// `GET /products/:id/edit` - Edit form for one product.
///
/// A missing product bounces back to the listing with an error banner
/// instead of a bare 404 page.
pub async fn edit_form(
    RequireAdminAuth(_admin): RequireAdminAuth,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Response, AppError> {
    let product = ProductRepository::new(state.pool())
        .get_by_id(ProductId::new(id))
        .await?;

    match product {
        Some(product) => Ok(EditProductTemplate { product }.into_response()),
        None => {
            tracing::warn!(product_id = id, "Edit of missing product");
            let message = urlencoding::encode("Product not found.");
            Ok(Redirect::to(&format!("/products?error={message}")).into_response())
        }
    }
}

/// `POST /products` - Create a product from the multipart form.
///
/// Images are uploaded one at a time, in form order, before the record is
/// inserted with their resolved URLs.
pub async fn create(
    RequireAdminAuth(_admin): RequireAdminAuth,
    State(state): State<AppState>,
    multipart: Multipart,
) -> Response {
    let result = create_inner(&state, multipart).await;
    finish_mutation(result, "create product")
}

async fn create_inner(state: &AppState, multipart: Multipart) -> Result<Redirect, AppError> {
    let submission = read_submission(multipart).await?;
    let images = upload_files(state, &submission.files).await?;

    let product = ProductRepository::new(state.pool())
        .create(&NewProduct {
            name: submission.name,
            description: submission.description,
            specs: submission.specs,
            price: submission.price,
            images,
        })
        .await?;

    tracing::info!(product_id = %product.id, "Product created");
    Ok(Redirect::to("/products"))
}

/// `POST /products/:id` - Update a product from the multipart form.
///
/// Newly uploaded images are appended to the product's existing list; the
/// edit flow never removes a URL.
pub async fn update(
    RequireAdminAuth(_admin): RequireAdminAuth,
    State(state): State<AppState>,
    Path(id): Path<i32>,
    multipart: Multipart,
) -> Response {
    let result = update_inner(&state, ProductId::new(id), multipart).await;
    finish_mutation(result, "update product")
}

async fn update_inner(
    state: &AppState,
    id: ProductId,
    multipart: Multipart,
) -> Result<Redirect, AppError> {
    let repo = ProductRepository::new(state.pool());

    let existing = repo
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("product {id}")))?;

    let submission = read_submission(multipart).await?;
    let new_urls = upload_files(state, &submission.files).await?;

    let mut images = existing.images;
    images.extend(new_urls);

    let product = repo
        .update(
            id,
            &ProductChanges {
                name: submission.name,
                description: submission.description,
                specs: submission.specs,
                price: submission.price,
                images,
            },
        )
        .await?;

    tracing::info!(product_id = %product.id, "Product updated");
    Ok(Redirect::to("/products"))
}

/// `POST /products/:id/delete` - Delete a product record.
///
/// Stored image objects are left in place. Deleting an already-deleted
/// product is harmless and lands back on the listing.
pub async fn delete(
    RequireAdminAuth(_admin): RequireAdminAuth,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Response {
    let id = ProductId::new(id);

    match ProductRepository::new(state.pool()).delete(id).await {
        Ok(()) => {
            tracing::info!(product_id = %id, "Product deleted");
            Redirect::to("/products").into_response()
        }
        Err(RepositoryError::NotFound) => {
            tracing::warn!(product_id = %id, "Delete of missing product");
            Redirect::to("/products").into_response()
        }
        Err(err) => finish_mutation(Err(AppError::Database(err)), "delete product"),
    }
}

/// Turn a mutation result into a response, surfacing failures as a listing
/// banner instead of a bare error page.
fn finish_mutation(result: Result<Redirect, AppError>, action: &str) -> Response {
    match result {
        Ok(redirect) => redirect.into_response(),
        Err(err) => {
            if matches!(
                err,
                AppError::Database(_) | AppError::Media(_) | AppError::Internal(_)
            ) {
                let event_id = sentry::capture_error(&err);
                tracing::error!(error = %err, sentry_event_id = %event_id, "Failed to {action}");
            } else {
                tracing::warn!(error = %err, "Failed to {action}");
            }

            let message = urlencoding::encode(&err.to_string()).into_owned();
            Redirect::to(&format!("/products?error={message}")).into_response()
        }
    }
}

/// Upload each file through the media store, one at a time, returning the
/// public URLs in form order.
async fn upload_files(
    state: &AppState,
    files: &[UploadedFile],
) -> Result<Vec<String>, AppError> {
    let mut urls = Vec::with_capacity(files.len());

    for file in files {
        let key = crate::services::media::MediaStore::object_key(&file.filename);
        let object = state.media().put(&key, &file.bytes).await?;
        urls.push(state.media().download_url(&object));
    }

    Ok(urls)
}

/// Read the product form out of a multipart body.
///
/// Unknown fields are ignored; file parts with an empty filename (an
/// untouched file input) are skipped.
async fn read_submission(mut multipart: Multipart) -> Result<ProductSubmission, AppError> {
    let mut name = None;
    let mut description = None;
    let mut specs = None;
    let mut price = None;
    let mut files = Vec::new();

    while let Some(field) = multipart.next_field().await? {
        match field.name().unwrap_or_default() {
            "name" => name = Some(field.text().await?),
            "description" => description = Some(field.text().await?),
            "specs" => {
                let text = field.text().await?;
                if !text.trim().is_empty() {
                    specs = Some(text);
                }
            }
            "price" => price = Some(parse_price(&field.text().await?)?),
            "images" => {
                let filename = field.file_name().unwrap_or_default().to_owned();
                if filename.is_empty() {
                    continue;
                }
                let bytes = field.bytes().await?.to_vec();
                files.push(UploadedFile { filename, bytes });
            }
            _ => {}
        }
    }

    let name = require_field(name, "name")?;
    let description = require_field(description, "description")?;
    let price = price.ok_or_else(|| AppError::BadRequest("Missing field: price".to_string()))?;

    Ok(ProductSubmission {
        name,
        description,
        specs,
        price,
        files,
    })
}

fn require_field(value: Option<String>, field: &str) -> Result<String, AppError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(AppError::BadRequest(format!("Missing field: {field}"))),
    }
}

/// Parse a price from form input, rejecting negative amounts.
fn parse_price(input: &str) -> Result<Price, AppError> {
    let amount: Decimal = input
        .trim()
        .parse()
        .map_err(|_| AppError::BadRequest(format!("Invalid price: {input}")))?;

    Price::new(amount).map_err(|e| AppError::BadRequest(e.to_string()))
}
