//! Integration tests for admin product management.
//!
//! These tests require:
//! - A running `PostgreSQL` database with migrations applied
//! - The admin server running (cargo run -p basha-admin)
//! - A seeded admin account (cargo run -p basha-cli -- admin create ...)
//!
//! Run with: cargo test -p basha-integration-tests -- --ignored

use reqwest::{Client, StatusCode, multipart};
use uuid::Uuid;

use basha_integration_tests::{admin_base_url, client, login};

/// Build the product form with `image_count` one-pixel PNG uploads attached.
fn product_form(name: &str, price: &str, image_count: usize) -> multipart::Form {
    // Smallest valid PNG header bytes; the server stores uploads verbatim
    let png_bytes: &[u8] = &[0x89, 0x50, 0x4e, 0x47, 0x0d, 0x0a, 0x1a, 0x0a];

    let mut form = multipart::Form::new()
        .text("name", name.to_string())
        .text("description", "Created by integration tests".to_string())
        .text("specs", "test spec line".to_string())
        .text("price", price.to_string());

    for i in 0..image_count {
        let part = multipart::Part::bytes(png_bytes.to_vec())
            .file_name(format!("test-{i}.png"))
            .mime_str("image/png")
            .expect("valid mime type");
        form = form.part("images", part);
    }

    form
}

/// Create a product and return the listing page body after the redirect.
async fn create_product(client: &Client, name: &str, image_count: usize) -> String {
    let resp = client
        .post(format!("{}/products", admin_base_url()))
        .multipart(product_form(name, "999", image_count))
        .send()
        .await
        .expect("Failed to create product");

    assert!(
        resp.status().is_redirection(),
        "create should redirect, got {}",
        resp.status()
    );

    listing_body(client).await
}

async fn listing_body(client: &Client) -> String {
    let resp = client
        .get(format!("{}/products", admin_base_url()))
        .send()
        .await
        .expect("Failed to load listing");
    assert_eq!(resp.status(), StatusCode::OK);
    resp.text().await.expect("body")
}

/// Extract the edit link (and thus the ID) for a product by name.
fn edit_path_for(body: &str, name: &str) -> Option<String> {
    let row_start = body.find(name)?;
    // Edit links precede the row's name cell in document order, so search
    // the whole body for the link nearest before the delete form.
    let section = body.get(row_start..)?;
    let link_start = section.find("/products/")?;
    let rest = section.get(link_start..)?;
    let end = rest.find("/edit")?;
    Some(format!("{}{}", rest.get(..end)?, "/edit"))
}

#[tokio::test]
#[ignore = "Requires running admin server and seeded admin account"]
async fn test_create_product_without_images() {
    let client = client();
    login(&client).await;

    let name = format!("Test Kettle {}", Uuid::new_v4());
    let body = create_product(&client, &name, 0).await;

    assert!(body.contains(&name), "new product should appear in listing");
    assert!(body.contains("\u{20b9}999"), "price should render as whole rupees");
}

#[tokio::test]
#[ignore = "Requires running admin server and seeded admin account"]
async fn test_create_product_with_images_stores_urls() {
    let client = client();
    login(&client).await;

    let name = format!("Test Fridge {}", Uuid::new_v4());
    let body = create_product(&client, &name, 2).await;

    assert!(body.contains(&name));
    // Upload keys carry the products/ namespace in their public URLs
    assert!(body.contains("/media/products/"), "uploads should be linked");
}

#[tokio::test]
#[ignore = "Requires running admin server and seeded admin account"]
async fn test_create_product_accepts_phone_sized_photos() {
    let client = client();
    login(&client).await;

    // Two ~4 MB files, comfortably past the 2 MiB default body cap
    let mut photo = vec![0u8; 4 * 1024 * 1024];
    photo[..8].copy_from_slice(&[0x89, 0x50, 0x4e, 0x47, 0x0d, 0x0a, 0x1a, 0x0a]);

    let mut form = multipart::Form::new()
        .text("name", format!("Test Chimney {}", Uuid::new_v4()))
        .text("description", "Created by integration tests".to_string())
        .text("price", "12999".to_string());
    for i in 0..2 {
        let part = multipart::Part::bytes(photo.clone())
            .file_name(format!("photo-{i}.png"))
            .mime_str("image/png")
            .expect("valid mime type");
        form = form.part("images", part);
    }

    let resp = client
        .post(format!("{}/products", admin_base_url()))
        .multipart(form)
        .send()
        .await
        .expect("Failed to create product");

    assert!(
        resp.status().is_redirection(),
        "large uploads should succeed, got {}",
        resp.status()
    );
    let location = resp
        .headers()
        .get("location")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert_eq!(location, "/products", "create must not bounce with an error banner");
}

#[tokio::test]
#[ignore = "Requires running admin server and seeded admin account"]
async fn test_update_appends_images() {
    let client = client();
    login(&client).await;

    let name = format!("Test Washer {}", Uuid::new_v4());
    let body = create_product(&client, &name, 1).await;
    let edit_path = edit_path_for(&body, &name).expect("edit link present");
    let update_path = edit_path.trim_end_matches("/edit").to_string();

    // Update with one more image; the first URL must survive
    let resp = client
        .post(format!("{}{update_path}", admin_base_url()))
        .multipart(product_form(&name, "1099.50", 1))
        .send()
        .await
        .expect("Failed to update product");
    assert!(resp.status().is_redirection());

    let edit_page = client
        .get(format!("{}{edit_path}", admin_base_url()))
        .send()
        .await
        .expect("Failed to load edit page")
        .text()
        .await
        .expect("body");

    assert!(edit_page.contains("Current Images (2)"), "image list should grow to 2");
}

#[tokio::test]
#[ignore = "Requires running admin server and seeded admin account"]
async fn test_delete_removes_product_and_second_delete_is_harmless() {
    let client = client();
    login(&client).await;

    let name = format!("Test Mixer {}", Uuid::new_v4());
    let body = create_product(&client, &name, 0).await;
    let edit_path = edit_path_for(&body, &name).expect("edit link present");
    let delete_path = format!("{}/delete", edit_path.trim_end_matches("/edit"));

    let resp = client
        .post(format!("{}{delete_path}", admin_base_url()))
        .send()
        .await
        .expect("Failed to delete product");
    assert!(resp.status().is_redirection());

    let body = listing_body(&client).await;
    assert!(!body.contains(&name), "deleted product should leave the listing");

    // Deleting again lands back on the listing without an error page
    let resp = client
        .post(format!("{}{delete_path}", admin_base_url()))
        .send()
        .await
        .expect("Failed to re-delete product");
    assert!(resp.status().is_redirection());
}

#[tokio::test]
#[ignore = "Requires running admin server and seeded admin account"]
async fn test_edit_missing_product_redirects_with_banner() {
    let client = client();
    login(&client).await;

    let resp = client
        .get(format!("{}/products/999999/edit", admin_base_url()))
        .send()
        .await
        .expect("Failed to request edit page");

    assert!(resp.status().is_redirection());
    let location = resp
        .headers()
        .get("location")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert!(
        location.starts_with("/products?error="),
        "expected listing redirect with error, got {location}"
    );
}

#[tokio::test]
#[ignore = "Requires running admin server"]
async fn test_product_routes_require_auth() {
    let client = client();

    let resp = client
        .get(format!("{}/products", admin_base_url()))
        .send()
        .await
        .expect("Failed to request products");

    assert!(resp.status().is_redirection());
    let location = resp
        .headers()
        .get("location")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert_eq!(location, "/auth/login");
}
