//! Integration tests for the public catalog.
//!
//! These tests require:
//! - A running `PostgreSQL` database with migrations applied
//! - The storefront server running (cargo run -p basha-storefront)
//!
//! Run with: cargo test -p basha-integration-tests -- --ignored

use reqwest::StatusCode;

use basha_integration_tests::{client, storefront_base_url};

#[tokio::test]
#[ignore = "Requires running storefront server"]
async fn test_health() {
    let client = client();
    let resp = client
        .get(format!("{}/health", storefront_base_url()))
        .send()
        .await
        .expect("Failed to reach health endpoint");

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.text().await.expect("body"), "ok");
}

#[tokio::test]
#[ignore = "Requires running storefront server"]
async fn test_readiness_checks_database() {
    let client = client();
    let resp = client
        .get(format!("{}/health/ready", storefront_base_url()))
        .send()
        .await
        .expect("Failed to reach readiness endpoint");

    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
#[ignore = "Requires running storefront server"]
async fn test_home_page_renders() {
    let client = client();
    let resp = client
        .get(storefront_base_url())
        .send()
        .await
        .expect("Failed to load home page");

    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.text().await.expect("body");
    assert!(body.contains("Welcome to Basha Home Appliances"));
    assert!(body.contains("Explore Our Categories"));
}

#[tokio::test]
#[ignore = "Requires running storefront server"]
async fn test_catalog_lists_products_with_rupee_prices() {
    let client = client();
    let resp = client
        .get(format!("{}/products", storefront_base_url()))
        .send()
        .await
        .expect("Failed to load catalog");

    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.text().await.expect("body");
    assert!(body.contains("All Products"));

    // Whole-rupee prices render without decimals when the catalog is seeded
    if body.contains("product-price") {
        assert!(body.contains('\u{20b9}'), "prices should use the rupee sign");
    }
}
