//! Integration tests for Basha Home Appliances.
//!
//! # Running Tests
//!
//! ```bash
//! # Run migrations and seed an admin account
//! cargo run -p basha-cli -- migrate
//! cargo run -p basha-cli -- admin create -e admin@test.local -p "integration-password"
//!
//! # Start both servers, then:
//! cargo test -p basha-integration-tests -- --ignored
//! ```
//!
//! # Test Categories
//!
//! - `storefront_catalog` - Public catalog pages
//! - `admin_auth` - Login/logout flow and error messages
//! - `admin_products` - Product CRUD and image uploads

use reqwest::Client;

/// Base URL for the admin panel (configurable via environment).
#[must_use]
pub fn admin_base_url() -> String {
    std::env::var("ADMIN_BASE_URL").unwrap_or_else(|_| "http://localhost:3001".to_string())
}

/// Base URL for the storefront (configurable via environment).
#[must_use]
pub fn storefront_base_url() -> String {
    std::env::var("STOREFRONT_BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string())
}

/// Email of the seeded admin account the auth tests sign in with.
#[must_use]
pub fn test_admin_email() -> String {
    std::env::var("TEST_ADMIN_EMAIL").unwrap_or_else(|_| "admin@test.local".to_string())
}

/// Password of the seeded admin account.
#[must_use]
pub fn test_admin_password() -> String {
    std::env::var("TEST_ADMIN_PASSWORD").unwrap_or_else(|_| "integration-password".to_string())
}

/// Create an HTTP client with a cookie store, without following redirects.
///
/// Redirects are left to the tests: login and product mutations respond with
/// redirects whose `Location` headers the tests assert on.
///
/// # Panics
///
/// Panics if the client cannot be constructed.
#[must_use]
pub fn client() -> Client {
    Client::builder()
        .cookie_store(true)
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .expect("Failed to create HTTP client")
}

/// Sign in with the seeded admin account, leaving the session cookie in the
/// client's store.
///
/// # Panics
///
/// Panics if the login request fails or is rejected.
pub async fn login(client: &Client) {
    let base_url = admin_base_url();
    let resp = client
        .post(format!("{base_url}/auth/login"))
        .form(&[
            ("email", test_admin_email()),
            ("password", test_admin_password()),
        ])
        .send()
        .await
        .expect("Failed to send login request");

    assert!(
        resp.status().is_redirection(),
        "login should redirect, got {}",
        resp.status()
    );
    let location = resp
        .headers()
        .get("location")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert_eq!(location, "/", "login should land on the dashboard");
}
