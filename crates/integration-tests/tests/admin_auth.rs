//! Integration tests for the admin login flow.
//!
//! These tests require:
//! - A running `PostgreSQL` database with migrations applied
//! - The admin server running (cargo run -p basha-admin)
//! - A seeded admin account (cargo run -p basha-cli -- admin create ...)
//!
//! Run with: cargo test -p basha-integration-tests -- --ignored

use reqwest::StatusCode;

use basha_integration_tests::{admin_base_url, client, login, test_admin_email};

/// Redirect location for a failed login attempt.
async fn failed_login_location(email: &str, password: &str) -> String {
    let client = client();
    let resp = client
        .post(format!("{}/auth/login", admin_base_url()))
        .form(&[("email", email), ("password", password)])
        .send()
        .await
        .expect("Failed to send login request");

    assert!(resp.status().is_redirection());
    resp.headers()
        .get("location")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

#[tokio::test]
#[ignore = "Requires running admin server and seeded admin account"]
async fn test_login_success_redirects_to_dashboard() {
    let client = client();
    login(&client).await;

    // Session cookie grants access to the dashboard
    let resp = client
        .get(admin_base_url())
        .send()
        .await
        .expect("Failed to load dashboard");
    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.text().await.expect("body");
    assert!(body.contains("Dashboard"));
}

#[tokio::test]
#[ignore = "Requires running admin server and seeded admin account"]
async fn test_login_page_redirects_signed_in_admin_to_dashboard() {
    let client = client();
    login(&client).await;

    let resp = client
        .get(format!("{}/auth/login", admin_base_url()))
        .send()
        .await
        .expect("Failed to request login page");

    assert!(resp.status().is_redirection());
    let location = resp
        .headers()
        .get("location")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert_eq!(location, "/");
}

#[tokio::test]
#[ignore = "Requires running admin server"]
async fn test_unauthenticated_dashboard_redirects_to_login() {
    let client = client();
    let resp = client
        .get(admin_base_url())
        .send()
        .await
        .expect("Failed to request dashboard");

    assert!(resp.status().is_redirection());
    let location = resp
        .headers()
        .get("location")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert_eq!(location, "/auth/login");
}

#[tokio::test]
#[ignore = "Requires running admin server"]
async fn test_invalid_email_error_code() {
    let location = failed_login_location("not-an-email", "whatever-password").await;
    assert_eq!(location, "/auth/login?error=invalid_email");
}

#[tokio::test]
#[ignore = "Requires running admin server"]
async fn test_unknown_user_error_code() {
    let location = failed_login_location("nobody@test.local", "whatever-password").await;
    assert_eq!(location, "/auth/login?error=user_not_found");
}

#[tokio::test]
#[ignore = "Requires running admin server and seeded admin account"]
async fn test_wrong_password_error_code() {
    let location = failed_login_location(&test_admin_email(), "definitely-wrong").await;
    assert_eq!(location, "/auth/login?error=wrong_password");
}

#[tokio::test]
#[ignore = "Requires running admin server"]
async fn test_login_page_maps_error_codes_to_messages() {
    let client = client();

    let cases = [
        ("invalid_email", "Invalid email address format."),
        ("user_not_found", "No user found with this email."),
        ("wrong_password", "Incorrect password."),
        (
            "too_many_attempts",
            "Too many failed login attempts. Please try again later.",
        ),
        ("anything_else", "Failed to login. Please try again."),
    ];

    for (code, message) in cases {
        let resp = client
            .get(format!("{}/auth/login?error={code}", admin_base_url()))
            .send()
            .await
            .expect("Failed to load login page");
        assert_eq!(resp.status(), StatusCode::OK);
        let body = resp.text().await.expect("body");
        assert!(body.contains(message), "expected '{message}' for {code}");
    }
}

#[tokio::test]
#[ignore = "Requires running admin server and seeded admin account"]
async fn test_logout_clears_session() {
    let client = client();
    login(&client).await;

    let resp = client
        .post(format!("{}/auth/logout", admin_base_url()))
        .send()
        .await
        .expect("Failed to logout");
    assert!(resp.status().is_redirection());

    // The old session no longer grants access
    let resp = client
        .get(admin_base_url())
        .send()
        .await
        .expect("Failed to request dashboard");
    assert!(resp.status().is_redirection());
}
