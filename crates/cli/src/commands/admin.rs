//! Admin user management commands.
//!
//! # Usage
//!
//! ```bash
//! basha-cli admin create -e admin@example.com -p "a strong password"
//! ```
//!
//! # Environment Variables
//!
//! - `ADMIN_DATABASE_URL` - `PostgreSQL` connection string (falls back to
//!   `DATABASE_URL`)

use secrecy::SecretString;
use thiserror::Error;

use basha_admin::db;
use basha_admin::services::auth::{AuthError, AuthService, LoginThrottle};

/// Errors that can occur during admin operations.
#[derive(Debug, Error)]
pub enum AdminCliError {
    /// Required environment variable is missing.
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(&'static str),

    /// Database connection error.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Account creation failed.
    #[error("Failed to create admin: {0}")]
    Auth(#[from] AuthError),
}

/// Create a new admin user with an argon2-hashed password.
///
/// # Errors
///
/// Returns `AdminCliError::Auth` if the email is invalid, the password is too
/// weak, or the email is already registered.
pub async fn create_user(email: &str, password: &str) -> Result<(), AdminCliError> {
    dotenvy::dotenv().ok();

    let database_url = database_url()?;

    tracing::info!("Connecting to database...");
    let pool = db::create_pool(&database_url).await?;

    let throttle = LoginThrottle::new();
    let auth = AuthService::new(&pool, &throttle);

    let admin = auth.create_admin(email, password).await?;

    tracing::info!(
        admin_id = %admin.id,
        email = %admin.email,
        "Admin user created successfully"
    );
    Ok(())
}

fn database_url() -> Result<SecretString, AdminCliError> {
    std::env::var("ADMIN_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
        .map(SecretString::from)
        .map_err(|_| AdminCliError::MissingEnvVar("ADMIN_DATABASE_URL"))
}
