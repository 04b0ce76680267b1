//! Authentication error types.

use thiserror::Error;

use crate::db::RepositoryError;

/// Errors that can occur during authentication operations.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Invalid email format.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] basha_core::EmailError),

    /// No account exists for the email.
    #[error("no account for this email")]
    UserNotFound,

    /// The password did not match.
    #[error("incorrect password")]
    WrongPassword,

    /// Too many sign-in attempts for this email.
    #[error("too many sign-in attempts")]
    TooManyAttempts,

    /// Account already exists.
    #[error("account already exists")]
    UserAlreadyExists,

    /// Password too weak or invalid.
    #[error("password validation failed: {0}")]
    WeakPassword(String),

    /// Repository/database error.
    #[error("database error: {0}")]
    Repository(#[from] RepositoryError),

    /// Password hashing error.
    #[error("password hashing error")]
    PasswordHash,
}
