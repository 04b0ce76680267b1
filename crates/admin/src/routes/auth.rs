//! Authentication route handlers (login page, login action, logout).

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Query, State},
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::error::AppError;
use crate::filters;
use crate::middleware::{OptionalAdminAuth, clear_current_admin, set_current_admin};
use crate::models::CurrentAdmin;
use crate::services::auth::{AuthError, AuthService};
use crate::state::AppState;

/// Login page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/login.html")]
pub struct LoginTemplate {
    error: Option<String>,
}

/// Query parameters carried across the login redirect.
#[derive(Deserialize)]
pub struct LoginQuery {
    error: Option<String>,
}

/// Login form fields.
#[derive(Deserialize)]
pub struct LoginForm {
    email: String,
    password: String,
}

/// `GET /auth/login` - Render the login form.
///
/// An already-authenticated admin is sent straight to the dashboard. An
/// `error` query parameter carries a stable code from a failed attempt,
/// which is mapped back to a user-facing message here.
pub async fn login_page(
    OptionalAdminAuth(admin): OptionalAdminAuth,
    Query(query): Query<LoginQuery>,
) -> Response {
    if admin.is_some() {
        return Redirect::to("/").into_response();
    }

    LoginTemplate {
        error: query
            .error
            .as_deref()
            .map(|code| login_error_message(code).to_string()),
    }
    .into_response()
}

/// `POST /auth/login` - Verify credentials and establish a session.
///
/// On success the admin lands on the dashboard. On failure we redirect back
/// to the form with an error code so the message survives the redirect.
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Result<Redirect, AppError> {
    let auth = AuthService::new(state.pool(), state.login_throttle());

    match auth.sign_in(&form.email, &form.password).await {
        Ok(admin) => {
            let current = CurrentAdmin {
                id: admin.id,
                email: admin.email,
            };
            set_current_admin(&session, &current)
                .await
                .map_err(|e| AppError::Internal(format!("failed to store session: {e}")))?;

            tracing::info!(admin_id = %current.id, "Admin signed in");
            Ok(Redirect::to("/"))
        }
        Err(err) => {
            tracing::warn!(error = %err, "Sign-in failed");
            Ok(Redirect::to(&format!(
                "/auth/login?error={}",
                login_error_code(&err)
            )))
        }
    }
}

/// `POST /auth/logout` - Clear the session and return to the login form.
pub async fn logout(session: Session) -> Result<Redirect, AppError> {
    clear_current_admin(&session)
        .await
        .map_err(|e| AppError::Internal(format!("failed to clear session: {e}")))?;

    Ok(Redirect::to("/auth/login"))
}

/// Stable error code for a failed sign-in, safe to put in a query string.
fn login_error_code(err: &AuthError) -> &'static str {
    match err {
        AuthError::InvalidEmail(_) => "invalid_email",
        AuthError::UserNotFound => "user_not_found",
        AuthError::WrongPassword => "wrong_password",
        AuthError::TooManyAttempts => "too_many_attempts",
        _ => "failed",
    }
}

/// User-facing message for a login error code.
fn login_error_message(code: &str) -> &'static str {
    match code {
        "invalid_email" => "Invalid email address format.",
        "user_not_found" => "No user found with this email.",
        "wrong_password" => "Incorrect password.",
        "too_many_attempts" => "Too many failed login attempts. Please try again later.",
        _ => "Failed to login. Please try again.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use basha_core::EmailError;

    #[test]
    fn test_login_error_code_covers_known_failures() {
        assert_eq!(
            login_error_code(&AuthError::InvalidEmail(EmailError::MissingAtSymbol)),
            "invalid_email"
        );
        assert_eq!(login_error_code(&AuthError::UserNotFound), "user_not_found");
        assert_eq!(login_error_code(&AuthError::WrongPassword), "wrong_password");
        assert_eq!(
            login_error_code(&AuthError::TooManyAttempts),
            "too_many_attempts"
        );
        assert_eq!(login_error_code(&AuthError::PasswordHash), "failed");
    }

    #[test]
    fn test_login_error_message_exact_wording() {
        assert_eq!(
            login_error_message("invalid_email"),
            "Invalid email address format."
        );
        assert_eq!(
            login_error_message("user_not_found"),
            "No user found with this email."
        );
        assert_eq!(login_error_message("wrong_password"), "Incorrect password.");
        assert_eq!(
            login_error_message("too_many_attempts"),
            "Too many failed login attempts. Please try again later."
        );
    }

    #[test]
    fn test_login_error_message_fallback() {
        assert_eq!(
            login_error_message("something_else"),
            "Failed to login. Please try again."
        );
    }
}
