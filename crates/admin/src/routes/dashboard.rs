//! Admin dashboard.

use askama::Template;
use askama_web::WebTemplate;

use crate::filters;
use crate::middleware::RequireAdminAuth;

/// Dashboard template.
#[derive(Template, WebTemplate)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    admin_email: String,
}

/// `GET /` - Landing page after login, links to the product manager.
pub async fn index(RequireAdminAuth(admin): RequireAdminAuth) -> DashboardTemplate {
    DashboardTemplate {
        admin_email: admin.email.to_string(),
    }
}
