//! Admin user domain types.
//!
//! These types represent validated domain objects separate from database row
//! types. Any authenticated admin has full catalog access; there is no role
//! model.

use chrono::{DateTime, Utc};

use basha_core::{AdminUserId, Email};

/// An admin panel account (domain type).
#[derive(Debug, Clone)]
pub struct AdminUser {
    /// Unique account ID.
    pub id: AdminUserId,
    /// Account email address.
    pub email: Email,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
    /// When the account was last updated.
    pub updated_at: DateTime<Utc>,
}
