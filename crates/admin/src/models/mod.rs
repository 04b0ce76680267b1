//! Domain models for the admin panel.

pub mod admin_user;
pub mod product;
pub mod session;

pub use admin_user::AdminUser;
pub use product::{NewProduct, Product, ProductChanges};
pub use session::{CurrentAdmin, session_keys};
