//! Backend services for the admin panel.

pub mod auth;
pub mod media;
