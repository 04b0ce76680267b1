//! Admin panel for the Basha Home Appliances catalog.
//!
//! Password-protected management UI: admin sign-in with per-email throttling,
//! product CRUD, and image uploads into the shared media store.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod error;
pub mod filters;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
