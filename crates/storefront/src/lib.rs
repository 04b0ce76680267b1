//! Basha Home Appliances storefront library.
//!
//! Public catalog: marketing home page and a server-rendered product listing
//! read from the database the admin panel writes.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod error;
pub mod filters;
pub mod models;
pub mod routes;
pub mod state;
