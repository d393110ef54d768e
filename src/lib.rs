//! Bistro Backend Library
//!
//! Exposes the API, auth, and store modules for use by the server binary
//! and integration tests.

pub mod api;
pub mod auth;
pub mod config;
pub mod middleware;
pub mod models;
pub mod store;
