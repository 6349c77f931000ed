//! Nuru Skincare backend library.
//!
//! The binary in `main.rs` wires this library to a socket; everything else
//! lives here so the route handlers and services can be exercised from
//! integration tests.
//!
//! # Modules
//!
//! - [`config`] - Environment-driven configuration
//! - [`db`] - `PostgreSQL` pool and repositories
//! - [`error`] - Unified `ApiError` and status-code mapping
//! - [`middleware`] - Bearer-token auth extractors
//! - [`models`] - Domain types and response shapes
//! - [`routes`] - Axum route handlers (storefront + admin)
//! - [`services`] - Auth, cart, checkout, and payment-method logic
//! - [`state`] - Shared application state

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
