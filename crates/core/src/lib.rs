//! Nuru Core - Shared types library.
//!
//! This crate provides common types used across all Nuru Skincare components:
//! - `api` - HTTP backend (storefront + admin surface)
//! - `cli` - Command-line tools for migrations and seeding
//!
//! # Architecture
//!
//! The core crate contains only types and pure logic - no I/O, no database
//! access, no HTTP clients. This keeps it lightweight and allows it to be
//! used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, emails, currencies, and statuses
//! - [`pricing`] - Pure multi-currency pricing engine

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod pricing;
pub mod types;

pub use pricing::*;
pub use types::*;
