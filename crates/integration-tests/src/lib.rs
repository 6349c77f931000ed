//! Integration tests for Nuru Skincare.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p nuru-integration-tests
//! ```
//!
//! These tests exercise the library surface of `nuru-api` and `nuru-core`
//! end to end: pricing derivation, cart view assembly, checkout snapshot
//! math, and the HTTP error taxonomy. They need no database or running
//! server; everything database-shaped goes through the pure functions the
//! route handlers themselves delegate to.

pub mod fixtures;
