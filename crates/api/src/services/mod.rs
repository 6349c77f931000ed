//! Business logic services.
//!
//! Services sit between route handlers and repositories: they own
//! validation and multi-step workflows, and are constructed per request
//! from the shared pool.

pub mod auth;
pub mod cart;
pub mod checkout;
pub mod payment_methods;

pub use auth::{AuthService, IssuedToken, RegisterInput};
pub use cart::CartService;
pub use checkout::CheckoutService;
