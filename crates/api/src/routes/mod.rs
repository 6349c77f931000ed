//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET    /                        - API info
//! GET    /health                  - Liveness
//! GET    /health/ready            - Readiness (checks the pool)
//!
//! # Catalog (public)
//! GET    /products                - Product listing with price maps
//! GET    /products/{id}           - Product detail
//! GET    /payment-methods/{country} - Payment methods for a country
//!
//! # Promotions (public)
//! GET    /promotions/active       - Active promo codes
//! POST   /promotions/validate     - Check a code (not consumed)
//!
//! # Storefront submissions (public)
//! POST   /support-tickets         - Open a support ticket
//!
//! # Auth
//! POST   /auth/register           - Create account, returns bearer token
//! POST   /auth/login              - Login, returns bearer token
//! GET    /auth/profile            - Current user (requires token)
//!
//! # Cart & checkout (require token)
//! POST   /cart/add                - Add product (merges quantities)
//! DELETE /cart/remove/{product_id} - Remove a line
//! GET    /cart                    - Lines, unavailable refs, totals
//! POST   /checkout                - Cart -> order, clears cart
//! GET    /orders                  - Own orders, newest first
//! GET    /orders/{id}             - Own order with live conversion
//!
//! # Admin (require admin token; see admin module)
//! /admin/...
//! ```

pub mod admin;
pub mod auth;
pub mod cart;
pub mod meta;
pub mod orders;
pub mod payment_methods;
pub mod products;
pub mod promotions;
pub mod support;

use axum::{
    Router,
    routing::{delete, get, post},
};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the full application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(meta::api_info))
        .route("/health", get(meta::health))
        .route("/health/ready", get(meta::health_ready))
        .route("/products", get(products::list))
        .route("/products/{id}", get(products::get))
        .route("/payment-methods/{country}", get(payment_methods::for_country))
        .route("/promotions/active", get(promotions::active))
        .route("/promotions/validate", post(promotions::validate))
        .route("/support-tickets", post(support::create))
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/auth/profile", get(auth::profile))
        .route("/cart/add", post(cart::add))
        .route("/cart/remove/{product_id}", delete(cart::remove))
        .route("/cart", get(cart::view))
        .route("/checkout", post(orders::checkout))
        .route("/orders", get(orders::list))
        .route("/orders/{id}", get(orders::get))
        .nest("/admin", admin::router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
