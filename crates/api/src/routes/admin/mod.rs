//! Admin panel routes, all nested under `/admin`.
//!
//! Every handler except login takes the [`RequireAdmin`] extractor, so a
//! customer token gets 403 and a missing one 401.
//!
//! [`RequireAdmin`]: crate::middleware::RequireAdmin

pub mod auth;
pub mod content;
pub mod customers;
pub mod dashboard;
pub mod orders;
pub mod products;
pub mod profile;
pub mod promotions;
pub mod reviews;
pub mod shipping_zones;
pub mod support;

use axum::{
    Router,
    routing::{delete, get, post, put},
};

use crate::state::AppState;

/// Build the `/admin` router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(auth::login))
        .route("/dashboard/kpis", get(dashboard::kpis))
        .route("/products", get(products::list).post(products::create))
        .route(
            "/products/{id}",
            put(products::update).delete(products::delete),
        )
        .route("/orders", get(orders::list))
        .route("/orders/{id}/status", put(orders::update_status))
        .route("/payments", get(orders::payments))
        .route("/customers", get(customers::list))
        .route("/reviews", get(reviews::list))
        .route("/reviews/{id}/approve", put(reviews::approve))
        .route("/reviews/{id}/reject", put(reviews::reject))
        .route("/reviews/{id}", delete(reviews::delete))
        .route(
            "/promotions",
            get(promotions::list).post(promotions::create),
        )
        .route("/promotions/{id}/status", put(promotions::set_status))
        .route("/promotions/{id}", delete(promotions::delete))
        .route(
            "/shipping-zones",
            get(shipping_zones::list).post(shipping_zones::create),
        )
        .route(
            "/shipping-zones/{id}",
            put(shipping_zones::update).delete(shipping_zones::delete),
        )
        .route("/content", get(content::get).put(content::put))
        .route("/support-tickets", get(support::list))
        .route("/support-tickets/{id}/status", put(support::set_status))
        .route("/profile/password", put(profile::change_password))
}
