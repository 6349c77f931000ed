//! Checkout and order history endpoints (bearer token required).

use axum::{
    Json,
    extract::{Path, State},
};
use serde::{Deserialize, Serialize};

use nuru_core::{LocalizedTotal, OrderId};

use crate::db::orders::OrderRepository;
use crate::error::{ApiError, Result};
use crate::middleware::CurrentUser;
use crate::models::Order;
use crate::services::CheckoutService;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CheckoutRequest {
    /// Stored verbatim on the order.
    pub shipping_address: serde_json::Value,
    pub payment_method: String,
}

#[derive(Debug, Serialize)]
pub struct CheckoutResponse {
    pub order_id: OrderId,
    pub order_code: String,
    pub total_usd: rust_decimal::Decimal,
    pub items_count: usize,
}

/// An order with its total converted at today's rates.
///
/// The USD total inside `order` is the checkout-time snapshot; `total_local`
/// is live conversion for display.
#[derive(Debug, Serialize)]
pub struct OrderDetailResponse {
    #[serde(flatten)]
    pub order: Order,
    pub total_local: LocalizedTotal,
}

/// `POST /checkout` - turn the cart into an order.
pub async fn checkout(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(req): Json<CheckoutRequest>,
) -> Result<Json<CheckoutResponse>> {
    let order = CheckoutService::new(state.pool())
        .place_order(&user, &req.shipping_address, &req.payment_method)
        .await?;

    Ok(Json(CheckoutResponse {
        order_id: order.id,
        order_code: order.code.clone(),
        total_usd: order.total_usd,
        items_count: order.items.len(),
    }))
}

/// `GET /orders` - the user's orders, newest first.
pub async fn list(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<Json<Vec<Order>>> {
    let orders = OrderRepository::new(state.pool())
        .list_for_user(user.id)
        .await?;

    Ok(Json(orders))
}

/// `GET /orders/{id}` - one order with live currency conversion.
pub async fn get(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<OrderId>,
) -> Result<Json<OrderDetailResponse>> {
    let order = OrderRepository::new(state.pool())
        .get_for_user(id, user.id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Order {id} not found")))?;

    let total_local = state
        .pricing()
        .localize(order.total_usd, user.preferred_currency);

    Ok(Json(OrderDetailResponse { order, total_local }))
}
