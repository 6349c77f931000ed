//! Admin order and payment views.

use axum::{
    Json,
    extract::{Path, State},
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use nuru_core::{OrderId, OrderStatus, PaymentStatus, UserId};

use crate::db::orders::OrderRepository;
use crate::error::{ApiError, Result};
use crate::middleware::RequireAdmin;
use crate::models::Order;
use crate::state::AppState;

/// Status edit; absent fields are left unchanged.
#[derive(Debug, Deserialize)]
pub struct UpdateOrderStatusRequest {
    pub payment_status: Option<PaymentStatus>,
    pub order_status: Option<OrderStatus>,
}

/// Payment-centric projection of an order for `GET /admin/payments`.
#[derive(Debug, Serialize)]
pub struct PaymentRow {
    pub order_id: OrderId,
    pub order_code: String,
    pub user_id: UserId,
    pub amount_usd: Decimal,
    pub payment_method: String,
    pub payment_status: PaymentStatus,
    pub created_at: DateTime<Utc>,
}

impl From<&Order> for PaymentRow {
    fn from(order: &Order) -> Self {
        Self {
            order_id: order.id,
            order_code: order.code.clone(),
            user_id: order.user_id,
            amount_usd: order.total_usd,
            payment_method: order.payment_method.clone(),
            payment_status: order.payment_status,
            created_at: order.created_at,
        }
    }
}

/// `GET /admin/orders` - every order, newest first.
pub async fn list(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> Result<Json<Vec<Order>>> {
    let orders = OrderRepository::new(state.pool()).list_all().await?;
    Ok(Json(orders))
}

/// `PUT /admin/orders/{id}/status` - advance payment and/or fulfillment.
pub async fn update_status(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<OrderId>,
    Json(req): Json<UpdateOrderStatusRequest>,
) -> Result<Json<Order>> {
    if req.payment_status.is_none() && req.order_status.is_none() {
        return Err(ApiError::Validation(
            "Provide payment_status and/or order_status".to_string(),
        ));
    }

    let order = OrderRepository::new(state.pool())
        .update_statuses(id, req.payment_status, req.order_status)
        .await?;

    tracing::info!(
        order_code = %order.code,
        payment_status = %order.payment_status,
        order_status = %order.order_status,
        "Order status updated"
    );

    Ok(Json(order))
}

/// `GET /admin/payments` - payment ledger derived from orders.
pub async fn payments(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> Result<Json<Vec<PaymentRow>>> {
    let orders = OrderRepository::new(state.pool()).list_all().await?;
    let rows: Vec<PaymentRow> = orders.iter().map(PaymentRow::from).collect();
    Ok(Json(rows))
}
