//! Admin dashboard KPIs.

use axum::{Json, extract::State};
use chrono::{Duration, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::db::orders::OrderRepository;
use crate::db::products::ProductRepository;
use crate::db::users::UserRepository;
use crate::error::Result;
use crate::middleware::RequireAdmin;
use crate::models::Order;
use crate::state::AppState;

/// Days of history the revenue KPI covers.
const REVENUE_WINDOW_DAYS: i64 = 30;

/// Recent orders shown on the dashboard.
const RECENT_ORDERS: i64 = 5;

// Analytics integration never shipped; these two figures have always been
// hardcoded on the dashboard.
const CONVERSION_RATE: f64 = 3.2;
const REFUND_RATE: f64 = 0.5;

#[derive(Debug, Serialize)]
pub struct KpiResponse {
    /// Paid revenue over the last 30 days, in USD.
    pub revenue_usd: Decimal,
    pub total_orders: i64,
    pub total_customers: i64,
    pub out_of_stock: i64,
    pub conversion_rate: f64,
    pub refund_rate: f64,
    pub recent_orders: Vec<Order>,
}

/// `GET /admin/dashboard/kpis`.
pub async fn kpis(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> Result<Json<KpiResponse>> {
    let orders = OrderRepository::new(state.pool());
    let since = Utc::now() - Duration::days(REVENUE_WINDOW_DAYS);

    let revenue_usd = orders.paid_revenue_usd_since(since).await?;
    let total_orders = orders.count_all().await?;
    let recent_orders = orders.list_recent(RECENT_ORDERS).await?;
    let total_customers = UserRepository::new(state.pool()).count_customers().await?;
    let out_of_stock = ProductRepository::new(state.pool())
        .count_out_of_stock()
        .await?;

    Ok(Json(KpiResponse {
        revenue_usd,
        total_orders,
        total_customers,
        out_of_stock,
        conversion_rate: CONVERSION_RATE,
        refund_rate: REFUND_RATE,
        recent_orders,
    }))
}
