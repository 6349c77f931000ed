//! Cart endpoints (bearer token required).

use axum::{
    Json,
    extract::{Path, State},
};
use serde::{Deserialize, Serialize};

use nuru_core::ProductId;

use crate::error::Result;
use crate::middleware::CurrentUser;
use crate::models::CartView;
use crate::services::CartService;
use crate::state::AppState;

const fn default_quantity() -> i32 {
    1
}

#[derive(Debug, Deserialize)]
pub struct AddToCartRequest {
    pub product_id: ProductId,
    #[serde(default = "default_quantity")]
    pub quantity: i32,
}

/// Returned by cart mutations: the number of distinct lines now in the cart.
#[derive(Debug, Serialize)]
pub struct CartCountResponse {
    pub cart_count: i64,
}

/// `POST /cart/add` - add a product, merging into an existing line.
pub async fn add(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(req): Json<AddToCartRequest>,
) -> Result<Json<CartCountResponse>> {
    let cart_count = CartService::new(state.pool(), state.pricing())
        .add(&user, req.product_id, req.quantity)
        .await?;

    Ok(Json(CartCountResponse { cart_count }))
}

/// `DELETE /cart/remove/{product_id}` - drop a line entirely.
pub async fn remove(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(product_id): Path<ProductId>,
) -> Result<Json<CartCountResponse>> {
    let cart_count = CartService::new(state.pool(), state.pricing())
        .remove(&user, product_id)
        .await?;

    Ok(Json(CartCountResponse { cart_count }))
}

/// `GET /cart` - lines, unavailable references, and totals.
pub async fn view(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<Json<CartView>> {
    let view = CartService::new(state.pool(), state.pricing())
        .view(&user)
        .await?;

    Ok(Json(view))
}
