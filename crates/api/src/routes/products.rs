//! Public catalog endpoints.

use axum::{
    Json,
    extract::{Path, State},
};

use nuru_core::ProductId;

use crate::db::products::ProductRepository;
use crate::error::{ApiError, Result};
use crate::models::Product;
use crate::state::AppState;

/// `GET /products` - full catalog with derived price maps.
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Product>>> {
    let products = ProductRepository::new(state.pool()).list().await?;
    Ok(Json(products))
}

/// `GET /products/{id}` - one product, 404 when absent.
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
) -> Result<Json<Product>> {
    let product = ProductRepository::new(state.pool())
        .get(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Product {id} not found")))?;

    Ok(Json(product))
}
