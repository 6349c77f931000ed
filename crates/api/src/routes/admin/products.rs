//! Admin catalog management.
//!
//! The per-currency price map is recomputed here on every create and on any
//! edit that changes the base price; it cannot be set directly.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::{Value, json};

use nuru_core::ProductId;

use crate::db::products::{NewProduct, ProductRepository};
use crate::error::{ApiError, Result};
use crate::middleware::RequireAdmin;
use crate::models::Product;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
    pub name: String,
    pub description: String,
    pub category: String,
    pub base_price_usd: Decimal,
    #[serde(default = "default_in_stock")]
    pub in_stock: bool,
    pub image_url: Option<String>,
}

const fn default_in_stock() -> bool {
    true
}

/// Partial edit; absent fields are left unchanged.
#[derive(Debug, Deserialize)]
pub struct UpdateProductRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub base_price_usd: Option<Decimal>,
    pub in_stock: Option<bool>,
    pub image_url: Option<String>,
}

/// `GET /admin/products` - the catalog including out-of-stock items.
pub async fn list(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> Result<Json<Vec<Product>>> {
    let products = ProductRepository::new(state.pool()).list().await?;
    Ok(Json(products))
}

/// `POST /admin/products` - add a product.
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(req): Json<CreateProductRequest>,
) -> Result<(StatusCode, Json<Product>)> {
    validate_price(req.base_price_usd)?;
    if req.name.trim().is_empty() {
        return Err(ApiError::Validation("Product name is required".to_string()));
    }

    let prices = state.pricing().price_map(req.base_price_usd);

    let product = ProductRepository::new(state.pool())
        .create(NewProduct {
            name: req.name.trim(),
            description: &req.description,
            category: &req.category,
            base_price_usd: req.base_price_usd,
            prices,
            in_stock: req.in_stock,
            image_url: req.image_url.as_deref(),
        })
        .await?;

    tracing::info!(product_id = %product.id, "Product created");

    Ok((StatusCode::CREATED, Json(product)))
}

/// `PUT /admin/products/{id}` - edit a product.
pub async fn update(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<ProductId>,
    Json(req): Json<UpdateProductRequest>,
) -> Result<Json<Product>> {
    let repo = ProductRepository::new(state.pool());

    let mut product = repo
        .get(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Product {id} not found")))?;

    if let Some(name) = req.name {
        product.name = name;
    }
    if let Some(description) = req.description {
        product.description = description;
    }
    if let Some(category) = req.category {
        product.category = category;
    }
    if let Some(in_stock) = req.in_stock {
        product.in_stock = in_stock;
    }
    if let Some(image_url) = req.image_url {
        product.image_url = Some(image_url);
    }
    if let Some(base_price_usd) = req.base_price_usd {
        validate_price(base_price_usd)?;
        product.base_price_usd = base_price_usd;
        product.prices = state.pricing().price_map(base_price_usd);
    }

    let updated = repo.update(&product).await?;

    Ok(Json(updated))
}

/// `DELETE /admin/products/{id}` - hard delete.
///
/// Cart lines that still reference the product become unavailable
/// references; past orders keep their snapshots.
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<ProductId>,
) -> Result<Json<Value>> {
    let deleted = ProductRepository::new(state.pool()).delete(id).await?;

    if !deleted {
        return Err(ApiError::NotFound(format!("Product {id} not found")));
    }

    tracing::info!(product_id = %id, "Product deleted");

    Ok(Json(json!({ "deleted": true })))
}

fn validate_price(price: Decimal) -> Result<()> {
    if price < Decimal::ZERO {
        return Err(ApiError::Validation(
            "Base price must be non-negative".to_string(),
        ));
    }
    Ok(())
}
