//! Admin shipping zone management.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::{Value, json};

use nuru_core::{Currency, ShippingZoneId};

use crate::db::shipping_zones::{NewShippingZone, ShippingZonePatch, ShippingZoneRepository};
use crate::error::{ApiError, Result};
use crate::middleware::RequireAdmin;
use crate::models::ShippingZone;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateShippingZoneRequest {
    pub name: String,
    pub rate: Decimal,
    pub currency: Currency,
    pub delivery_days: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateShippingZoneRequest {
    pub name: Option<String>,
    pub rate: Option<Decimal>,
    pub currency: Option<Currency>,
    pub delivery_days: Option<String>,
    pub active: Option<bool>,
}

/// `GET /admin/shipping-zones`.
pub async fn list(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> Result<Json<Vec<ShippingZone>>> {
    let zones = ShippingZoneRepository::new(state.pool()).list().await?;
    Ok(Json(zones))
}

/// `POST /admin/shipping-zones`.
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(req): Json<CreateShippingZoneRequest>,
) -> Result<(StatusCode, Json<ShippingZone>)> {
    if req.name.trim().is_empty() {
        return Err(ApiError::Validation("Zone name is required".to_string()));
    }
    if req.rate < Decimal::ZERO {
        return Err(ApiError::Validation(
            "Rate must be non-negative".to_string(),
        ));
    }

    let zone = ShippingZoneRepository::new(state.pool())
        .create(NewShippingZone {
            name: req.name.trim(),
            rate: req.rate,
            currency: req.currency,
            delivery_days: &req.delivery_days,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(zone)))
}

/// `PUT /admin/shipping-zones/{id}` - partial edit.
pub async fn update(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<ShippingZoneId>,
    Json(req): Json<UpdateShippingZoneRequest>,
) -> Result<Json<ShippingZone>> {
    if let Some(rate) = req.rate
        && rate < Decimal::ZERO
    {
        return Err(ApiError::Validation(
            "Rate must be non-negative".to_string(),
        ));
    }

    let zone = ShippingZoneRepository::new(state.pool())
        .update(
            id,
            ShippingZonePatch {
                name: req.name.as_deref(),
                rate: req.rate,
                currency: req.currency,
                delivery_days: req.delivery_days.as_deref(),
                active: req.active,
            },
        )
        .await
        .map_err(|e| match e {
            crate::db::RepositoryError::NotFound => {
                ApiError::NotFound(format!("Shipping zone {id} not found"))
            }
            other => other.into(),
        })?;

    Ok(Json(zone))
}

/// `DELETE /admin/shipping-zones/{id}`.
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<ShippingZoneId>,
) -> Result<Json<Value>> {
    let deleted = ShippingZoneRepository::new(state.pool()).delete(id).await?;

    if !deleted {
        return Err(ApiError::NotFound(format!("Shipping zone {id} not found")));
    }

    Ok(Json(json!({ "deleted": true })))
}
