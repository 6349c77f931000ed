//! Admin promotion management.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::{Value, json};

use nuru_core::{PromotionId, PromotionKind, PromotionStatus};

use crate::db::promotions::{NewPromotion, PromotionRepository};
use crate::error::{ApiError, Result};
use crate::middleware::RequireAdmin;
use crate::models::Promotion;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreatePromotionRequest {
    pub code: String,
    pub discount: Decimal,
    pub kind: PromotionKind,
    pub usage_limit: Option<i32>,
    pub expires_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
pub struct SetPromotionStatusRequest {
    pub status: PromotionStatus,
}

/// `GET /admin/promotions` - every promotion, newest first.
pub async fn list(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> Result<Json<Vec<Promotion>>> {
    let promos = PromotionRepository::new(state.pool()).list_all().await?;
    Ok(Json(promos))
}

/// `POST /admin/promotions` - create a code. 409 on duplicates.
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(req): Json<CreatePromotionRequest>,
) -> Result<(StatusCode, Json<Promotion>)> {
    let code = req.code.trim().to_uppercase();
    if code.is_empty() {
        return Err(ApiError::Validation("Promo code is required".to_string()));
    }

    if req.discount <= Decimal::ZERO {
        return Err(ApiError::Validation(
            "Discount must be positive".to_string(),
        ));
    }
    if req.kind == PromotionKind::Percentage && req.discount > Decimal::ONE_HUNDRED {
        return Err(ApiError::Validation(
            "Percentage discount cannot exceed 100".to_string(),
        ));
    }

    let promo = PromotionRepository::new(state.pool())
        .create(NewPromotion {
            code: &code,
            discount: req.discount,
            kind: req.kind,
            usage_limit: req.usage_limit,
            expires_at: req.expires_at,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(promo)))
}

/// `PUT /admin/promotions/{id}/status` - enable or disable a code.
pub async fn set_status(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<PromotionId>,
    Json(req): Json<SetPromotionStatusRequest>,
) -> Result<Json<Promotion>> {
    let promo = PromotionRepository::new(state.pool())
        .set_status(id, req.status)
        .await
        .map_err(|e| match e {
            crate::db::RepositoryError::NotFound => {
                ApiError::NotFound(format!("Promotion {id} not found"))
            }
            other => other.into(),
        })?;

    Ok(Json(promo))
}

/// `DELETE /admin/promotions/{id}`.
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<PromotionId>,
) -> Result<Json<Value>> {
    let deleted = PromotionRepository::new(state.pool()).delete(id).await?;

    if !deleted {
        return Err(ApiError::NotFound(format!("Promotion {id} not found")));
    }

    Ok(Json(json!({ "deleted": true })))
}
