//! Public promotion endpoints.
//!
//! Validation only reports whether a code could be used; checkout does not
//! consume or apply promotions.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use nuru_core::PromotionKind;

use crate::db::promotions::PromotionRepository;
use crate::error::{ApiError, Result};
use crate::models::Promotion;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ValidatePromotionRequest {
    pub code: String,
}

#[derive(Debug, Serialize)]
pub struct ValidPromotionResponse {
    pub valid: bool,
    pub code: String,
    pub discount: rust_decimal::Decimal,
    pub kind: PromotionKind,
}

/// `GET /promotions/active` - promotions currently marked active.
pub async fn active(State(state): State<AppState>) -> Result<Json<Vec<Promotion>>> {
    let promos = PromotionRepository::new(state.pool()).list_active().await?;
    Ok(Json(promos))
}

/// `POST /promotions/validate` - check a code without consuming it.
///
/// Unknown codes are 404; expired or spent codes are 400 with the reason.
pub async fn validate(
    State(state): State<AppState>,
    Json(req): Json<ValidatePromotionRequest>,
) -> Result<Json<ValidPromotionResponse>> {
    let code = req.code.trim().to_uppercase();

    let promo = PromotionRepository::new(state.pool())
        .find_active_by_code(&code)
        .await?
        .ok_or_else(|| ApiError::NotFound("Invalid promo code".to_string()))?;

    promo
        .check_usable(chrono::Utc::now())
        .map_err(|reason| ApiError::Validation(reason.to_string()))?;

    Ok(Json(ValidPromotionResponse {
        valid: true,
        code: promo.code,
        discount: promo.discount,
        kind: promo.kind,
    }))
}
